// crates/addrdb-core/src/error.rs
use thiserror::Error;

/// Errors raised by index readers and dataset loading.
///
/// Repository operations never surface these to callers: they are logged and
/// the affected query degrades to "no additional results".
#[derive(Debug, Error)]
pub enum AddrError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Binary dataset error: {0}")]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "json")]
    #[error("JSON dataset error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Region '{0}' is not present in the index")]
    UnknownRegion(String),
}

pub type Result<T> = std::result::Result<T, AddrError>;
