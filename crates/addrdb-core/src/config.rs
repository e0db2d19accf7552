// crates/addrdb-core/src/config.rs
use serde::{Deserialize, Serialize};

/// Tunables of a [`RegionRepository`](crate::repository::RegionRepository).
///
/// Deserializable so applications can keep it next to their other settings;
/// every field falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Match and report transliterated (English) names instead of local ones.
    pub use_transliterated_names: bool,
    /// Shortest query (in chars) that is also tried as a postcode, provided it
    /// contains a digit.
    pub min_postcode_query_len: usize,
    /// Shortest query (in chars) for which villages are searched in the index.
    pub min_village_query_len: usize,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            use_transliterated_names: false,
            min_postcode_query_len: 2,
            min_village_query_len: 3,
        }
    }
}
