// crates/addrdb-core/src/loader/common_io.rs
use crate::error::{AddrError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Payload encoding of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Binary,
    #[cfg(feature = "json")]
    Json,
}

impl DatasetFormat {
    /// `.json` / `.json.gz` → JSON, anything else → bincode.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        if name.ends_with(".json") {
            #[cfg(feature = "json")]
            {
                return Ok(DatasetFormat::Json);
            }
            #[cfg(not(feature = "json"))]
            {
                return Err(AddrError::InvalidDataset(format!(
                    "{} is JSON; enable the `json` feature",
                    path.display()
                )));
            }
        }
        Ok(DatasetFormat::Binary)
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Opens a dataset file, buffers it, and unwraps gzip for `.gz` paths.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        AddrError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(AddrError::InvalidDataset(format!(
                "{} is gzip-compressed; enable the `compact` feature",
                path.display()
            )));
        }
    }
    Ok(Box::new(reader))
}

/// Output side of a dataset file. Must be closed with
/// [`finish`](DatasetWriter::finish); dropping it may leave a truncated file.
pub enum DatasetWriter {
    Plain(BufWriter<File>),
    #[cfg(feature = "compact")]
    Gzip(GzEncoder<BufWriter<File>>),
}

impl DatasetWriter {
    /// Writes the gzip trailer (if any) and flushes everything to disk.
    pub fn finish(self) -> Result<()> {
        let mut inner = match self {
            DatasetWriter::Plain(writer) => writer,
            #[cfg(feature = "compact")]
            DatasetWriter::Gzip(encoder) => encoder.finish()?,
        };
        inner.flush()?;
        Ok(())
    }
}

impl Write for DatasetWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            DatasetWriter::Plain(writer) => writer.write(buf),
            #[cfg(feature = "compact")]
            DatasetWriter::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            DatasetWriter::Plain(writer) => writer.flush(),
            #[cfg(feature = "compact")]
            DatasetWriter::Gzip(encoder) => encoder.flush(),
        }
    }
}

/// Counterpart of [`open_stream`] for writing.
pub fn create_stream(path: &Path) -> Result<DatasetWriter> {
    let writer = BufWriter::new(File::create(path)?);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(DatasetWriter::Gzip(GzEncoder::new(
                writer,
                Compression::default(),
            )));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(AddrError::InvalidDataset(format!(
                "{} is gzip-compressed; enable the `compact` feature",
                path.display()
            )));
        }
    }
    Ok(DatasetWriter::Plain(writer))
}
