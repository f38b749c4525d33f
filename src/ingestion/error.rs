use std::path::PathBuf;

/// Failure to ingest a single configured document.
#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    /// The file could not be read (missing, permissions, other I/O fault).
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IngestionError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestionError>;
