use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("invalid root path '{}': not a directory", path.display())]
    InvalidRoot { path: PathBuf },
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write output to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
impl DigestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DigestError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DigestError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
