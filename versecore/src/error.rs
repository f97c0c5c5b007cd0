//! Error types shared by the slowVerse crates

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerseError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed progress record: {0}")]
    Parse(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VerseError {
    /// Attach the path an I/O error came from.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        VerseError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for an I/O error whose cause is a missing file or directory.
    pub fn is_missing(&self) -> bool {
        matches!(self, VerseError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, VerseError>;
