use std::io;
use std::path::PathBuf;

/// Errors from loading a world model.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read error: {0}")]
    Read(#[source] io::Error),
    /// Malformed JSON, a missing required field or a field of the wrong type.
    #[error("invalid world document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    /// True when the source file does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            LoadError::Io { source, .. } | LoadError::Read(source) => {
                source.kind() == io::ErrorKind::NotFound
            }
            LoadError::Parse(_) => false,
        }
    }

    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            LoadError::Read(source) => LoadError::Io {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}
