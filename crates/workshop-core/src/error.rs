//! Error types for workshop-core

use std::path::PathBuf;

/// Result type for workshop-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during workshop reconciliation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest exists but is not valid JSON, or is not a JSON object.
    /// Fatal for the whole run: a corrupt manifest means the repository
    /// itself is broken and must be fixed by hand.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("Failed to serialize manifest at {path}: {message}")]
    ManifestSerialize { path: PathBuf, message: String },

    /// A project path that does not live under the workshop root has no
    /// repository-relative form to derive a name from.
    #[error("Project {path} is not under workshop root {root}")]
    ProjectOutsideRoot { path: PathBuf, root: PathBuf },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
