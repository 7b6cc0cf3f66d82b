//! Class hierarchy error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the class hierarchy.
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// The hierarchy file could not be read.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON, or does not have the shape of a class tree.
    #[error("Invalid hierarchy document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but a node breaks a structural rule.
    #[error("Malformed node at {path}: {message}")]
    Malformed { path: String, message: String },
}

impl HierarchyError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HierarchyError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        HierarchyError::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }
}
