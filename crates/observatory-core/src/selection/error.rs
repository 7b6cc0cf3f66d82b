use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a class selection.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Class label '{0}' has no namespace separator (expected e.g. 'schema:Product')")]
    MissingSeparator(String),

    #[error("Class label '{0}' has an empty namespace")]
    EmptyNamespace(String),

    #[error("Class label '{0}' has an empty class name")]
    EmptyClassName(String),

    #[error("Failed to scan plot directory {}: {source}", path.display())]
    AssetScan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SelectionError {
    pub fn asset_scan(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SelectionError::AssetScan {
            path: path.into(),
            source,
        }
    }
}
