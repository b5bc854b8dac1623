use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdrError {
    #[error("Not found: {0}")]
    NotFoundError(String),
    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Template error: {0}")]
    TemplateParseError(String),
    #[error("Malformed configuration {}: {source}", path.display())]
    ConfigParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl AdrError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AdrError::WriteError {
            path: path.into(),
            source,
        }
    }
}
