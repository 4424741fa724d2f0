use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrainError>;

#[derive(Error, Debug)]
pub enum BrainError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl BrainError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}
