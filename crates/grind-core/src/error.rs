use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrindError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown link id: {0}")]
    UnknownLink(String),

    #[error("Duplicate link id: {0}")]
    DuplicateLink(String),

    #[error("Store error at '{path}': {reason}")]
    Store { path: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for GrindError {
    fn from(e: serde_json::Error) -> Self {
        GrindError::SerializationError(e.to_string())
    }
}
