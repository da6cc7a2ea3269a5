use thiserror::Error;

/// Input that fails a precondition of a store operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Todo must be more than {min} characters!")]
    TooShort { min: usize, len: usize },
}

/// Failures of the durable slot. None of these are fatal to the store.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Stored todos in '{key}' are corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("Failed to read todos from '{key}': {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Failed to save todos to '{key}': {reason}")]
    WriteFailed { key: String, reason: String },
}

#[derive(Error, Debug)]
pub enum ItaskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No todo matches {0}")]
    TodoNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl ItaskError {
    /// Errors the store has already surfaced through a notification.
    pub fn is_notified(&self) -> bool {
        matches!(self, ItaskError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, ItaskError>;
