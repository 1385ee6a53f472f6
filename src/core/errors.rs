use serde::Serialize;
use thiserror::Error;

/// A single violated constraint on one input field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: &str, description: String) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.to_string(),
            description,
        }
    }
}

#[derive(Error, Debug, Serialize)]
pub enum DirectoryError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),
    #[error("User {0} not found")]
    UserNotFound(String),
    /// One or more fields failed validation; carries every violation found.
    #[error("Invalid input: {0:?}")]
    InvalidInput(Vec<FieldError>),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Logging error: {0}")]
    LoggingError(String),
}
