//! Error types for the faqdesk CLI.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application: configuration, I/O, store access, authentication,
//! input validation, and serialization.

use thiserror::Error;

/// Unified error type for the faqdesk CLI.
///
/// All fallible functions in the application return `Result<T, AppError>`.
/// We never panic — errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing store unavailable or failed mid-operation.
    /// Fatal for the operation in progress; the caller surfaces
    /// a "try again later" message.
    #[error("Store error: {0}")]
    Store(String),

    /// Authentication failures. The message never distinguishes an
    /// unknown account from a wrong password.
    #[error("Authentication failed")]
    Auth,

    /// The actor lacks the role required for the operation
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Invalid user input (blank question/answer, malformed fields)
    #[error("Invalid input: {0}")]
    Invalid(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
