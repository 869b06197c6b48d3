//! Error types for the contact application.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures are not errors here: they are collected as
//! [`FieldError`](crate::validation::FieldError)s and returned to the caller as data.

use thiserror::Error;

/// Errors that can occur when reading or writing the contact collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No contact with the given id exists
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The persistence layer could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing file failed
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document could not be encoded or decoded
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether this error means "no such record" rather than a broken store.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised by a view renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No template is registered under this name
    #[error("Unknown view: {0}")]
    UnknownView(String),

    /// The data object is missing something the view needs
    #[error("Invalid data for view {view}: {reason}")]
    InvalidData { view: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with RenderError
pub type RenderResult<T> = Result<T, RenderError>;
