//! Core error types for the FortuneOK application.
//!
//! This module defines storage-agnostic error types. Store-specific errors
//! are converted to these types by the storage layer; upstream fetch and
//! cache failures arrive via `#[from]` conversions.

use thiserror::Error;

use crate::cache::CacheError;
use fortuneok_market_data::FetchError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Cache failures never normally reach callers (the cache-aside services
/// absorb them); the variant exists for call sites that use the store
/// directly.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cache operation failed: {0}")]
    Cache(#[from] CacheError),

    #[error("Market data operation failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
