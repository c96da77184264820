//! Error types for the tessera library.
//!
//! Every fallible operation returns [`Result`], and every failure is a
//! variant of [`TesseraError`]. The taxonomy mirrors the request lifecycle:
//! boundary rejections (`InvalidInput`, `EmptyValue`), store outcomes
//! (`Conflict`, `NotFound`), query interpretation (`Unparseable`), and
//! persistence failures (`Storage`, `Io`, `Json`). All errors are terminal
//! for the triggering operation; nothing is retried or swallowed.
//!
//! # Examples
//!
//! ```
//! use tessera::error::{Result, TesseraError};
//!
//! fn reject_blank(value: &str) -> Result<()> {
//!     if value.trim().is_empty() {
//!         return Err(TesseraError::EmptyValue);
//!     }
//!     Ok(())
//! }
//!
//! assert!(reject_blank("   ").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for tessera operations.
#[derive(Error, Debug)]
pub enum TesseraError {
    /// The request payload had the wrong shape or type at the boundary.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The submitted value was empty after trimming.
    #[error("Value is empty after trimming")]
    EmptyValue,

    /// A record with the same digest is already stored.
    #[error("Conflict: record {0} already exists")]
    Conflict(String),

    /// No record exists under the given digest.
    #[error("Not found: {0}")]
    NotFound(String),

    /// No natural-language detector matched the query.
    #[error("Unparseable query: {0}")]
    Unparseable(String),

    /// Storage-related errors (snapshot load/save).
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O errors (file operations etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`TesseraError`].
pub type Result<T> = std::result::Result<T, TesseraError>;

impl TesseraError {
    /// Create a new invalid-input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        TesseraError::InvalidInput(msg.into())
    }

    /// Create a new conflict error for an already-stored digest.
    pub fn conflict<S: Into<String>>(digest: S) -> Self {
        TesseraError::Conflict(digest.into())
    }

    /// Create a new not-found error for a missing digest.
    pub fn not_found<S: Into<String>>(digest: S) -> Self {
        TesseraError::NotFound(digest.into())
    }

    /// Create a new unparseable error carrying the original query.
    pub fn unparseable<S: Into<String>>(query: S) -> Self {
        TesseraError::Unparseable(query.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        TesseraError::Storage(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TesseraError::conflict("abc123");
        assert_eq!(error.to_string(), "Conflict: record abc123 already exists");

        let error = TesseraError::not_found("abc123");
        assert_eq!(error.to_string(), "Not found: abc123");

        let error = TesseraError::unparseable("banana bread");
        assert_eq!(error.to_string(), "Unparseable query: banana bread");

        let error = TesseraError::storage("disk on fire");
        assert_eq!(error.to_string(), "Storage error: disk on fire");
    }

    #[test]
    fn test_empty_value_display() {
        assert_eq!(
            TesseraError::EmptyValue.to_string(),
            "Value is empty after trimming"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = TesseraError::from(io_error);

        match error {
            TesseraError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = TesseraError::from(json_error);

        match error {
            TesseraError::Json(_) => {}
            _ => panic!("Expected JSON error variant"),
        }
    }
}
