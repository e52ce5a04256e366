//! Error types for the Wordbook library.
//!
//! Dictionary lookups, inserts and removals never fail: their outcomes are
//! plain `bool`/`Option` values. Errors are reserved for things that really
//! went wrong, such as a dictionary document that could not be written.
//! All of them are represented by the [`WordbookError`] enum.
//!
//! # Examples
//!
//! ```
//! use wordbook::error::{WordbookError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordbookError::invalid_argument("cutoff must be within [0, 1]"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Wordbook operations.
#[derive(Error, Debug)]
pub enum WordbookError {
    /// I/O errors (file operations, terminal input, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Persisting the dictionary document failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A caller supplied a value outside the accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with WordbookError.
pub type Result<T> = std::result::Result<T, WordbookError>;

impl WordbookError {
    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        WordbookError::Storage(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordbookError::InvalidArgument(msg.into())
    }
}
