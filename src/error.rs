//! Error types for the levtrie library.
//!
//! Every fallible operation returns [`Result`], whose error side is
//! [`LevTrieError`].
//!
//! # Examples
//!
//! ```
//! use levtrie::error::{LevTrieError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LevTrieError::invalid_argument("max distance must be non-negative"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for levtrie operations.
#[derive(Error, Debug)]
pub enum LevTrieError {
    /// I/O errors while reading a dictionary, including invalid UTF-8 input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An argument outside its accepted domain, such as a negative distance bound.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LevTrieError.
pub type Result<T> = std::result::Result<T, LevTrieError>;

impl LevTrieError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LevTrieError::InvalidArgument(msg.into())
    }

    /// Returns true if this is an [`LevTrieError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LevTrieError::InvalidArgument(_))
    }
}
