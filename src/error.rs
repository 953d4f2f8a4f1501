//! Error types for the edgegram library.
//!
//! All errors are represented by the [`EdgegramError`] enum. Configuration
//! problems (an unknown edge side, a bad gram range, an unresolved filter
//! reference) surface as [`EdgegramError::Config`] at construction time;
//! nothing in the token path raises one later.
//!
//! # Examples
//!
//! ```
//! use edgegram::error::{EdgegramError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(EdgegramError::config("min_gram must be greater than zero"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for edgegram operations.
#[derive(Error, Debug)]
pub enum EdgegramError {
    /// I/O errors (settings files, upstream readers)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration, raised when a stage is constructed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with EdgegramError.
pub type Result<T> = std::result::Result<T, EdgegramError>;

impl EdgegramError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        EdgegramError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        EdgegramError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        EdgegramError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        EdgegramError::Other(msg.into())
    }

    /// Whether this error was raised by configuration validation.
    pub fn is_config(&self) -> bool {
        matches!(self, EdgegramError::Config(_))
    }
}
