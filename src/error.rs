//! Error types for the Weaver library.
//!
//! The generation core is total over its inputs and never returns an error.
//! Everything that touches the outside world (list files, JSON configuration,
//! command line values) reports failures through [`WeaverError`].
//!
//! # Examples
//!
//! ```
//! use weaver::error::{Result, WeaverError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WeaverError::invalid_argument("min length exceeds max length"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Weaver operations.
#[derive(Error, Debug)]
pub enum WeaverError {
    /// I/O errors (list files, output files, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors (missing patterns, wrong value shapes)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pattern errors raised by the boundary layer
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with WeaverError.
pub type Result<T> = std::result::Result<T, WeaverError>;

impl WeaverError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WeaverError::Config(msg.into())
    }

    /// Create a new pattern error.
    pub fn pattern<S: Into<String>>(msg: S) -> Self {
        WeaverError::Pattern(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WeaverError::InvalidArgument(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        WeaverError::Io(io::Error::new(io::ErrorKind::NotFound, msg.into()))
    }
}
