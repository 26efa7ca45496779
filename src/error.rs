//! Error types for the Atlas search library.
//!
//! The search core itself never fails: no-op queries and empty corpora are
//! ordinary outcomes. Errors come from loading and validating a corpus,
//! reading configuration, navigating to sections that do not exist, and
//! clipboard writes the host refuses.
//!
//! # Examples
//!
//! ```
//! use atlas_search::error::{AtlasError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(AtlasError::corpus("duplicate section id 'git'"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Atlas operations.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// I/O errors (reading corpus or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Corpus construction or validation errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// Navigation errors (unknown sections, empty history)
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Clipboard writes rejected by the host
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with AtlasError.
pub type Result<T> = std::result::Result<T, AtlasError>;

impl AtlasError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        AtlasError::Corpus(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        AtlasError::Query(msg.into())
    }

    /// Create a new navigation error.
    pub fn navigation<S: Into<String>>(msg: S) -> Self {
        AtlasError::Navigation(msg.into())
    }

    /// Create a new clipboard error.
    pub fn clipboard<S: Into<String>>(msg: S) -> Self {
        AtlasError::Clipboard(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        AtlasError::InvalidConfig(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        AtlasError::Other(format!("Not found: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        AtlasError::Other(msg.into())
    }
}
