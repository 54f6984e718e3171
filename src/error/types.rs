//! Error type definitions
//!
//! Defines the main error types used throughout the RapiDoc UI library.

use thiserror::Error;

/// Main error type for the RapiDoc UI library
#[derive(Error, Debug)]
pub enum Error {
    /// A stored attribute value does not match any member of its enumeration
    #[error("Attribute '{attribute}' holds '{value}', which is not a valid member of {expected}")]
    EnumParse {
        /// Attribute key whose value failed to parse
        attribute: String,
        /// The raw stored value
        value: String,
        /// Name of the expected enumeration
        expected: &'static str,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an enum parse error for a stored attribute value
    pub fn enum_parse(
        attribute: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::EnumParse {
            attribute: attribute.into(),
            value: value.into(),
            expected,
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new server error
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
