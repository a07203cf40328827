//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the listing search engine. The search path
//! itself is total over its documented inputs (bad facet values mean "no
//! constraint", unknown bucket labels match nothing), so errors here surface
//! only at the configuration and liked-storage boundaries.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from configuration, storage, serialization
//! - **Output**: Structured error types with context
//! - **Error Categories**: Configuration, Storage, Search, Generic
//!
//! ## Usage
//! ```rust,ignore
//! use crate::errors::{Result, SearchError};
//!
//! fn load_operation() -> Result<Vec<String>> {
//!     Err(SearchError::Config {
//!         message: "missing search section".to_string(),
//!     })
//! }
//! ```

use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error types for the listing search engine
#[derive(Debug, Error)]
pub enum SearchError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation failed for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// Invalid search query rejected at the boundary
    #[error("Invalid search query: {query} - {reason}")]
    InvalidSearchQuery { query: String, reason: String },

    /// Liked-listing storage errors
    #[error("Liked storage error at {location}: {details}")]
    LikedStorage { location: String, details: String },

    /// Serialization/deserialization errors
    #[error("Serialization failed: {message}")]
    SerializationFailed { message: String },

    /// Internal system errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SearchError {
    /// Get error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            SearchError::Config { .. } => "configuration",
            SearchError::ValidationFailed { .. } => "validation",
            SearchError::InvalidSearchQuery { .. } => "search",
            SearchError::LikedStorage { .. } => "storage",
            SearchError::SerializationFailed { .. } => "serialization",
            SearchError::Internal { .. } => "generic",
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        SearchError::Internal {
            message: format!("IO error: {}", err),
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::SerializationFailed {
            message: format!("JSON serialization error: {}", err),
        }
    }
}

impl From<toml::de::Error> for SearchError {
    fn from(err: toml::de::Error) -> Self {
        SearchError::Config {
            message: format!("TOML parse error: {}", err),
        }
    }
}

/// Macro for internal errors with formatted messages
#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::errors::SearchError::Internal {
            message: $msg.to_string(),
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::errors::SearchError::Internal {
            message: format!($fmt, $($arg)*),
        }
    };
}
