//! Error types for convgen.
//!
//! This module provides a small error hierarchy with contextual information
//! shared by every crate in the workspace.
//!
//! # Examples
//!
//! ```
//! use convgen_core::{Error, Result};
//!
//! fn check_prefix(prefix: &str) -> Result<()> {
//!     if prefix.is_empty() {
//!         return Err(Error::Validation {
//!             field: "prefix".to_string(),
//!             reason: "prefix cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_prefix("").unwrap_err();
//! assert!(err.is_validation());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for convgen.
///
/// All errors in the system use this type, providing consistent error
/// handling across all crates in the workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// Output sink could not be created or written.
    ///
    /// Raised when an output file cannot be created (missing directory,
    /// permission denial) or a write to it fails. Generation aborts with
    /// this error rather than continuing against an invalid sink.
    #[error("failed to create or write output sink: {path}")]
    SinkCreation {
        /// Path of the sink that could not be created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Template registration or rendering failed.
    ///
    /// Unreachable with the built-in template set; custom template sets
    /// with invalid syntax or missing variables surface here.
    #[error("template error: {message}")]
    Template {
        /// Description of the template failure
        message: String,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation error for domain types.
    ///
    /// Raised when creating domain types such as `TypeName` that have
    /// specific format requirements.
    #[error("validation error in {field}: {reason}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },
}

impl Error {
    /// Returns `true` if this is a sink creation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use convgen_core::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::SinkCreation {
    ///     path: PathBuf::from("cpp/structs.h"),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
    /// };
    /// assert!(err.is_sink_creation());
    /// ```
    #[must_use]
    pub const fn is_sink_creation(&self) -> bool {
        matches!(self, Self::SinkCreation { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template(&self) -> bool {
        matches!(self, Self::Template { .. })
    }

    /// Returns `true` if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_creation_display_includes_path() {
        let err = Error::SinkCreation {
            path: PathBuf::from("cpp/simple.cpp"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("cpp/simple.cpp"));
        assert!(err.is_sink_creation());
    }

    #[test]
    fn test_sink_creation_preserves_source() {
        use std::error::Error as _;

        let err = Error::SinkCreation {
            path: PathBuf::from("cpp/structs.h"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_template_error_display() {
        let err = Error::Template {
            message: "unclosed tag".to_string(),
        };
        assert_eq!(err.to_string(), "template error: unclosed tag");
        assert!(err.is_template());
        assert!(!err.is_sink_creation());
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::InvalidArgument("bad format".to_string());
        assert_eq!(err.to_string(), "invalid argument: bad format");
    }

    #[test]
    fn test_validation_display() {
        let err = Error::Validation {
            field: "prefix".to_string(),
            reason: "must start with a letter".to_string(),
        };
        assert!(err.to_string().contains("prefix"));
        assert!(err.is_validation());
    }
}
