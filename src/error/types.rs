//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for csv-explorer operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExplorerError {
    /// Configuration Error - missing or invalid configuration file
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data Error - the CSV content could not be parsed
    #[error("Data error: {message}")]
    Data { message: String },

    /// Filesystem Error - reading the input or writing the output failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl ExplorerError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Data { .. } => 3,
            Self::Filesystem { .. } => 5,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data error
    #[inline]
    pub fn data<S: Into<String>>(message: S) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}
