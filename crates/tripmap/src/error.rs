//! Error types for tripmap.
//!
//! This module defines all error types used throughout the tripmap crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for tripmap operations.
#[derive(Error, Debug)]
pub enum Error {
    // === History Errors ===
    /// The location-history document could not be read.
    #[error("failed to read location history at {path}: {source}")]
    HistoryRead {
        /// Path to the history file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The location-history document could not be parsed.
    #[error("failed to parse location history: {0}")]
    HistoryParse(#[from] serde_json::Error),

    /// A sample's timestamp could not be parsed.
    #[error("unparseable timestamp '{value}': {source}")]
    Timestamp {
        /// The offending timestamp string.
        value: String,
        /// The underlying error.
        #[source]
        source: chrono::ParseError,
    },

    // === Filter Errors ===
    /// A date filter form field was not an integer.
    #[error("invalid value '{value}' for filter field '{field}'")]
    InvalidFilterField {
        /// Name of the form field.
        field: &'static str,
        /// The submitted value.
        value: String,
    },

    // === Artifact Errors ===
    /// The rendered map could not be written.
    #[error("failed to write map artifact at {path}: {source}")]
    ArtifactWrite {
        /// Path to the artifact file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The rendered map could not be read back.
    #[error("failed to read map artifact at {path}: {source}")]
    ArtifactRead {
        /// Path to the artifact file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The marker payload could not be encoded for the map document.
    #[error("failed to encode markers: {0}")]
    MarkerEncode(#[source] serde_json::Error),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for tripmap operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a timestamp parse error.
    #[must_use]
    pub fn timestamp(value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::Timestamp {
            value: value.into(),
            source,
        }
    }

    /// Create an invalid filter field error.
    #[must_use]
    pub fn invalid_filter_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFilterField {
            field,
            value: value.into(),
        }
    }

    /// Check if this error means the map artifact doesn't exist yet.
    #[must_use]
    pub fn is_artifact_missing(&self) -> bool {
        matches!(
            self,
            Self::ArtifactRead { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Check if this error is a client-side filter input error.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidFilterField { .. })
    }
}
