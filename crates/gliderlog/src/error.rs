//! Error types for gliderlog.
//!
//! This module defines the error types used throughout the gliderlog crate.
//! Validation failures carry their own [`ValidationError`] so the presentation
//! layer can show the exact reason a draft was rejected.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::validation::ValidationError;

/// The main error type for gliderlog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Validation Errors ===
    /// A flight draft failed validation; nothing was written.
    #[error("invalid flight: {0}")]
    Validation(#[from] ValidationError),

    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to bring the database schema up to date.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    // === Logbook Errors ===
    /// No flight exists with the given id.
    #[error("flight {id} not found")]
    FlightNotFound {
        /// The id that was looked up.
        id: i64,
    },

    /// An operation needed a selected flight but none is selected.
    #[error("no flight selected")]
    NoSelection,

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
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for gliderlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a migration error from anything displayable.
    #[must_use]
    pub fn migration(message: impl Into<String>) -> Self {
        Self::DatabaseMigration {
            message: message.into(),
        }
    }

    /// Check if this error is a rejected draft.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error reports a missing flight.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FlightNotFound { .. })
    }
}
