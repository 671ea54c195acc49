//! Storage error handling
//!
//! Typed failures for the storage handle, the schema manager and the data
//! access layer. Not-found is never an error here: lookups return `Option`.

use rusqlite::ErrorCode;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening, migrating or querying the database
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database file could not be opened or configured
    #[error("Database at '{path}' is unavailable: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The stored schema version is not a non-negative integer
    #[error("Schema metadata is corrupt: version value '{0}' is not a valid integer")]
    CorruptMetadata(String),

    /// The caller asked for a schema version no registered migration produces
    #[error("Schema version {expected} is unknown; the latest known version is {latest}")]
    UnknownSchemaVersion { expected: u32, latest: u32 },

    /// SQLite rejected a write because of a constraint (foreign key, not null, ...)
    #[error("Constraint violation: {source}")]
    ConstraintViolation {
        #[source]
        source: rusqlite::Error,
    },

    /// Input rejected before reaching the database
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Any other SQLite failure
    #[error("Database error: {0}")]
    Database(#[source] rusqlite::Error),
}

impl StoreError {
    /// Classify a raw SQLite error.
    ///
    /// Constraint failures get their own variant so callers can tell a bad
    /// reference apart from a broken database.
    pub fn from_sqlite(error: rusqlite::Error) -> Self {
        match error.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => StoreError::ConstraintViolation { source: error },
            _ => StoreError::Database(error),
        }
    }

    /// Whether the failure was caused by the caller's input rather than the storage engine
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::ConstraintViolation { .. } | StoreError::Validation(_))
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        StoreError::from_sqlite(error)
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
