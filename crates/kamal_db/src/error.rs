//! Error types for the storage adapter

use kamal_common::KamalError;
use thiserror::Error;

/// Errors that can occur when working with the booking store
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database connection
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),
}

impl From<DbError> for KamalError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConfigError(msg) => KamalError::ConfigError(msg),
            other => KamalError::DatabaseError(other.to_string()),
        }
    }
}
