// --- File: crates/kamal_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// Error returned by the Kamal HTTP handlers and startup code.
///
/// Storage and mail errors convert into this type; its status code decides the HTTP
/// answer.
#[derive(Error, Debug)]
pub enum KamalError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The booking store failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// An outbound provider call failed
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Anything else, e.g. the listener could not bind
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for KamalError {
    fn status_code(&self) -> u16 {
        match self {
            KamalError::ExternalServiceError { .. } => 502,
            KamalError::ConfigError(_)
            | KamalError::DatabaseError(_)
            | KamalError::InternalError(_) => 500,
        }
    }
}

impl From<std::io::Error> for KamalError {
    fn from(err: std::io::Error) -> Self {
        KamalError::InternalError(err.to_string())
    }
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> KamalError {
    KamalError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
