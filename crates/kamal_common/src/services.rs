// --- File: crates/kamal_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! Handlers and the storage adapter depend on these traits rather than on concrete
//! clients, so tests can swap in fakes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A single outbound email with both a plain-text and an HTML body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Provider acknowledgement for an accepted email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResult {
    /// Provider-side message identifier, when the provider returns one.
    pub id: Option<String>,
    /// HTTP status returned by the provider.
    pub status_code: u16,
}

/// A trait for notification service operations.
pub trait NotificationService: Send + Sync {
    /// Error type returned by notification service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send an email notification.
    fn send_email(&self, message: EmailMessage) -> BoxFuture<'_, NotificationResult, Self::Error>;
}

/// Outcome of one best-effort email.
///
/// Delivery problems are reported through this value and never as an error: a booking
/// is confirmed to the caller whatever happens to its emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// The provider accepted the message.
    Delivered(NotificationResult),
    /// The provider rejected the message or could not be reached.
    Failed { reason: String },
    /// Nothing was sent, e.g. because the booking carried no recipient address.
    Skipped { reason: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered(_))
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryOutcome::Delivered(result) => {
                write!(f, "delivered (status {})", result.status_code)
            }
            DeliveryOutcome::Failed { reason } => write!(f, "failed: {}", reason),
            DeliveryOutcome::Skipped { reason } => write!(f, "skipped: {}", reason),
        }
    }
}
