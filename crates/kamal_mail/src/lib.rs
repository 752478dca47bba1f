//! Booking notifications for the Kamal backend
//!
//! [`BookingNotifier`] turns a stored booking into a customer confirmation and an
//! internal alert and sends both through SendGrid. Delivery is best effort: the outcome
//! of each email is reported, never raised.

pub mod client;
pub mod notifier;
pub mod service;
pub mod templates;

pub use client::{MailError, SendGridClient};
pub use notifier::{BookingNotifier, NotificationReport};
pub use service::SendGridNotificationService;
