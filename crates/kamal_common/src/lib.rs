// --- File: crates/kamal_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;    // Error handling
pub mod http;     // HTTP utilities
pub mod logging;  // Logging utilities
pub mod models;   // Shared data structures
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{external_service_error, HttpStatusCode, KamalError};

// Re-export HTTP utilities for easier access
pub use http::{client::create_client, IntoHttpResponse};

// Re-export the shared models and service seams
pub use models::{Booking, NewBooking};
pub use services::{
    BoxFuture, DeliveryOutcome, EmailMessage, NotificationResult, NotificationService,
};
