// --- File: crates/kamal_common/src/models.rs ---

// Data structures shared by the storage adapter, the notification client and the
// HTTP handlers.

use serde::{Deserialize, Serialize};

/// A stored appointment booking.
///
/// Every field apart from `id` is free-form text exactly as it was submitted; missing
/// values stay `None` all the way to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Booking {
    /// Identifier assigned by the storage backend at insertion time
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// The fields of a booking that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl NewBooking {
    /// Attach the identifier handed out by the backend.
    pub fn with_id(self, id: i64) -> Booking {
        Booking {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            date: self.date,
            time: self.time,
        }
    }
}

impl Booking {
    /// Customer name for display, empty when none was submitted.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn phone_or_empty(&self) -> &str {
        self.phone.as_deref().unwrap_or_default()
    }

    pub fn date_or_empty(&self) -> &str {
        self.date.as_deref().unwrap_or_default()
    }

    pub fn time_or_empty(&self) -> &str {
        self.time.as_deref().unwrap_or_default()
    }
}
