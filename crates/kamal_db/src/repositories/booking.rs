//! Row type shared by the booking repositories

use sqlx::FromRow;

pub use kamal_common::Booking;

/// Columns selected by every booking query, in table order
pub(crate) const SELECT_BOOKINGS: &str =
    "SELECT id, name, email, phone, date, time FROM bookings ORDER BY id DESC";

/// DB-side view of a booking row
#[derive(Debug, Clone, FromRow)]
pub struct DbBooking {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl From<DbBooking> for Booking {
    fn from(db: DbBooking) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            phone: db.phone,
            date: db.date,
            time: db.time,
        }
    }
}
