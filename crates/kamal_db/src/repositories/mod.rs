//! Booking repository implementations, one per backend.

pub mod booking;
#[cfg(feature = "postgres")]
pub mod booking_postgres;
#[cfg(all(test, feature = "postgres"))]
mod booking_postgres_test;
pub mod booking_sqlite;

pub use booking::DbBooking;
#[cfg(feature = "postgres")]
pub use booking_postgres::PostgresBookingRepository;
pub use booking_sqlite::SqliteBookingRepository;
