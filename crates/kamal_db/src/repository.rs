//! Repository trait for booking storage
//!
//! Handlers only ever see `dyn BookingRepository`; which backend sits behind it is
//! decided once at startup by [`crate::DbClientFactory`].

use crate::client::DbBackend;
use crate::error::DbError;
use kamal_common::{Booking, BoxFuture, NewBooking};

/// Storage operations on the `bookings` table
pub trait BookingRepository: Send + Sync {
    /// The backend this repository talks to
    fn backend(&self) -> DbBackend;

    /// Create the `bookings` table if it does not exist yet.
    ///
    /// Safe to call any number of times.
    fn init_schema(&self) -> BoxFuture<'_, (), DbError>;

    /// Store a new booking.
    ///
    /// # Returns
    ///
    /// The stored booking carrying the identifier assigned by the backend
    fn insert_booking(&self, booking: NewBooking) -> BoxFuture<'_, Booking, DbError>;

    /// All stored bookings, most recent (highest id) first
    fn list_bookings(&self) -> BoxFuture<'_, Vec<Booking>, DbError>;
}
