// --- File: crates/kamal_booking/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_test;
pub mod routes;

pub use handlers::BookingState;
pub use routes::routes;
