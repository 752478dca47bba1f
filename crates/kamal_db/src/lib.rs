//! Booking storage for the Kamal backend
//!
//! The store is a single `bookings` table kept either in a local SQLite file or on a
//! PostgreSQL server. Which one is used is decided at startup: a configured server
//! connection string selects PostgreSQL, otherwise the local file is used.
//!
//! # Example
//!
//! ```rust,no_run
//! use kamal_config::AppConfig;
//! use kamal_db::DbClientFactory;
//!
//! async fn setup_store() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::default();
//!     let bookings = DbClientFactory::new().connect(&config).await?;
//!     println!("{} bookings stored", bookings.list_bookings().await?.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use client::DbBackend;
pub use error::DbError;
pub use factory::DbClientFactory;
pub use repository::BookingRepository;

pub use repositories::SqliteBookingRepository;
#[cfg(feature = "postgres")]
pub use repositories::PostgresBookingRepository;
