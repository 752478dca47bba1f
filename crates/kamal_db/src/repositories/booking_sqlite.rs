//! SQLite implementation of the booking repository

use crate::client::{create_sqlite_pool, DbBackend};
use crate::error::DbError;
use crate::repositories::booking::{DbBooking, SELECT_BOOKINGS};
use crate::repository::BookingRepository;
use kamal_common::{Booking, BoxFuture, NewBooking};
use sqlx::sqlite::SqlitePool;
use tracing::{debug, error, info};

const CREATE_BOOKINGS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS bookings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT,
        phone TEXT,
        date TEXT,
        time TEXT
    )
"#;

/// Booking repository backed by a local SQLite file
#[derive(Debug, Clone)]
pub struct SqliteBookingRepository {
    pool: SqlitePool,
}

impl SqliteBookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the store at `path` (`:memory:` for a throwaway store).
    pub async fn connect(path: &str) -> Result<Self, DbError> {
        Ok(Self::new(create_sqlite_pool(path).await?))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl BookingRepository for SqliteBookingRepository {
    fn backend(&self) -> DbBackend {
        DbBackend::Sqlite
    }

    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move {
            debug!("Initializing bookings schema (sqlite)");
            sqlx::query(CREATE_BOOKINGS_TABLE)
                .execute(&self.pool)
                .await
                .map_err(|e| DbError::QueryError(e.to_string()))?;
            info!("Bookings schema ready (sqlite)");
            Ok(())
        })
    }

    fn insert_booking(&self, booking: NewBooking) -> BoxFuture<'_, Booking, DbError> {
        Box::pin(async move {
            let result = sqlx::query(
                "INSERT INTO bookings (name, email, phone, date, time) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(booking.name.as_deref())
            .bind(booking.email.as_deref())
            .bind(booking.phone.as_deref())
            .bind(booking.date.as_deref())
            .bind(booking.time.as_deref())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to insert booking: {}", e);
                DbError::QueryError(e.to_string())
            })?;

            let id = result.last_insert_rowid();
            debug!("Stored booking {}", id);
            Ok(booking.with_id(id))
        })
    }

    fn list_bookings(&self) -> BoxFuture<'_, Vec<Booking>, DbError> {
        Box::pin(async move {
            let rows = sqlx::query_as::<_, DbBooking>(SELECT_BOOKINGS)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    error!("Failed to list bookings: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            Ok(rows.into_iter().map(Booking::from).collect())
        })
    }
}
