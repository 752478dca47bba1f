//! PostgreSQL implementation of the booking repository

use crate::client::{create_postgres_pool, DbBackend};
use crate::error::DbError;
use crate::repositories::booking::{DbBooking, SELECT_BOOKINGS};
use crate::repository::BookingRepository;
use kamal_common::{Booking, BoxFuture, NewBooking};
use sqlx::postgres::PgPool;
use tracing::{debug, error, info};

const CREATE_BOOKINGS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS bookings (
        id BIGSERIAL PRIMARY KEY,
        name TEXT,
        email TEXT,
        phone TEXT,
        date TEXT,
        time TEXT
    )
"#;

/// Booking repository backed by a PostgreSQL server
#[derive(Debug, Clone)]
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the server named by `url`.
    pub async fn connect(url: &str) -> Result<Self, DbError> {
        Ok(Self::new(create_postgres_pool(url).await?))
    }
}

impl BookingRepository for PostgresBookingRepository {
    fn backend(&self) -> DbBackend {
        DbBackend::Postgres
    }

    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move {
            debug!("Initializing bookings schema (postgres)");
            sqlx::query(CREATE_BOOKINGS_TABLE)
                .execute(&self.pool)
                .await
                .map_err(|e| DbError::QueryError(e.to_string()))?;
            info!("Bookings schema ready (postgres)");
            Ok(())
        })
    }

    fn insert_booking(&self, booking: NewBooking) -> BoxFuture<'_, Booking, DbError> {
        Box::pin(async move {
            let id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO bookings (name, email, phone, date, time)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id
                "#,
            )
            .bind(booking.name.as_deref())
            .bind(booking.email.as_deref())
            .bind(booking.phone.as_deref())
            .bind(booking.date.as_deref())
            .bind(booking.time.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to insert booking: {}", e);
                DbError::QueryError(e.to_string())
            })?;

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
