//! Factory for the booking repository
//!
//! This is the single place that turns configuration into a ready-to-use store.

use crate::client::DbBackend;
use crate::error::DbError;
use crate::repositories::SqliteBookingRepository;
use crate::repository::BookingRepository;
use kamal_config::AppConfig;
use std::sync::Arc;
use tracing::{debug, info};

#[cfg(feature = "postgres")]
use crate::repositories::PostgresBookingRepository;

/// Factory for creating booking repositories
#[derive(Debug, Clone, Default)]
pub struct DbClientFactory;

impl DbClientFactory {
    pub fn new() -> Self {
        Self
    }

    /// Open the store selected by `config` and make sure the schema exists.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    ///
    /// * The connection string is malformed
    /// * The database cannot be reached or opened
    /// * The `bookings` table cannot be created
    pub async fn connect(&self, config: &AppConfig) -> Result<Arc<dyn BookingRepository>, DbError> {
        let backend = DbBackend::select(config);
        debug!("Creating booking repository for backend: {}", backend);

        let repository: Arc<dyn BookingRepository> = match backend {
            DbBackend::Postgres => self.postgres(config).await?,
            DbBackend::Sqlite => {
                Arc::new(SqliteBookingRepository::connect(&config.local_store.path).await?)
            }
        };

        repository.init_schema().await?;
        info!("Booking store ready ({})", repository.backend());
        Ok(repository)
    }

    #[cfg(feature = "postgres")]
    async fn postgres(&self, config: &AppConfig) -> Result<Arc<dyn BookingRepository>, DbError> {
        let url = config
            .database_url()
            .ok_or_else(|| DbError::ConfigError("Database URL is missing".to_string()))?;
        Ok(Arc::new(PostgresBookingRepository::connect(url).await?))
    }

    #[cfg(not(feature = "postgres"))]
    async fn postgres(&self, _config: &AppConfig) -> Result<Arc<dyn BookingRepository>, DbError> {
        Err(DbError::ConfigError(
            "A server database is configured but PostgreSQL support is not compiled in".to_string(),
        ))
    }
}
