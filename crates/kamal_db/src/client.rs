//! Connection handling for the booking store
//!
//! This module decides which relational backend is active and opens connection pools
//! for it. Schema management lives with the repositories.

use crate::error::DbError;
use kamal_config::AppConfig;
use sqlx::pool::PoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error, info};

#[cfg(feature = "postgres")]
use sqlx::postgres::{PgConnectOptions, PgPool};

/// Local store path that keeps the SQLite database in process memory
pub const MEMORY_PATH: &str = ":memory:";

/// The relational backend holding the `bookings` table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbBackend {
    /// Local file-based store
    Sqlite,
    /// Server-based store reached through a connection string
    Postgres,
}

impl DbBackend {
    /// Pick the backend for a configuration.
    ///
    /// A configured server connection string always wins; otherwise the local file
    /// store is used.
    pub fn select(config: &AppConfig) -> Self {
        if config.database_url().is_some() {
            DbBackend::Postgres
        } else {
            DbBackend::Sqlite
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DbBackend::Sqlite => "sqlite",
            DbBackend::Postgres => "postgres",
        }
    }
}

impl fmt::Display for DbBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pool settings shared by both backends
fn pool_options<DB: sqlx::Database>() -> PoolOptions<DB> {
    PoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .idle_timeout(Duration::from_secs(600))
}

/// Open a pool on the SQLite store at `path`.
///
/// The file and its parent directory are created if they don't exist. The special
/// path `:memory:` yields a single long-lived connection so the data survives for the
/// lifetime of the pool.
///
/// # Errors
///
/// Returns an error if the path is empty, the directory cannot be created or the
/// database cannot be opened.
pub async fn create_sqlite_pool(path: &str) -> Result<SqlitePool, DbError> {
    if path.trim().is_empty() {
        return Err(DbError::ConfigError("Local store path is empty".to_string()));
    }

    if path == MEMORY_PATH {
        debug!("Opening in-memory SQLite store");
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = PoolOptions::<sqlx::Sqlite>::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;
        return Ok(pool);
    }

    if let Some(dir) = Path::new(path).parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            debug!("Creating directory for SQLite database: {:?}", dir);
            std::fs::create_dir_all(dir).map_err(|e| {
                error!("Failed to create directory for SQLite database: {}", e);
                DbError::ConnectionError(format!("Failed to create directory: {}", e))
            })?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = pool_options::<sqlx::Sqlite>()
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to open SQLite store at {}: {}", path, e);
            DbError::ConnectionError(e.to_string())
        })?;

    info!("SQLite store opened at {}", path);
    Ok(pool)
}

/// Open a pool on the PostgreSQL server named by `url`.
///
/// # Errors
///
/// Returns `DbError::UrlError` for a malformed connection string and
/// `DbError::ConnectionError` when the server cannot be reached.
#[cfg(feature = "postgres")]
pub async fn create_postgres_pool(url: &str) -> Result<PgPool, DbError> {
    let options =
        PgConnectOptions::from_str(url).map_err(|e| DbError::UrlError(e.to_string()))?;

    let pool = pool_options::<sqlx::Postgres>()
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to connect to {}: {}", redact_url(url), e);
            DbError::ConnectionError(e.to_string())
        })?;

    info!("PostgreSQL pool created for {}", redact_url(url));
    Ok(pool)
}

/// Hide the credentials of a connection string for logging.
pub fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://****{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}
