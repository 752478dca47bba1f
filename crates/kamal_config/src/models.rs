// --- File: crates/kamal_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16, // PORT or KAMAL__SERVER__PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

// --- Database Config ---
// Present only when a server database is configured; selects the Postgres backend.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>, // DATABASE_URL or KAMAL__DATABASE__URL
}

// --- Local Store Config ---
// The SQLite file used when no server database is configured.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LocalStoreConfig {
    pub path: String, // ":memory:" keeps the store in process memory
}

impl Default for LocalStoreConfig {
    fn default() -> Self {
        Self {
            path: "appointments.db".to_string(),
        }
    }
}

// --- Mail Config ---
// The API key is a secret: SENDGRID_API_KEY or KAMAL__MAIL__API_KEY.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct MailConfig {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub from_email: String,
    /// Receives the internal new-booking alert. Falls back to `from_email`.
    pub internal_recipient: Option<String>,
    pub brand_name: String,
    pub timeout_secs: u64,
}

impl MailConfig {
    pub fn internal_recipient(&self) -> &str {
        self.internal_recipient
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(&self.from_email)
    }
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "****"))
            .field("api_base_url", &self.api_base_url)
            .field("from_email", &self.from_email)
            .field("internal_recipient", &self.internal_recipient)
            .field("brand_name", &self.brand_name)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: "https://api.sendgrid.com".to_string(),
            from_email: "bookings@kamal.ai".to_string(),
            internal_recipient: None,
            brand_name: "Kamal AI".to_string(),
            timeout_secs: 30,
        }
    }
}

// --- Admin Config ---
// No built-in defaults: without both values the admin listing rejects every request.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Deserialize, Serialize, Clone, Default)]
pub struct AdminConfig {
    pub username: Option<String>, // ADMIN_USERNAME or KAMAL__ADMIN__USERNAME
    pub password: Option<String>, // ADMIN_PASSWORD or KAMAL__ADMIN__PASSWORD
}

impl AdminConfig {
    /// Returns the configured credential pair, if both halves are set and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => Some((user, pass)),
            _ => None,
        }
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "****"))
            .finish()
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Storage ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub local_store: LocalStoreConfig,

    // --- Outbound mail and admin access ---
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

impl AppConfig {
    /// The server database connection string, when one is configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database
            .as_ref()
            .and_then(|db| db.url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }
}
