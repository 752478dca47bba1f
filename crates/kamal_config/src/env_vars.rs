//! Environment variable handling for the Kamal backend.
//!
//! Structured overrides use the `KAMAL__SECTION__KEY` pattern. A handful of flat,
//! unprefixed variables are also honoured so existing deployments keep working
//! (`DATABASE_URL`, `SENDGRID_API_KEY`, `ADMIN_USERNAME`, `ADMIN_PASSWORD`, `PORT`).

use std::env;

/// The prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "KAMAL";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Selects the directory holding `default.toml` and `{RUN_ENV}.toml`
pub const CONFIG_DIR_VAR: &str = "KAMAL_CONFIG_DIR";

/// Flat environment variables and the configuration path each one overrides.
pub const LEGACY_ENV_VARS: &[(&str, &str)] = &[
    ("DATABASE_URL", "database.url"),
    ("SENDGRID_API_KEY", "mail.api_key"),
    ("ADMIN_USERNAME", "admin.username"),
    ("ADMIN_PASSWORD", "admin.password"),
    ("PORT", "server.port"),
];

/// Check if a path is a secret path
///
/// Paths containing "secret", "key", "password" or "token" are considered secret
/// and are never logged with their value.
pub fn is_secret_path(path: &str) -> bool {
    let path_lower = path.to_lowercase();
    path_lower.contains("secret")
        || path_lower.contains("key")
        || path_lower.contains("password")
        || path_lower.contains("token")
}

/// Collect the legacy flat variables that are set, as `(config path, value)` pairs.
///
/// Empty values are ignored so that `DATABASE_URL=` does not select the server backend.
pub fn legacy_overrides() -> Vec<(&'static str, String)> {
    legacy_overrides_from(|name| env::var(name).ok())
}

/// Same as [`legacy_overrides`], reading variables through `lookup`.
pub fn legacy_overrides_from<F>(lookup: F) -> Vec<(&'static str, String)>
where
    F: Fn(&str) -> Option<String>,
{
    LEGACY_ENV_VARS
        .iter()
        .filter_map(|(name, path)| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .map(|value| (*path, value))
        })
        .collect()
}
