//! Runtime configuration for the Kamal booking backend.
//!
//! The configuration is assembled once at startup from, in increasing priority:
//! `config/default.toml`, `config/{RUN_ENV}.toml`, `KAMAL__*` environment variables and
//! the legacy flat variables listed in [`env_vars::LEGACY_ENV_VARS`]. The result is an
//! [`AppConfig`] that is shared read-only with every component.

use config::{Config, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub mod env_vars;
pub mod models;

pub use config::ConfigError;
pub use models::*;

use env_vars::{is_secret_path, CONFIG_DIR_VAR, CONFIG_SEPARATOR, DEFAULT_PREFIX};

/// Loads the application configuration from files and the environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = PathBuf::from(env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "config".to_string()));

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);
    debug!("Loading config from {} and {}", default_path.display(), env_path.display());

    let mut builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(DEFAULT_PREFIX)
                .prefix_separator(CONFIG_SEPARATOR)
                .separator(CONFIG_SEPARATOR)
                .try_parsing(true),
        );

    for (path, value) in env_vars::legacy_overrides() {
        if is_secret_path(path) {
            debug!("Applying environment override for {}", path);
        } else {
            debug!("Applying environment override {} = {}", path, value);
        }
        builder = builder.set_override(path, value)?;
    }

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file defaults to `.env`; `DOTENV_OVERRIDE` names a different one. Loading happens
/// at most once per process and a missing file is not an error.
///
/// Returns the path that was (or would have been) loaded.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
