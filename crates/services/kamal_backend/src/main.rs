// File: services/kamal_backend/src/main.rs
use kamal_backend::{app_state::build_booking_state, build_app};
use kamal_common::{logging, KamalError};
use kamal_config::{ensure_dotenv_loaded, load_config};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // RUST_LOG and LOG_DIR may come from the dotenv file.
    ensure_dotenv_loaded();
    // Keep the guard alive so buffered file logs are flushed on exit.
    let _log_guard = logging::init();

    if let Err(e) = run().await {
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), KamalError> {
    let config = Arc::new(
        load_config().map_err(|e| KamalError::ConfigError(format!("Failed to load config: {}", e)))?,
    );

    let state = build_booking_state(config.clone()).await?;
    let app = build_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
