// --- File: crates/kamal_booking/src/auth.rs ---
//! HTTP Basic authentication for the admin routes.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use constant_time_eq::constant_time_eq;
use kamal_config::AppConfig;
use std::sync::Arc;
use tracing::{debug, warn};

pub const BASIC_REALM_CHALLENGE: &str = "Basic realm=\"Login Required\"";

const CHALLENGE_BODY: &str =
    "Could not verify your access level for that URL.\nYou have to login with proper credentials";

/// State for the admin auth middleware: the configured credentials live in `config.admin`.
#[derive(Clone)]
pub struct AdminAuthState {
    pub config: Arc<AppConfig>,
}

/// Decode the `user:password` pair of a `Basic` authorization header value.
pub fn parse_basic_credentials(header_value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header_value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Compare both halves in constant time; neither comparison short-circuits the other.
pub fn credentials_match(expected: (&str, &str), username: &str, password: &str) -> bool {
    let user_ok = constant_time_eq(expected.0.as_bytes(), username.as_bytes());
    let pass_ok = constant_time_eq(expected.1.as_bytes(), password.as_bytes());
    user_ok & pass_ok
}

/// The 401 answer that asks the browser for credentials
pub fn challenge() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, BASIC_REALM_CHALLENGE)],
        CHALLENGE_BODY,
    )
        .into_response()
}

/// Axum middleware guarding the admin routes with HTTP Basic auth.
///
/// Unconfigured admin credentials reject every request.
pub async fn admin_auth_middleware(
    State(auth_state): State<Arc<AdminAuthState>>,
    req: Request,
    next: Next,
) -> Response {
    let Some(expected) = auth_state.config.admin.credentials() else {
        warn!("Admin request rejected: admin credentials are not configured");
        return challenge();
    };

    let provided = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_basic_credentials);

    match provided {
        Some((username, password)) if credentials_match(expected, &username, &password) => {
            debug!("Admin request authenticated");
            next.run(req).await
        }
        Some(_) => {
            warn!("Admin request rejected: invalid credentials");
            challenge()
        }
        None => {
            debug!("Admin request without usable Basic credentials");
            challenge()
        }
    }
}
