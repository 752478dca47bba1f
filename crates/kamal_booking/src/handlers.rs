// File: crates/kamal_booking/src/handlers.rs
use crate::logic::{
    render_bookings_table, summarize_dashboard, BookingConfirmation, BookingRequest,
    DashboardQuery, ErrorMessage, EMAIL_REQUIRED,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use kamal_common::KamalError;
use kamal_config::AppConfig;
use kamal_db::BookingRepository;
use kamal_mail::BookingNotifier;
use std::sync::Arc;
use tracing::{error, info};

pub const LIVENESS_MESSAGE: &str = "KAMAL AI Backend Running 🚀";

// Shared state needed by the booking handlers
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub repository: Arc<dyn BookingRepository>,
    pub notifier: Arc<BookingNotifier>,
}

/// Liveness check.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = String)),
    tag = "Health"
))]
pub async fn home_handler() -> &'static str {
    LIVENESS_MESSAGE
}

/// Store a booking, then send the confirmation and internal alert emails.
///
/// The booking is confirmed once it is stored; email outcomes are only logged.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/book",
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Booking stored", body = BookingConfirmation),
        (status = 500, description = "Booking could not be stored")
    ),
    tag = "Booking"
))]
pub async fn book_handler(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<BookingConfirmation>, KamalError> {
    let booking = state.repository.insert_booking(request.into()).await?;
    info!("Stored booking {} on {}", booking.id, state.repository.backend());

    let report = state.notifier.notify_booking(&booking).await;
    info!(
        "Booking {} notifications: customer {}, internal {}",
        booking.id, report.customer, report.internal
    );

    Ok(Json(BookingConfirmation::confirmed()))
}

/// All bookings as an HTML table, most recent first. Guarded by HTTP Basic auth.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/admin/bookings",
    responses(
        (status = 200, description = "HTML table of bookings, or a plain-text storage error", content_type = "text/html", body = String),
        (status = 401, description = "Missing or invalid credentials")
    ),
    security(("basic_auth" = [])),
    tag = "Admin"
))]
pub async fn admin_bookings_handler(State(state): State<Arc<BookingState>>) -> Response {
    match state.repository.list_bookings().await {
        Ok(bookings) => {
            info!("Admin listing of {} bookings", bookings.len());
            Html(render_bookings_table(&bookings)).into_response()
        }
        Err(e) => {
            error!("Failed to list bookings for admin: {}", e);
            (StatusCode::OK, format!("Error: {}", e)).into_response()
        }
    }
}

/// Usage statistics and demo data for the dashboard of `email`.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/user-dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Dashboard summary", body = crate::logic::DashboardSummary),
        (status = 400, description = "Email is missing", body = ErrorMessage),
        (status = 500, description = "Storage error")
    ),
    tag = "Dashboard"
))]
pub async fn user_dashboard_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, KamalError> {
    let Some(email) = query.email() else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorMessage {
                error: EMAIL_REQUIRED.to_string(),
            }),
        )
            .into_response());
    };

    let bookings = state.repository.list_bookings().await?;
    Ok(Json(summarize_dashboard(email, &bookings)).into_response())
}
