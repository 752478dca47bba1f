// --- File: crates/kamal_booking/src/routes.rs ---

use crate::auth::{admin_auth_middleware, AdminAuthState};
use crate::handlers::{
    admin_bookings_handler, book_handler, home_handler, user_dashboard_handler, BookingState,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing every booking route.
///
/// `/admin/*` sits behind HTTP Basic auth checked against `state.config.admin`.
pub fn routes(state: Arc<BookingState>) -> Router {
    let auth_state = Arc::new(AdminAuthState {
        config: state.config.clone(),
    });

    let admin = Router::new()
        .route("/admin/bookings", get(admin_bookings_handler))
        .route_layer(middleware::from_fn_with_state(
            auth_state,
            admin_auth_middleware,
        ));

    Router::new()
        .route("/", get(home_handler))
        .route("/book", post(book_handler))
        .route("/api/user-dashboard", get(user_dashboard_handler))
        .merge(admin)
        .with_state(state)
}
