// File: services/kamal_backend/src/lib.rs
use axum::Router;
use kamal_booking::BookingState;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod app_state;

/// The complete HTTP application: booking routes plus CORS and request tracing.
pub fn build_app(state: Arc<BookingState>) -> Router {
    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut app = kamal_booking::routes(state);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use kamal_booking::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(info(
            title = "Kamal AI Booking API",
            version = "0.1.0",
            description = "Appointment booking, admin listing and dashboard endpoints"
        ))]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        tracing::info!("Adding Swagger UI at /api/docs");

        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
