// File: crates/kamal_booking/src/doc.rs

#![cfg(feature = "openapi")]
use crate::logic::{
    ActiveAgent, BookingConfirmation, BookingRequest, DashboardStats, DashboardSummary,
    ErrorMessage, RecentActivity,
};
use kamal_common::Booking;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

struct BasicAuthAddon;

impl Modify for BasicAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "basic_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::home_handler,
        crate::handlers::book_handler,
        crate::handlers::admin_bookings_handler,
        crate::handlers::user_dashboard_handler,
    ),
    components(schemas(
        Booking,
        BookingRequest,
        BookingConfirmation,
        DashboardSummary,
        DashboardStats,
        ActiveAgent,
        RecentActivity,
        ErrorMessage,
    )),
    modifiers(&BasicAuthAddon),
    tags(
        (name = "Booking", description = "Appointment booking"),
        (name = "Admin", description = "Credential-gated booking listing"),
        (name = "Dashboard", description = "Per-user dashboard summary"),
        (name = "Health", description = "Liveness")
    )
)]
pub struct BookingApiDoc;
