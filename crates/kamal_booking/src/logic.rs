// File: crates/kamal_booking/src/logic.rs
//! Request/response types and the pure parts of the booking endpoints.

use html_escape::encode_text;
use kamal_common::{Booking, NewBooking};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Number of bookings shown in the dashboard activity feed
pub const RECENT_ACTIVITY_LIMIT: usize = 5;
/// Hours of staff time one handled call is assumed to save
pub const HOURS_PER_CALL: f64 = 0.25;
/// Hourly staff cost used for the savings estimate
pub const HOURLY_RATE: f64 = 15.0;

pub const BOOKING_CONFIRMED: &str = "Booking Confirmed";
pub const EMAIL_REQUIRED: &str = "Email is required";

// --- Booking creation ---

/// Body of `POST /book`.
///
/// No field is required. `null` and missing fields become `None`, other scalars are kept
/// as their text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time: Option<String>,
}

impl From<BookingRequest> for NewBooking {
    fn from(request: BookingRequest) -> Self {
        NewBooking {
            name: request.name,
            email: request.email,
            phone: request.phone,
            date: request.date,
            time: request.time,
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingConfirmation {
    pub message: String,
}

impl BookingConfirmation {
    pub fn confirmed() -> Self {
        Self {
            message: BOOKING_CONFIRMED.to_string(),
        }
    }
}

// --- Dashboard ---

#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct DashboardQuery {
    /// Email address of the dashboard user
    pub email: Option<String>,
}

impl DashboardQuery {
    /// The supplied email, if it is not blank
    pub fn email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

/// Flat error body used by the dashboard endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorMessage {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardStats {
    pub total_calls: u64,
    pub hours_saved: u64,
    pub cost_saved: u64,
}

impl DashboardStats {
    /// Savings estimate for `total_calls` handled calls.
    ///
    /// Both figures are truncated; `cost_saved` is derived from the untruncated hours.
    pub fn from_call_count(total_calls: u64) -> Self {
        let hours = total_calls as f64 * HOURS_PER_CALL;
        Self {
            total_calls,
            hours_saved: hours.trunc() as u64,
            cost_saved: (hours * HOURLY_RATE).trunc() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ActiveAgent {
    pub id: u32,
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecentActivity {
    pub id: i64,
    pub customer: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub description: String,
}

impl From<&Booking> for RecentActivity {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            customer: booking.name.clone(),
            date: booking.date.clone(),
            time: booking.time.clone(),
            description: "Demo call booked".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub active_agents: Vec<ActiveAgent>,
    pub recent_activity: Vec<RecentActivity>,
}

/// Display name derived from the local part of an email address.
///
/// `"asha@x.com"` becomes `"Asha"`.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default().trim();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Your".to_string(),
    }
}

/// The two demo agents shown on every dashboard
pub fn mock_agents(email: &str) -> Vec<ActiveAgent> {
    let owner = display_name_from_email(email);
    vec![
        ActiveAgent {
            id: 1,
            name: format!("{}'s Voice Receptionist", owner),
            status: "active".to_string(),
        },
        ActiveAgent {
            id: 2,
            name: format!("{}'s Appointment Scheduler", owner),
            status: "active".to_string(),
        },
    ]
}

/// Build the dashboard for `email` from `bookings`.
///
/// `bookings` must already be ordered most recent first; every stored booking is
/// counted whatever its email.
pub fn summarize_dashboard(email: &str, bookings: &[Booking]) -> DashboardSummary {
    DashboardSummary {
        stats: DashboardStats::from_call_count(bookings.len() as u64),
        active_agents: mock_agents(email),
        recent_activity: bookings
            .iter()
            .take(RECENT_ACTIVITY_LIMIT)
            .map(RecentActivity::from)
            .collect(),
    }
}

// --- Admin listing ---

const TABLE_COLUMNS: [&str; 6] = ["ID", "Name", "Email", "Phone", "Date", "Time"];

/// Render bookings as an HTML table, one row per booking in the given order.
pub fn render_bookings_table(bookings: &[Booking]) -> String {
    let mut html = String::from("<h2>All Bookings</h2><table border=\"1\" cellpadding=\"6\"><tr>");
    for column in TABLE_COLUMNS {
        html.push_str(&format!("<th>{}</th>", column));
    }
    html.push_str("</tr>");

    for booking in bookings {
        html.push_str(&format!("<tr><td>{}</td>", booking.id));
        for value in [
            booking.name_or_empty(),
            booking.email_or_empty(),
            booking.phone_or_empty(),
            booking.date_or_empty(),
            booking.time_or_empty(),
        ] {
            html.push_str(&format!("<td>{}</td>", encode_text(value)));
        }
        html.push_str("</tr>");
    }

    html.push_str("</table>");
    html
}
