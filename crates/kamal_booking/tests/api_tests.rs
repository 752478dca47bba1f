// End-to-end tests of the booking router with an in-memory store and a mocked SendGrid.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use kamal_booking::{routes, BookingState};
use kamal_common::{Booking, BoxFuture, NewBooking};
use kamal_config::{AdminConfig, AppConfig, LocalStoreConfig, MailConfig};
use kamal_db::{BookingRepository, DbBackend, DbClientFactory, DbError};
use kamal_mail::BookingNotifier;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct TestApp {
    router: Router,
    repository: Arc<dyn BookingRepository>,
    mail_server: MockServer,
}

async fn test_app(provider_status: u16) -> TestApp {
    let mail_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/mail/send"))
        .respond_with(ResponseTemplate::new(provider_status))
        .mount(&mail_server)
        .await;

    let config = AppConfig {
        local_store: LocalStoreConfig {
            path: ":memory:".to_string(),
        },
        mail: MailConfig {
            api_key: Some("SG.test-key".to_string()),
            api_base_url: mail_server.uri(),
            ..MailConfig::default()
        },
        admin: AdminConfig {
            username: Some("admin".to_string()),
            password: Some("s3cret".to_string()),
        },
        ..AppConfig::default()
    };

    let repository = DbClientFactory::new().connect(&config).await.unwrap();
    let notifier = Arc::new(BookingNotifier::from_config(&config.mail).unwrap());
    let state = Arc::new(BookingState {
        config: Arc::new(config),
        repository: repository.clone(),
        notifier,
    });

    TestApp {
        router: routes(state),
        repository,
        mail_server,
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

fn post_booking(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/book")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn admin_request(authorization: Option<(&str, &str)>) -> Request<Body> {
    let mut builder = Request::builder().uri("/admin/bookings");
    if let Some((user, pass)) = authorization {
        let token = STANDARD.encode(format!("{}:{}", user, pass));
        builder = builder.header(header::AUTHORIZATION, format!("Basic {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn asha() -> Value {
    json!({
        "name": "Asha",
        "email": "asha@x.com",
        "phone": "555",
        "date": "2024-05-01",
        "time": "10:00"
    })
}

#[tokio::test]
async fn test_home_reports_liveness() {
    let app = test_app(202).await;
    let (status, _, body) = send(&app.router, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "KAMAL AI Backend Running 🚀");
}

#[tokio::test]
async fn test_booking_is_stored_and_both_emails_sent() {
    let app = test_app(202).await;

    let (status, _, body) = send(&app.router, post_booking(asha())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"message": "Booking Confirmed"}));

    let stored = app.repository.list_bookings().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name.as_deref(), Some("Asha"));
    assert_eq!(app.mail_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_provider_failure_still_confirms() {
    let app = test_app(500).await;

    let (status, _, body) = send(&app.router, post_booking(asha())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Booking Confirmed"));
    assert_eq!(app.repository.list_bookings().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_booking_without_fields_is_stored_with_nulls() {
    let app = test_app(202).await;

    let (status, _, _) = send(&app.router, post_booking(json!({"phone": 555}))).await;

    assert_eq!(status, StatusCode::OK);
    let stored = app.repository.list_bookings().await.unwrap();
    assert_eq!(stored[0].phone.as_deref(), Some("555"));
    assert_eq!(stored[0].email, None);
    // Only the internal alert goes out without a customer address.
    assert_eq!(app.mail_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_booking_ids_increase() {
    let app = test_app(202).await;
    for _ in 0..3 {
        send(&app.router, post_booking(asha())).await;
    }

    let ids: Vec<i64> = app
        .repository
        .list_bookings()
        .await
        .unwrap()
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|pair| pair[0] > pair[1]));
}

#[tokio::test]
async fn test_admin_requires_credentials() {
    let app = test_app(202).await;
    send(&app.router, post_booking(asha())).await;

    for authorization in [None, Some(("admin", "wrong")), Some(("root", "s3cret"))] {
        let (status, headers, body) = send(&app.router, admin_request(authorization)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            headers.get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"Login Required\""
        );
        assert!(!body.contains("Asha"));
    }
}

#[tokio::test]
async fn test_admin_lists_bookings_most_recent_first() {
    let app = test_app(202).await;
    send(&app.router, post_booking(asha())).await;
    let mut ben = asha();
    ben["name"] = json!("Ben");
    send(&app.router, post_booking(ben)).await;

    let (status, headers, body) = send(&app.router, admin_request(Some(("admin", "s3cret")))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(body.contains("Asha"));
    assert!(body.contains("555"));
    assert!(body.find("Ben").unwrap() < body.find("Asha").unwrap());
}

#[tokio::test]
async fn test_dashboard_requires_email() {
    let app = test_app(202).await;

    for uri in ["/api/user-dashboard", "/api/user-dashboard?email="] {
        let (status, _, body) = send(&app.router, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"error": "Email is required"}));
    }
}

#[tokio::test]
async fn test_dashboard_counts_every_booking() {
    let app = test_app(202).await;
    for i in 0..7 {
        let mut booking = asha();
        booking["name"] = json!(format!("Customer{}", i));
        send(&app.router, post_booking(booking)).await;
    }

    let (status, _, body) = send(&app.router, get("/api/user-dashboard?email=asha@x.com")).await;
    let summary: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["stats"], json!({"total_calls": 7, "hours_saved": 1, "cost_saved": 26}));
    assert_eq!(summary["active_agents"][0]["name"], "Asha's Voice Receptionist");
    let activity = summary["recent_activity"].as_array().unwrap();
    assert_eq!(activity.len(), 5);
    assert_eq!(activity[0]["customer"], "Customer6");
    assert_eq!(activity[4]["customer"], "Customer2");
}

// --- Storage failures ---

struct BrokenRepository;

impl BookingRepository for BrokenRepository {
    fn backend(&self) -> DbBackend {
        DbBackend::Sqlite
    }

    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async { Ok(()) })
    }

    fn insert_booking(&self, _booking: NewBooking) -> BoxFuture<'_, Booking, DbError> {
        Box::pin(async { Err(DbError::QueryError("disk I/O error".to_string())) })
    }

    fn list_bookings(&self) -> BoxFuture<'_, Vec<Booking>, DbError> {
        Box::pin(async { Err(DbError::QueryError("disk I/O error".to_string())) })
    }
}

fn broken_app() -> Router {
    let config = AppConfig {
        admin: AdminConfig {
            username: Some("admin".to_string()),
            password: Some("s3cret".to_string()),
        },
        ..AppConfig::default()
    };
    let notifier = Arc::new(BookingNotifier::from_config(&config.mail).unwrap());
    routes(Arc::new(BookingState {
        config: Arc::new(config),
        repository: Arc::new(BrokenRepository),
        notifier,
    }))
}

#[tokio::test]
async fn test_insert_failure_is_server_error() {
    let (status, _, body) = send(&broken_app(), post_booking(asha())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains("Booking Confirmed"));
    assert!(body.contains("disk I/O error"));
}

#[tokio::test]
async fn test_admin_storage_error_is_plain_text() {
    let (status, _, body) = send(&broken_app(), admin_request(Some(("admin", "s3cret")))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("Error: "));
}

#[tokio::test]
async fn test_dashboard_storage_error_is_server_error() {
    let (status, _, _) = send(&broken_app(), get("/api/user-dashboard?email=asha@x.com")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
