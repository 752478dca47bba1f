//! Runs against a live server only: `DATABASE_URL=postgres://... cargo test -- --ignored`

use crate::client::DbBackend;
use crate::repositories::PostgresBookingRepository;
use crate::repository::BookingRepository;
use kamal_common::NewBooking;

async fn server_store() -> Option<PostgresBookingRepository> {
    let url = std::env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty())?;
    let repository = PostgresBookingRepository::connect(&url).await.unwrap();
    repository.init_schema().await.unwrap();
    Some(repository)
}

#[tokio::test]
#[ignore = "needs a PostgreSQL server in DATABASE_URL"]
async fn test_postgres_insert_returns_serial_ids_and_lists_newest_first() {
    let Some(repository) = server_store().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    assert_eq!(repository.backend(), DbBackend::Postgres);

    // Running the schema twice is harmless.
    repository.init_schema().await.unwrap();

    let first = repository
        .insert_booking(NewBooking {
            name: Some("Asha".to_string()),
            phone: Some("555".to_string()),
            ..NewBooking::default()
        })
        .await
        .unwrap();
    let second = repository
        .insert_booking(NewBooking::default())
        .await
        .unwrap();

    assert!(second.id > first.id);
    assert_eq!(second.name, None);

    let stored = repository.list_bookings().await.unwrap();
    assert!(stored.windows(2).all(|pair| pair[0].id > pair[1].id));
    let asha = stored.iter().find(|b| b.id == first.id).unwrap();
    assert_eq!(asha.name.as_deref(), Some("Asha"));
    assert_eq!(asha.phone.as_deref(), Some("555"));
    assert_eq!(asha.email, None);
}
