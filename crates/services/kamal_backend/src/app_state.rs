// --- File: crates/services/kamal_backend/src/app_state.rs ---
use kamal_booking::BookingState;
use kamal_common::KamalError;
use kamal_config::AppConfig;
use kamal_db::DbClientFactory;
use kamal_mail::BookingNotifier;
use std::sync::Arc;
use tracing::warn;

/// Connect the booking store and build the mail notifier for `config`.
///
/// The storage backend is chosen here, once, and never changes afterwards.
pub async fn build_booking_state(config: Arc<AppConfig>) -> Result<Arc<BookingState>, KamalError> {
    let repository = DbClientFactory::new().connect(&config).await?;

    let notifier = BookingNotifier::from_config(&config.mail)?;

    if config.admin.credentials().is_none() {
        warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set: /admin/bookings will reject every request");
    }

    Ok(Arc::new(BookingState {
        config,
        repository,
        notifier: Arc::new(notifier),
    }))
}
