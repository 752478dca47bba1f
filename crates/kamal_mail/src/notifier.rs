//! Best-effort booking notifications
//!
//! A stored booking triggers two independent emails. Neither outcome is ever turned
//! into an error: failures are logged and reported in a [`NotificationReport`].

use crate::client::MailError;
use crate::service::SendGridNotificationService;
use crate::templates;
use kamal_common::{Booking, DeliveryOutcome, EmailMessage, NotificationService};
use kamal_config::MailConfig;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// What happened to the two emails of one booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationReport {
    pub customer: DeliveryOutcome,
    pub internal: DeliveryOutcome,
}

/// Sends the customer confirmation and the internal alert for new bookings
pub struct BookingNotifier {
    service: Arc<dyn NotificationService<Error = MailError>>,
    mail: MailConfig,
}

impl BookingNotifier {
    pub fn new(service: Arc<dyn NotificationService<Error = MailError>>, mail: MailConfig) -> Self {
        Self { service, mail }
    }

    /// Build a notifier backed by SendGrid.
    pub fn from_config(mail: &MailConfig) -> Result<Self, MailError> {
        let service = SendGridNotificationService::new(mail)?;
        if !service.is_configured() {
            warn!("No SendGrid API key configured; booking emails will be skipped");
        }
        Ok(Self::new(Arc::new(service), mail.clone()))
    }

    /// Send both emails for `booking`.
    ///
    /// The internal alert is attempted whatever happened to the customer email.
    pub async fn notify_booking(&self, booking: &Booking) -> NotificationReport {
        let customer = match templates::customer_confirmation(booking, &self.mail) {
            Some(message) => self.deliver("Customer confirmation", message).await,
            None => {
                info!("Booking {} has no email address; skipping confirmation", booking.id);
                DeliveryOutcome::Skipped {
                    reason: "booking has no email address".to_string(),
                }
            }
        };

        let internal = self
            .deliver("Internal alert", templates::internal_alert(booking, &self.mail))
            .await;

        NotificationReport { customer, internal }
    }

    async fn deliver(&self, kind: &str, message: EmailMessage) -> DeliveryOutcome {
        let to = message.to.clone();
        match self.service.send_email(message).await {
            Ok(result) => {
                info!("{} email to {} accepted (status {})", kind, to, result.status_code);
                DeliveryOutcome::Delivered(result)
            }
            Err(MailError::ConfigError(reason)) => {
                warn!("{} email to {} skipped: {}", kind, to, reason);
                DeliveryOutcome::Skipped { reason }
            }
            Err(err) => {
                warn!("{} email to {} failed: {}", kind, to, err);
                DeliveryOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}
