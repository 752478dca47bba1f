use crate::client::{MailError, SendGridClient};
use kamal_common::{BoxFuture, EmailMessage, NotificationResult, NotificationService};
use kamal_config::MailConfig;

/// SendGrid notification service implementation
#[derive(Debug, Clone)]
pub struct SendGridNotificationService {
    client: SendGridClient,
}

impl SendGridNotificationService {
    /// Create a new SendGrid notification service
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        Ok(Self {
            client: SendGridClient::new(config)?,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }
}

impl NotificationService for SendGridNotificationService {
    type Error = MailError;

    fn send_email(&self, message: EmailMessage) -> BoxFuture<'_, NotificationResult, Self::Error> {
        Box::pin(async move { self.client.send(&message).await })
    }
}
