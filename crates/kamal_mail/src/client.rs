//! SendGrid v3 mail client
//!
//! A thin wrapper over `POST /v3/mail/send`. Each call sends exactly one message and
//! is never retried.

use kamal_common::{create_client, external_service_error, EmailMessage, KamalError, NotificationResult};
use kamal_config::MailConfig;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

const MESSAGE_ID_HEADER: &str = "x-message-id";

/// Errors that can occur when talking to SendGrid
#[derive(Error, Debug)]
pub enum MailError {
    /// Error occurred during the HTTP request
    #[error("SendGrid request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the SendGrid API
    #[error("SendGrid API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Missing or incomplete mail configuration
    #[error("Mail configuration missing or incomplete: {0}")]
    ConfigError(String),
}

impl From<MailError> for KamalError {
    fn from(err: MailError) -> Self {
        match err {
            MailError::ConfigError(msg) => KamalError::ConfigError(msg),
            other => external_service_error("SendGrid", other),
        }
    }
}

// --- Wire format of /v3/mail/send ---

#[derive(Debug, Serialize)]
struct SendGridMail<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

impl<'a> From<&'a EmailMessage> for SendGridMail<'a> {
    fn from(message: &'a EmailMessage) -> Self {
        // SendGrid requires text/plain to precede text/html.
        Self {
            personalizations: vec![Personalization {
                to: vec![Address { email: &message.to }],
            }],
            from: Address {
                email: &message.from,
            },
            subject: &message.subject,
            content: vec![
                Content {
                    content_type: "text/plain",
                    value: &message.text_body,
                },
                Content {
                    content_type: "text/html",
                    value: &message.html_body,
                },
            ],
        }
    }
}

/// Client for the SendGrid mail API
#[derive(Debug, Clone)]
pub struct SendGridClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl SendGridClient {
    /// Build a client from the mail configuration.
    ///
    /// A missing API key is not an error here; sends fail with
    /// [`MailError::ConfigError`] instead.
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let client = create_client(config.timeout_secs, false)?;
        Ok(Self {
            client,
            api_key: config
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Whether an API key is available
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send one message.
    ///
    /// Any 2xx answer counts as accepted.
    ///
    /// # Errors
    ///
    /// * `MailError::ConfigError` if no API key is configured
    /// * `MailError::RequestError` if SendGrid cannot be reached
    /// * `MailError::ApiError` if SendGrid rejects the message
    pub async fn send(&self, message: &EmailMessage) -> Result<NotificationResult, MailError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| MailError::ConfigError("SendGrid API key is not set".to_string()))?;

        let url = format!("{}/v3/mail/send", self.base_url);
        debug!("Sending \"{}\" to {}", message.subject, message.to);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&SendGridMail::from(message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("SendGrid returned {}: {}", status, body);
            return Err(MailError::ApiError {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let id = response
            .headers()
            .get(MESSAGE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(NotificationResult {
            id,
            status_code: status.as_u16(),
        })
    }
}
