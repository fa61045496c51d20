use std::sync::Arc;

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::SmtpConfig;
use crate::contact::models::ContactRecord;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Invalid address '{address}': {reason}")]
    Address { address: String, reason: String },

    #[error("Failed to build email: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Delivers a notification for a stored contact submission.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, record: &ContactRecord) -> Result<(), NotifyError>;
}

/// Sends contact notifications through an SMTP relay using STARTTLS.
pub struct SmtpNotifier {
    config: SmtpConfig,
}

impl SmtpNotifier {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn compose(&self, record: &ContactRecord) -> Result<Message, NotifyError> {
        let message = Message::builder()
            .from(parse_mailbox(&self.config.user)?)
            .to(parse_mailbox(&self.config.dest_email)?)
            .subject(render_subject(record))
            .header(ContentType::TEXT_PLAIN)
            .body(render_body(record))?;
        Ok(message)
    }
}

#[async_trait]
impl ContactNotifier for SmtpNotifier {
    async fn notify(&self, record: &ContactRecord) -> Result<(), NotifyError> {
        let email = self.compose(record)?;

        let creds = Credentials::new(self.config.user.clone(), self.config.password.clone());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
            .port(self.config.port)
            .credentials(creds)
            .build();

        let response = mailer.send(email).await?;
        debug!(
            "Contact notification accepted by {} (code {})",
            self.config.host,
            response.code()
        );
        Ok(())
    }
}

/// Fires a notification in the background. Failures are logged and dropped;
/// the caller never waits on or observes the outcome.
pub fn spawn_notification(
    notifier: Arc<dyn ContactNotifier>,
    record: ContactRecord,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = notifier.notify(&record).await {
            warn!("Email send failed: {e}");
        }
    })
}

pub fn render_subject(record: &ContactRecord) -> String {
    format!("Portfolio Contact → {}", record.name)
}

pub fn render_body(record: &ContactRecord) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}\n\nTime: {}",
        record.name, record.email, record.message, record.time
    )
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address.parse().map_err(|e| NotifyError::Address {
        address: address.to_string(),
        reason: format!("{e}"),
    })
}
