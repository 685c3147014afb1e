//! Mailer used when no SMTP server is configured.

use async_trait::async_trait;

use super::{MailError, Mailer, OutgoingEmail};

/// Logs every email instead of sending it and reports the send as failed.
pub struct NullMailer;

#[async_trait]
impl Mailer for NullMailer {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        tracing::warn!(
            to = %email.to,
            subject = %email.subject,
            "SMTP is not configured, email not sent"
        );
        Err(MailError::NotConfigured)
    }
}
