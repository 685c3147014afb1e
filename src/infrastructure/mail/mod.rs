//! Outgoing email delivery.
//!
//! - [`SmtpMailer`] - Delivery through an SMTP relay (lettre)
//! - [`NullMailer`] - Used when SMTP is not configured; logs and reports failure

pub mod null_mailer;
pub mod smtp_mailer;

pub use null_mailer::NullMailer;
pub use smtp_mailer::SmtpMailer;

use async_trait::async_trait;
use thiserror::Error;

/// A rendered email with plain-text and HTML alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address '{0}'")]
    Address(String),
    #[error("failed to build message: {0}")]
    Build(String),
    #[error("SMTP transport error: {0}")]
    Transport(String),
    #[error("email delivery is not configured")]
    NotConfigured,
}

/// Sends rendered emails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Short transport name shown by the health check.
    fn name(&self) -> &'static str;

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}
