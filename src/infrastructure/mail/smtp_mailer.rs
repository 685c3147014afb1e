//! SMTP delivery using lettre's async transport.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use std::time::Duration;

use super::{MailError, Mailer, OutgoingEmail};
use crate::config::SmtpSettings;

/// Mailer backed by an SMTP relay.
///
/// With credentials the connection is upgraded with STARTTLS. Without them
/// the transport talks plain SMTP, which suits local catchers like Mailpit.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings, from: &str, timeout: Duration) -> Result<Self, MailError> {
        let from: Mailbox = from
            .parse()
            .map_err(|_| MailError::Address(from.to_string()))?;

        let transport = match (&settings.username, &settings.password) {
            (Some(username), password) => {
                let creds = Credentials::new(username.clone(), password.clone().unwrap_or_default());
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
                    .map_err(|e| MailError::Transport(e.to_string()))?
                    .port(settings.port)
                    .credentials(creds)
                    .timeout(Some(timeout))
                    .build()
            }
            (None, _) => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
                .port(settings.port)
                .timeout(Some(timeout))
                .build(),
        };

        Ok(Self { transport, from })
    }

    fn build_message(&self, email: &OutgoingEmail) -> Result<Message, MailError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|_| MailError::Address(email.to.clone()))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&email.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html.clone()),
                    ),
            )
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        tracing::info!(to = %email.to, subject = %email.subject, "Email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SmtpSettings {
        SmtpSettings {
            host: "localhost".to_string(),
            port: 1025,
            username: None,
            password: None,
        }
    }

    fn email(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            to: to.to_string(),
            subject: "Hello".to_string(),
            text: "plain".to_string(),
            html: "<p>html</p>".to_string(),
        }
    }

    #[test]
    fn test_rejects_invalid_sender() {
        let result = SmtpMailer::new(&settings(), "not an address", Duration::from_secs(5));
        assert!(matches!(result, Err(MailError::Address(_))));
    }

    #[test]
    fn test_build_multipart_message() {
        let mailer = SmtpMailer::new(
            &settings(),
            "Yggrasoft Labs <noreply@yggrasoft.com>",
            Duration::from_secs(5),
        )
        .unwrap();

        let message = mailer.build_message(&email("astrid@example.com")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("Subject: Hello"));
        assert!(raw.contains("multipart/alternative"));
    }

    #[test]
    fn test_build_rejects_invalid_recipient() {
        let mailer =
            SmtpMailer::new(&settings(), "noreply@yggrasoft.com", Duration::from_secs(5)).unwrap();

        let result = mailer.build_message(&email("nope"));
        assert!(matches!(result, Err(MailError::Address(_))));
    }
}
