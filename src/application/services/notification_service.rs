//! Contact-form email notifications.
//!
//! Every successful submission triggers two independent sends: a
//! notification to the admin inbox and a confirmation to the submitter.
//! Failures are logged and reported in [`NotificationOutcome`]; they never
//! fail the submission itself.

use askama::Template;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::Contact;
use crate::infrastructure::mail::{MailError, Mailer, OutgoingEmail};

pub const CONFIRMATION_SUBJECT: &str = "Thank you for contacting Yggrasoft Labs";

/// Which of the two notification emails went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationOutcome {
    pub admin_notification: bool,
    pub user_confirmation: bool,
}

#[derive(Template)]
#[template(path = "email/contact_admin.html")]
struct AdminHtml<'a> {
    id: i64,
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    received_at: String,
    site_url: &'a str,
}

#[derive(Template)]
#[template(path = "email/contact_admin.txt")]
struct AdminText<'a> {
    id: i64,
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    received_at: String,
    site_url: &'a str,
}

#[derive(Template)]
#[template(path = "email/contact_confirmation.html")]
struct ConfirmationHtml<'a> {
    name: &'a str,
    message: &'a str,
    site_url: &'a str,
}

#[derive(Template)]
#[template(path = "email/contact_confirmation.txt")]
struct ConfirmationText<'a> {
    name: &'a str,
    message: &'a str,
    site_url: &'a str,
}

/// Renders and sends contact notifications through a [`Mailer`].
pub struct NotificationService {
    mailer: Arc<dyn Mailer>,
    admin_email: String,
    site_url: String,
    timeout: Duration,
}

impl NotificationService {
    /// # Arguments
    ///
    /// - `admin_email` - Inbox receiving new-submission notifications
    /// - `site_url` - Public URL linked from the emails
    /// - `timeout` - Upper bound for each individual send
    pub fn new(
        mailer: Arc<dyn Mailer>,
        admin_email: String,
        site_url: String,
        timeout: Duration,
    ) -> Self {
        Self {
            mailer,
            admin_email,
            site_url,
            timeout,
        }
    }

    pub fn mailer_name(&self) -> &'static str {
        self.mailer.name()
    }

    /// Sends both contact emails concurrently. Never fails.
    pub async fn notify_contact(&self, contact: &Contact) -> NotificationOutcome {
        let admin = async {
            let email = self.admin_email(contact)?;
            self.deliver(&email).await
        };
        let user = async {
            let email = self.confirmation_email(contact)?;
            self.deliver(&email).await
        };

        let (admin, user) = tokio::join!(admin, user);

        if let Err(e) = &admin {
            tracing::warn!(contact_id = contact.id, error = %e, "Admin notification failed");
        }
        if let Err(e) = &user {
            tracing::warn!(contact_id = contact.id, error = %e, "User confirmation failed");
        }

        let outcome = NotificationOutcome {
            admin_notification: admin.is_ok(),
            user_confirmation: user.is_ok(),
        };
        tracing::info!(
            contact_id = contact.id,
            admin_notification = outcome.admin_notification,
            user_confirmation = outcome.user_confirmation,
            "Contact notifications processed"
        );
        outcome
    }

    async fn deliver(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        tokio::time::timeout(self.timeout, self.mailer.send(email))
            .await
            .map_err(|_| MailError::Transport(format!("timed out after {:?}", self.timeout)))?
    }

    fn admin_email(&self, contact: &Contact) -> Result<OutgoingEmail, MailError> {
        let subject = contact.subject.as_deref().unwrap_or("No subject");
        let received_at = contact.created_at.format("%Y-%m-%d %H:%M UTC").to_string();

        let html = AdminHtml {
            id: contact.id,
            name: &contact.name,
            email: &contact.email,
            subject,
            message: &contact.message,
            received_at: received_at.clone(),
            site_url: &self.site_url,
        }
        .render()
        .map_err(render_error)?;

        let text = AdminText {
            id: contact.id,
            name: &contact.name,
            email: &contact.email,
            subject,
            message: &contact.message,
            received_at,
            site_url: &self.site_url,
        }
        .render()
        .map_err(render_error)?;

        Ok(OutgoingEmail {
            to: self.admin_email.clone(),
            subject: format!("New Contact: {subject}"),
            text,
            html,
        })
    }

    fn confirmation_email(&self, contact: &Contact) -> Result<OutgoingEmail, MailError> {
        let html = ConfirmationHtml {
            name: &contact.name,
            message: &contact.message,
            site_url: &self.site_url,
        }
        .render()
        .map_err(render_error)?;

        let text = ConfirmationText {
            name: &contact.name,
            message: &contact.message,
            site_url: &self.site_url,
        }
        .render()
        .map_err(render_error)?;

        Ok(OutgoingEmail {
            to: contact.email.clone(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            text,
            html,
        })
    }
}

fn render_error(e: askama::Error) -> MailError {
    MailError::Build(e.to_string())
}
