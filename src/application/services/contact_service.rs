//! Contact-form service.

use std::sync::Arc;

use crate::domain::entities::{Contact, ContactStatus, NewContact};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

use super::notification_service::{NotificationOutcome, NotificationService};

/// Stores contact submissions and triggers their notifications.
pub struct ContactService<R: ContactRepository + ?Sized> {
    repository: Arc<R>,
    notifications: Arc<NotificationService>,
}

impl<R: ContactRepository + ?Sized> ContactService<R> {
    pub fn new(repository: Arc<R>, notifications: Arc<NotificationService>) -> Self {
        Self {
            repository,
            notifications,
        }
    }

    /// Persists a submission, then attempts both notification emails.
    ///
    /// The submission is stored before any email is attempted; email
    /// failures only show up in the returned [`NotificationOutcome`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the submission cannot be stored.
    pub async fn submit(
        &self,
        new_contact: NewContact,
    ) -> Result<(Contact, NotificationOutcome), AppError> {
        let new_contact = NewContact {
            name: new_contact.name.trim().to_string(),
            email: new_contact.email.trim().to_string(),
            subject: new_contact
                .subject
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            message: new_contact.message.trim().to_string(),
        };

        let contact = self.repository.create(new_contact).await?;
        tracing::info!(contact_id = contact.id, "Contact submission saved");

        let outcome = self.notifications.notify_contact(&contact).await;
        Ok((contact, outcome))
    }

    /// Lists submissions, newest first.
    pub async fn list(&self) -> Result<Vec<Contact>, AppError> {
        self.repository.list().await
    }

    pub async fn get(&self, id: i64) -> Result<Contact, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Contact not found"))
    }

    pub async fn update_status(&self, id: i64, status: ContactStatus) -> Result<Contact, AppError> {
        self.repository
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::not_found("Contact not found"))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Contact not found"));
        }
        Ok(())
    }
}
