//! Repository trait for contact-form submissions.

use crate::domain::entities::{Contact, ContactStatus, NewContact};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the contact inbox.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgContactRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Stores a new submission with status [`ContactStatus::New`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_contact: NewContact) -> Result<Contact, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, AppError>;

    /// Lists submissions, newest first.
    async fn list(&self) -> Result<Vec<Contact>, AppError>;

    /// Sets the processing status. Returns `Ok(None)` if the submission does not exist.
    async fn update_status(
        &self,
        id: i64,
        status: ContactStatus,
    ) -> Result<Option<Contact>, AppError>;

    /// Deletes a submission. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
