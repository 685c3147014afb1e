//! Repository trait for newsletter subscriptions.

use crate::domain::entities::Subscriber;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for newsletter subscribers.
///
/// Emails are stored lower-cased; callers normalize before lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// Finds a subscriber by normalized email, active or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, AppError>;

    /// Inserts a new active subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email was inserted concurrently.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, email: &str) -> Result<Subscriber, AppError>;

    /// Persists the subscription state of an already loaded subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the subscriber no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError>;

    /// Lists every subscriber, most recent subscription first.
    async fn list(&self) -> Result<Vec<Subscriber>, AppError>;
}
