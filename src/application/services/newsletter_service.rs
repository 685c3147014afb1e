//! Newsletter subscription service.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::Subscriber;
use crate::domain::repositories::NewsletterRepository;
use crate::error::AppError;

/// Result of a successful subscribe call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubscribeOutcome {
    /// A new subscriber row was created.
    Subscribed(Subscriber),
    /// An inactive subscriber was reactivated.
    Resubscribed(Subscriber),
}

impl SubscribeOutcome {
    pub fn subscriber(&self) -> &Subscriber {
        match self {
            SubscribeOutcome::Subscribed(s) | SubscribeOutcome::Resubscribed(s) => s,
        }
    }
}

/// Manages newsletter subscriptions.
///
/// Emails are trimmed and lower-cased before any lookup. The
/// find-then-write sequence is not transactional: two concurrent subscribes
/// for a new email race, and the loser gets [`AppError::Conflict`] from the
/// unique index.
pub struct NewsletterService<R: NewsletterRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: NewsletterRepository + ?Sized> NewsletterService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Subscribes an email, reactivating a previous subscription if present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already subscribed.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, AppError> {
        let email = normalize_email(email);

        match self.repository.find_by_email(&email).await? {
            Some(existing) if existing.is_active => {
                Err(AppError::bad_request("Email is already subscribed"))
            }
            Some(mut inactive) => {
                inactive.reactivate(Utc::now());
                let subscriber = self.repository.update(&inactive).await?;
                tracing::info!(subscriber_id = subscriber.id, "Newsletter subscription reactivated");
                Ok(SubscribeOutcome::Resubscribed(subscriber))
            }
            None => {
                let subscriber = self.repository.create(&email).await?;
                tracing::info!(subscriber_id = subscriber.id, "Newsletter subscription created");
                Ok(SubscribeOutcome::Subscribed(subscriber))
            }
        }
    }

    /// Deactivates a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the email was never subscribed.
    /// Returns [`AppError::Validation`] if it is already unsubscribed.
    pub async fn unsubscribe(&self, email: &str) -> Result<Subscriber, AppError> {
        let email = normalize_email(email);

        let mut subscriber = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::not_found("Email not found in newsletter list"))?;

        if !subscriber.is_active {
            return Err(AppError::bad_request("Email is already unsubscribed"));
        }

        subscriber.deactivate(Utc::now());
        let subscriber = self.repository.update(&subscriber).await?;
        tracing::info!(subscriber_id = subscriber.id, "Newsletter subscription cancelled");
        Ok(subscriber)
    }

    /// Lists every subscriber for the admin.
    pub async fn list(&self) -> Result<Vec<Subscriber>, AppError> {
        self.repository.list().await
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockNewsletterRepository;
    use chrono::Duration;

    fn subscriber(email: &str, is_active: bool) -> Subscriber {
        let then = Utc::now() - Duration::days(30);
        Subscriber {
            id: 1,
            email: email.to_string(),
            is_active,
            subscribed_at: then,
            unsubscribed_at: if is_active { None } else { Some(then) },
            created_at: then,
            updated_at: then,
        }
    }

    #[tokio::test]
    async fn test_subscribe_new_email_is_normalized() {
        let mut mock_repo = MockNewsletterRepository::new();

        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "astrid@example.com")
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .withf(|email| email == "astrid@example.com")
            .times(1)
            .returning(|email| Ok(subscriber(email, true)));

        let service = NewsletterService::new(Arc::new(mock_repo));

        let outcome = service.subscribe("  Astrid@Example.COM ").await.unwrap();

        assert!(matches!(outcome, SubscribeOutcome::Subscribed(_)));
        assert_eq!(outcome.subscriber().email, "astrid@example.com");
    }

    #[tokio::test]
    async fn test_subscribe_active_email_is_rejected() {
        let mut mock_repo = MockNewsletterRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(subscriber(email, true))));

        let service = NewsletterService::new(Arc::new(mock_repo));

        let err = service.subscribe("astrid@example.com").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Email is already subscribed");
    }

    #[tokio::test]
    async fn test_subscribe_inactive_email_reactivates() {
        let mut mock_repo = MockNewsletterRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(subscriber(email, false))));
        mock_repo
            .expect_update()
            .withf(|s| s.is_active && s.unsubscribed_at.is_none())
            .times(1)
            .returning(|s| Ok(s.clone()));
        mock_repo.expect_create().never();

        let service = NewsletterService::new(Arc::new(mock_repo));

        let outcome = service.subscribe("astrid@example.com").await.unwrap();

        assert!(matches!(outcome, SubscribeOutcome::Resubscribed(_)));
    }

    #[tokio::test]
    async fn test_unsubscribe_unknown_email() {
        let mut mock_repo = MockNewsletterRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = NewsletterService::new(Arc::new(mock_repo));

        let err = service.unsubscribe("ghost@example.com").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_unsubscribe_inactive_email() {
        let mut mock_repo = MockNewsletterRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(subscriber(email, false))));

        let service = NewsletterService::new(Arc::new(mock_repo));

        let err = service.unsubscribe("astrid@example.com").await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Email is already unsubscribed");
    }

    #[tokio::test]
    async fn test_unsubscribe_sets_timestamp() {
        let mut mock_repo = MockNewsletterRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(subscriber(email, true))));
        mock_repo
            .expect_update()
            .withf(|s| !s.is_active && s.unsubscribed_at.is_some())
            .times(1)
            .returning(|s| Ok(s.clone()));

        let service = NewsletterService::new(Arc::new(mock_repo));

        let subscriber = service.unsubscribe("astrid@example.com").await.unwrap();
        assert!(!subscriber.is_active);
    }
}
