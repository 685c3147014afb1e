//! Repository trait for client reviews.

use crate::domain::entities::{NewReview, Review};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, new_review: NewReview) -> Result<Review, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, AppError>;

    /// Lists reviews ordered by `order`, then `id`.
    async fn list(&self, only_active: bool) -> Result<Vec<Review>, AppError>;

    /// Active reviews attached to any of `project_ids`, ordered by `order`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_active_for_projects(&self, project_ids: &[i64])
    -> Result<Vec<Review>, AppError>;

    /// Persists every field of an already loaded review.
    async fn update(&self, review: &Review) -> Result<Review, AppError>;

    /// Deletes a review. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
