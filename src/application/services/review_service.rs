//! Client review service.

use std::sync::Arc;

use crate::domain::entities::{NewReview, Review, UpdateReview};
use crate::domain::repositories::ReviewRepository;
use crate::error::{AppError, FieldError};

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

pub struct ReviewService<R: ReviewRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ReviewRepository + ?Sized> ReviewService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, include_inactive: bool) -> Result<Vec<Review>, AppError> {
        self.repository.list(!include_inactive).await
    }

    pub async fn get(&self, id: i64) -> Result<Review, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Review not found"))
    }

    /// Creates a review.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the rating is outside 1-5.
    pub async fn create(&self, new_review: NewReview) -> Result<Review, AppError> {
        ensure_rating(new_review.rating)?;

        let created = self.repository.create(new_review).await?;
        tracing::info!(review_id = created.id, project_id = ?created.project_id, "Review created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, update: UpdateReview) -> Result<Review, AppError> {
        if let Some(rating) = update.rating {
            ensure_rating(rating)?;
        }

        let mut review = self.get(id).await?;
        update.apply(&mut review);
        self.repository.update(&review).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Review not found"));
        }

        tracing::info!(review_id = id, "Review deleted");
        Ok(())
    }
}

fn ensure_rating(rating: i16) -> Result<(), AppError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::validation(vec![FieldError::new(
            "rating",
            "Rating must be between 1 and 5",
        )]));
    }
    Ok(())
}
