//! Repository trait for blog posts.

use crate::domain::entities::{Blog, NewBlog};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for blog posts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBlogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_postgres.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Creates a new post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Blog>, AppError>;

    /// Lists posts, most recently published first. Drafts sort last.
    ///
    /// # Arguments
    ///
    /// - `published_only` - If true, drafts are excluded
    async fn list(&self, published_only: bool) -> Result<Vec<Blog>, AppError>;

    /// Persists every field of an already loaded post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post no longer exists.
    /// Returns [`AppError::Conflict`] if the new slug is already taken.
    async fn update(&self, blog: &Blog) -> Result<Blog, AppError>;

    /// Deletes a post. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
