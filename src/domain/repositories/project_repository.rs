//! Repository trait for portfolio projects.

use crate::domain::entities::{NewProject, Project};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for projects.
///
/// Reviews are not loaded here; the service joins them through
/// [`crate::domain::repositories::ReviewRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, new_project: NewProject) -> Result<Project, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError>;

    /// Lists projects ordered by `order`, then `id`.
    async fn list(&self, only_active: bool) -> Result<Vec<Project>, AppError>;

    /// Persists every field of an already loaded project.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the project no longer exists.
    async fn update(&self, project: &Project) -> Result<Project, AppError>;

    /// Deletes a project. Returns `Ok(false)` if it did not exist.
    ///
    /// Reviews pointing at the project keep their `project_id`.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
