//! Portfolio project service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{NewProject, Project, ProjectWithReviews, Review, UpdateProject};
use crate::domain::repositories::{ProjectRepository, ReviewRepository};
use crate::error::AppError;

/// Service for projects, embedding each project's active reviews.
pub struct ProjectService<P, R>
where
    P: ProjectRepository + ?Sized,
    R: ReviewRepository + ?Sized,
{
    projects: Arc<P>,
    reviews: Arc<R>,
}

impl<P, R> ProjectService<P, R>
where
    P: ProjectRepository + ?Sized,
    R: ReviewRepository + ?Sized,
{
    pub fn new(projects: Arc<P>, reviews: Arc<R>) -> Self {
        Self { projects, reviews }
    }

    /// Lists projects ordered by `order`, each with its active reviews.
    ///
    /// Reviews are loaded with one query for the whole page.
    pub async fn list(&self, include_inactive: bool) -> Result<Vec<ProjectWithReviews>, AppError> {
        let projects = self.projects.list(!include_inactive).await?;
        self.attach_reviews(projects).await
    }

    /// Retrieves a project with its active reviews.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the project does not exist.
    pub async fn get(&self, id: i64) -> Result<ProjectWithReviews, AppError> {
        let project = self.find(id).await?;
        let reviews = self.reviews.list_active_for_projects(&[id]).await?;
        Ok(ProjectWithReviews { project, reviews })
    }

    pub async fn create(&self, new_project: NewProject) -> Result<ProjectWithReviews, AppError> {
        let project = self.projects.create(new_project).await?;
        tracing::info!(project_id = project.id, "Project created");

        Ok(ProjectWithReviews {
            project,
            reviews: Vec::new(),
        })
    }

    pub async fn update(
        &self,
        id: i64,
        update: UpdateProject,
    ) -> Result<ProjectWithReviews, AppError> {
        let mut project = self.find(id).await?;
        update.apply(&mut project);
        let project = self.projects.update(&project).await?;

        let reviews = self.reviews.list_active_for_projects(&[id]).await?;
        Ok(ProjectWithReviews { project, reviews })
    }

    /// Deletes a project. Its reviews are kept.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.projects.delete(id).await? {
            return Err(AppError::not_found("Project not found"));
        }

        tracing::info!(project_id = id, "Project deleted");
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Project, AppError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))
    }

    async fn attach_reviews(
        &self,
        projects: Vec<Project>,
    ) -> Result<Vec<ProjectWithReviews>, AppError> {
        let ids: Vec<i64> = projects.iter().map(|p| p.id).collect();
        let mut by_project: HashMap<i64, Vec<Review>> = HashMap::new();

        for review in self.reviews.list_active_for_projects(&ids).await? {
            if let Some(project_id) = review.project_id {
                by_project.entry(project_id).or_default().push(review);
            }
        }

        Ok(projects
            .into_iter()
            .map(|project| {
                let reviews = by_project.remove(&project.id).unwrap_or_default();
                ProjectWithReviews { project, reviews }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockProjectRepository, MockReviewRepository};
    use chrono::Utc;

    fn project(id: i64) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: "Something we built".to_string(),
            technologies: vec!["Rust".to_string()],
            image_url: None,
            github_url: None,
            live_url: None,
            featured: false,
            order: id as i32,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn review(id: i64, project_id: Option<i64>) -> Review {
        Review {
            id,
            name: "Astrid".to_string(),
            role: "CTO".to_string(),
            company: None,
            rating: 5,
            review: "Great work".to_string(),
            avatar: None,
            project_id,
            order: 0,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_list_groups_reviews_by_project() {
        let mut projects = MockProjectRepository::new();
        let mut reviews = MockReviewRepository::new();

        projects
            .expect_list()
            .withf(|only_active| *only_active)
            .times(1)
            .returning(|_| Ok(vec![project(1), project(2)]));
        reviews
            .expect_list_active_for_projects()
            .withf(|ids| ids == [1, 2])
            .times(1)
            .returning(|_| Ok(vec![review(10, Some(2)), review(11, Some(2))]));

        let service = ProjectService::new(Arc::new(projects), Arc::new(reviews));

        let list = service.list(false).await.unwrap();

        assert_eq!(list.len(), 2);
        assert!(list[0].reviews.is_empty());
        assert_eq!(list[1].reviews.len(), 2);
    }

    #[tokio::test]
    async fn test_get_missing_project() {
        let mut projects = MockProjectRepository::new();
        let reviews = MockReviewRepository::new();

        projects.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = ProjectService::new(Arc::new(projects), Arc::new(reviews));

        assert!(matches!(
            service.get(3).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_update_clears_live_url() {
        let mut projects = MockProjectRepository::new();
        let mut reviews = MockReviewRepository::new();

        projects.expect_find_by_id().times(1).returning(|id| {
            let mut p = project(id);
            p.live_url = Some("https://demo.yggrasoft.com".to_string());
            Ok(Some(p))
        });
        projects
            .expect_update()
            .withf(|p| p.live_url.is_none() && p.featured)
            .times(1)
            .returning(|p| Ok(p.clone()));
        reviews
            .expect_list_active_for_projects()
            .times(1)
            .returning(|_| Ok(vec![review(10, Some(1))]));

        let service = ProjectService::new(Arc::new(projects), Arc::new(reviews));

        let updated = service
            .update(
                1,
                UpdateProject {
                    live_url: Some(None),
                    featured: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.reviews.len(), 1);
    }
}
