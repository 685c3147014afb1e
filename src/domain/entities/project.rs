//! Portfolio project entity.

use chrono::{DateTime, Utc};

use super::Review;

/// A showcased project.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A project together with its active reviews, as served by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectWithReviews {
    pub project: Project,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub order: i32,
    pub is_active: bool,
}

/// Partial update for a project. Nested options clear the URL when `Some(None)`.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub image_url: Option<Option<String>>,
    pub github_url: Option<Option<String>>,
    pub live_url: Option<Option<String>>,
    pub featured: Option<bool>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateProject {
    pub fn apply(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(technologies) = self.technologies {
            project.technologies = technologies;
        }
        if let Some(image_url) = self.image_url {
            project.image_url = image_url;
        }
        if let Some(github_url) = self.github_url {
            project.github_url = github_url;
        }
        if let Some(live_url) = self.live_url {
            project.live_url = live_url;
        }
        if let Some(featured) = self.featured {
            project.featured = featured;
        }
        if let Some(order) = self.order {
            project.order = order;
        }
        if let Some(is_active) = self.is_active {
            project.is_active = is_active;
        }
    }
}
