//! DTOs for portfolio project endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::trim;

use super::review::ReviewItem;
use crate::domain::entities::{NewProject, ProjectWithReviews, UpdateProject};
use crate::utils::http_url::validate_http_url;

fn default_true() -> bool {
    true
}

/// Project with its active reviews embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
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
    pub reviews: Vec<ReviewItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProjectWithReviews> for ProjectItem {
    fn from(p: ProjectWithReviews) -> Self {
        let ProjectWithReviews { project, reviews } = p;
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
            technologies: project.technologies,
            image_url: project.image_url,
            github_url: project.github_url,
            live_url: project.live_url,
            featured: project.featured,
            order: project.order,
            is_active: project.is_active,
            reviews: reviews.into_iter().map(ReviewItem::from).collect(),
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// Request body for `POST /api/projects`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required (max 200 characters)"))]
    #[serde(deserialize_with = "trim::string")]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Description is required"))]
    #[serde(deserialize_with = "trim::string")]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 30, message = "At most 30 technologies are allowed"))]
    pub technologies: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_http_url"))]
    pub image_url: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_http_url"))]
    pub github_url: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_http_url"))]
    pub live_url: Option<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    #[validate(range(min = 0, message = "Order must be zero or greater"))]
    pub order: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<CreateProjectRequest> for NewProject {
    fn from(r: CreateProjectRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            technologies: clean_list(r.technologies),
            image_url: r.image_url,
            github_url: r.github_url,
            live_url: r.live_url,
            featured: r.featured,
            order: r.order,
            is_active: r.is_active,
        }
    }
}

/// Request body for `PUT /api/projects/{id}`.
///
/// URL fields accept `null` to remove the link.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(min = 1, max = 200, message = "Title is required (max 200 characters)"))]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(min = 1, max = 5000, message = "Description is required"))]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 30, message = "At most 30 technologies are allowed"))]
    pub technologies: Option<Vec<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[validate(custom(function = "validate_http_url"))]
    pub image_url: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[validate(custom(function = "validate_http_url"))]
    pub github_url: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[validate(custom(function = "validate_http_url"))]
    pub live_url: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, message = "Order must be zero or greater"))]
    pub order: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl From<UpdateProjectRequest> for UpdateProject {
    fn from(r: UpdateProjectRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            technologies: r.technologies.map(clean_list),
            image_url: r.image_url,
            github_url: r.github_url,
            live_url: r.live_url,
            featured: r.featured,
            order: r.order,
            is_active: r.is_active,
        }
    }
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
