//! The content types the admin tool manages, and the backend seam the
//! managers talk through.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::client::{ApiClient, ClientError};
use crate::api::dto::blog::{BlogItem, CreateBlogRequest, DEFAULT_AUTHOR};
use crate::api::dto::project::{CreateProjectRequest, ProjectItem};
use crate::api::dto::review::{CreateReviewRequest, ReviewItem};

/// A managed collection: how its records look, how its form looks, and
/// where it lives in the API.
///
/// The form is the create payload; edits send the same full form to
/// `PUT {PATH}/{id}`, so clearing an optional field sends `null`.
pub trait Resource: Send + Sync + 'static {
    type Item: DeserializeOwned + Clone + Send + Sync;
    type Form: Serialize + Clone + Send + Sync;

    const PATH: &'static str;
    const LABEL: &'static str;

    fn id(item: &Self::Item) -> i64;
    fn blank_form() -> Self::Form;
    fn form_from(item: &Self::Item) -> Self::Form;
    /// One-line description for list views.
    fn summary(item: &Self::Item) -> String;
}

/// Operations a manager needs from the server.
#[async_trait]
pub trait ResourceBackend<R: Resource>: Send + Sync {
    async fn list(&self) -> Result<Vec<R::Item>, ClientError>;
    async fn create(&self, form: &R::Form) -> Result<R::Item, ClientError>;
    async fn update(&self, id: i64, form: &R::Form) -> Result<R::Item, ClientError>;
    async fn delete(&self, id: i64) -> Result<(), ClientError>;
}

#[async_trait]
impl<R: Resource> ResourceBackend<R> for ApiClient {
    async fn list(&self) -> Result<Vec<R::Item>, ClientError> {
        ApiClient::list(self, R::PATH).await
    }

    async fn create(&self, form: &R::Form) -> Result<R::Item, ClientError> {
        ApiClient::create(self, R::PATH, form).await
    }

    async fn update(&self, id: i64, form: &R::Form) -> Result<R::Item, ClientError> {
        ApiClient::update(self, R::PATH, id, form).await
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        ApiClient::delete(self, R::PATH, id).await
    }
}

pub struct Blogs;

impl Resource for Blogs {
    type Item = BlogItem;
    type Form = CreateBlogRequest;

    const PATH: &'static str = "/api/blogs";
    const LABEL: &'static str = "blog post";

    fn id(item: &BlogItem) -> i64 {
        item.id
    }

    fn blank_form() -> CreateBlogRequest {
        CreateBlogRequest {
            title: String::new(),
            slug: None,
            excerpt: String::new(),
            content: String::new(),
            cover_image: None,
            author: Some(DEFAULT_AUTHOR.to_string()),
            tags: Vec::new(),
            is_published: false,
        }
    }

    fn form_from(item: &BlogItem) -> CreateBlogRequest {
        CreateBlogRequest {
            title: item.title.clone(),
            slug: Some(item.slug.clone()),
            excerpt: item.excerpt.clone(),
            content: item.content.clone(),
            cover_image: item.cover_image.clone(),
            author: Some(item.author.clone()),
            tags: item.tags.clone(),
            is_published: item.is_published,
        }
    }

    fn summary(item: &BlogItem) -> String {
        let state = if item.is_published { "published" } else { "draft" };
        format!("#{} {} [{}] /{}", item.id, item.title, state, item.slug)
    }
}

pub struct Projects;

impl Resource for Projects {
    type Item = ProjectItem;
    type Form = CreateProjectRequest;

    const PATH: &'static str = "/api/projects";
    const LABEL: &'static str = "project";

    fn id(item: &ProjectItem) -> i64 {
        item.id
    }

    fn blank_form() -> CreateProjectRequest {
        CreateProjectRequest {
            title: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            image_url: None,
            github_url: None,
            live_url: None,
            featured: false,
            order: 0,
            is_active: true,
        }
    }

    fn form_from(item: &ProjectItem) -> CreateProjectRequest {
        CreateProjectRequest {
            title: item.title.clone(),
            description: item.description.clone(),
            technologies: item.technologies.clone(),
            image_url: item.image_url.clone(),
            github_url: item.github_url.clone(),
            live_url: item.live_url.clone(),
            featured: item.featured,
            order: item.order,
            is_active: item.is_active,
        }
    }

    fn summary(item: &ProjectItem) -> String {
        let mut flags = Vec::new();
        if item.featured {
            flags.push("featured");
        }
        if !item.is_active {
            flags.push("inactive");
        }
        format!(
            "#{} {} (order {}, {} reviews){}",
            item.id,
            item.title,
            item.order,
            item.reviews.len(),
            if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            }
        )
    }
}

pub struct Reviews;

impl Resource for Reviews {
    type Item = ReviewItem;
    type Form = CreateReviewRequest;

    const PATH: &'static str = "/api/reviews";
    const LABEL: &'static str = "review";

    fn id(item: &ReviewItem) -> i64 {
        item.id
    }

    fn blank_form() -> CreateReviewRequest {
        CreateReviewRequest {
            name: String::new(),
            role: String::new(),
            company: None,
            rating: 5,
            review: String::new(),
            avatar: None,
            project_id: None,
            order: 0,
            is_active: true,
        }
    }

    fn form_from(item: &ReviewItem) -> CreateReviewRequest {
        CreateReviewRequest {
            name: item.name.clone(),
            role: item.role.clone(),
            company: item.company.clone(),
            rating: item.rating,
            review: item.review.clone(),
            avatar: item.avatar.clone(),
            project_id: item.project_id,
            order: item.order,
            is_active: item.is_active,
        }
    }

    fn summary(item: &ReviewItem) -> String {
        let project = item
            .project_id
            .map(|id| format!(", project #{id}"))
            .unwrap_or_default();
        format!(
            "#{} {} ({}) {}/5{}{}",
            item.id,
            item.name,
            item.role,
            item.rating,
            project,
            if item.is_active { "" } else { " [inactive]" }
        )
    }
}
