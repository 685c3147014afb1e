//! DTOs for blog endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::trim;

use crate::domain::entities::{Blog, NewBlog, UpdateBlog};
use crate::utils::http_url::validate_http_url;

/// Author used when a post is created without one.
pub const DEFAULT_AUTHOR: &str = "Yggrasoft Labs";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogItem {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub author: String,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Blog> for BlogItem {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id,
            title: b.title,
            slug: b.slug,
            excerpt: b.excerpt,
            content: b.content,
            cover_image: b.cover_image,
            author: b.author,
            tags: b.tags,
            is_published: b.is_published,
            published_at: b.published_at,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Request body for `POST /api/blogs`.
///
/// When `slug` is absent it is derived from the title.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required (max 200 characters)"))]
    #[serde(deserialize_with = "trim::string")]
    pub title: String,

    #[serde(default, deserialize_with = "trim::option")]
    #[validate(length(max = 200, message = "Slug must be at most 200 characters"))]
    pub slug: Option<String>,

    #[validate(length(min = 1, max = 500, message = "Excerpt is required (max 500 characters)"))]
    #[serde(deserialize_with = "trim::string")]
    pub excerpt: String,

    #[validate(length(min = 1, message = "Content is required"))]
    #[serde(deserialize_with = "trim::string")]
    pub content: String,

    #[serde(default)]
    #[validate(custom(function = "validate_http_url"))]
    pub cover_image: Option<String>,

    #[serde(default, deserialize_with = "trim::option")]
    #[validate(length(min = 1, max = 100, message = "Author must be between 1 and 100 characters"))]
    pub author: Option<String>,

    #[serde(default)]
    #[validate(length(max = 20, message = "At most 20 tags are allowed"))]
    pub tags: Vec<String>,

    #[serde(default)]
    pub is_published: bool,
}

impl From<CreateBlogRequest> for NewBlog {
    fn from(r: CreateBlogRequest) -> Self {
        Self {
            title: r.title,
            slug: r.slug.unwrap_or_default(),
            excerpt: r.excerpt,
            content: r.content,
            cover_image: r.cover_image,
            author: r.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            tags: clean_tags(r.tags),
            is_published: r.is_published,
            published_at: None,
        }
    }
}

/// Request body for `PUT /api/blogs/{id}`.
///
/// `coverImage: null` removes the cover image; an absent field leaves it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(min = 1, max = 200, message = "Title is required (max 200 characters)"))]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(min = 1, max = 200, message = "Slug must be at most 200 characters"))]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(min = 1, max = 500, message = "Excerpt is required (max 500 characters)"))]
    pub excerpt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[validate(custom(function = "validate_http_url"))]
    pub cover_image: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(min = 1, max = 100, message = "Author must be between 1 and 100 characters"))]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 20, message = "At most 20 tags are allowed"))]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

impl From<UpdateBlogRequest> for UpdateBlog {
    fn from(r: UpdateBlogRequest) -> Self {
        Self {
            title: r.title,
            slug: r.slug,
            excerpt: r.excerpt,
            content: r.content,
            cover_image: r.cover_image,
            author: r.author,
            tags: r.tags.map(clean_tags),
            is_published: r.is_published,
        }
    }
}

/// Trims tags and drops empty ones.
fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_defaults_author_and_slug() {
        let request: CreateBlogRequest = serde_json::from_value(json!({
            "title": "Hello World",
            "excerpt": "A first post",
            "content": "Body",
            "tags": [" rust ", ""]
        }))
        .unwrap();
        assert!(request.validate().is_ok());

        let new_blog = NewBlog::from(request);
        assert_eq!(new_blog.author, DEFAULT_AUTHOR);
        assert_eq!(new_blog.slug, "");
        assert_eq!(new_blog.tags, vec!["rust".to_string()]);
        assert!(!new_blog.is_published);
    }

    #[test]
    fn test_update_distinguishes_null_from_absent() {
        let cleared: UpdateBlogRequest =
            serde_json::from_value(json!({ "coverImage": null })).unwrap();
        assert_eq!(cleared.cover_image, Some(None));

        let untouched: UpdateBlogRequest =
            serde_json::from_value(json!({ "title": "New" })).unwrap();
        assert_eq!(untouched.cover_image, None);
    }

    #[test]
    fn test_cover_image_must_be_http() {
        let request: UpdateBlogRequest =
            serde_json::from_value(json!({ "coverImage": "javascript:alert(1)" })).unwrap();
        assert!(request.validate().is_err());
    }
}
