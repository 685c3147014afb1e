//! Blog post entity.

use chrono::{DateTime, Utc};

/// A blog post.
#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
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

/// Input data for a new blog post.
///
/// An empty `slug` is derived from the title by
/// [`crate::application::services::BlogService::create`].
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub author: String,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update for a blog post.
///
/// `cover_image: Some(None)` clears the cover image.
#[derive(Debug, Clone, Default)]
pub struct UpdateBlog {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<Option<String>>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
}

impl UpdateBlog {
    /// Applies the patch. `published_at` is stamped the first time the post is published.
    pub fn apply(self, blog: &mut Blog, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            blog.title = title;
        }
        if let Some(slug) = self.slug {
            blog.slug = slug;
        }
        if let Some(excerpt) = self.excerpt {
            blog.excerpt = excerpt;
        }
        if let Some(content) = self.content {
            blog.content = content;
        }
        if let Some(cover_image) = self.cover_image {
            blog.cover_image = cover_image;
        }
        if let Some(author) = self.author {
            blog.author = author;
        }
        if let Some(tags) = self.tags {
            blog.tags = tags;
        }
        if let Some(is_published) = self.is_published {
            blog.is_published = is_published;
        }
        if blog.is_published && blog.published_at.is_none() {
            blog.published_at = Some(now);
        }
    }
}
