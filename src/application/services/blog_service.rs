//! Blog post service.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::{Blog, NewBlog, UpdateBlog};
use crate::domain::repositories::BlogRepository;
use crate::error::{AppError, FieldError};
use crate::utils::slug::slugify;

use super::slug_rules::checked_slug;

/// Service for blog posts.
///
/// Drafts are only visible to the admin: public lookups of an unpublished
/// post behave as if it did not exist.
pub struct BlogService<R: BlogRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: BlogRepository + ?Sized> BlogService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists posts, most recently published first.
    pub async fn list(&self, include_drafts: bool) -> Result<Vec<Blog>, AppError> {
        self.repository.list(!include_drafts).await
    }

    /// Retrieves a post by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist, or is a
    /// draft and `include_drafts` is false.
    pub async fn get(&self, id: i64, include_drafts: bool) -> Result<Blog, AppError> {
        visible(self.repository.find_by_id(id).await?, include_drafts)
    }

    /// Retrieves a post by slug, with the same visibility rules as [`Self::get`].
    pub async fn get_by_slug(&self, slug: &str, include_drafts: bool) -> Result<Blog, AppError> {
        let slug = slug.trim().to_lowercase();
        visible(self.repository.find_by_slug(&slug).await?, include_drafts)
    }

    /// Creates a post.
    ///
    /// An empty slug is derived from the title. Publishing on creation stamps
    /// `published_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the slug is malformed or the title
    /// yields no slug.
    /// Returns [`AppError::Conflict`] if the slug is already in use.
    pub async fn create(&self, mut new_blog: NewBlog) -> Result<Blog, AppError> {
        new_blog.slug = if new_blog.slug.trim().is_empty() {
            derive_slug(&new_blog.title)?
        } else {
            checked_slug(&new_blog.slug)?
        };

        if new_blog.is_published && new_blog.published_at.is_none() {
            new_blog.published_at = Some(Utc::now());
        }

        let created = self.repository.create(new_blog).await?;
        tracing::info!(blog_id = created.id, slug = %created.slug, "Blog post created");
        Ok(created)
    }

    /// Applies a partial update. The slug only changes when one is supplied.
    pub async fn update(&self, id: i64, mut update: UpdateBlog) -> Result<Blog, AppError> {
        if let Some(slug) = update.slug.as_deref() {
            update.slug = Some(checked_slug(slug)?);
        }

        let mut blog = self.get(id, true).await?;
        update.apply(&mut blog, Utc::now());
        self.repository.update(&blog).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Blog not found"));
        }

        tracing::info!(blog_id = id, "Blog post deleted");
        Ok(())
    }
}

fn visible(blog: Option<Blog>, include_drafts: bool) -> Result<Blog, AppError> {
    blog.filter(|b| include_drafts || b.is_published)
        .ok_or_else(|| AppError::not_found("Blog not found"))
}

fn derive_slug(title: &str) -> Result<String, AppError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(AppError::validation(vec![FieldError::new(
            "title",
            "Title must contain letters or numbers to derive a slug",
        )]));
    }
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockBlogRepository;

    fn new_blog(title: &str, slug: &str, is_published: bool) -> NewBlog {
        NewBlog {
            title: title.to_string(),
            slug: slug.to_string(),
            excerpt: "A short look at what we are building.".to_string(),
            content: "Long form content".to_string(),
            cover_image: None,
            author: "Yggrasoft Labs".to_string(),
            tags: vec!["news".to_string()],
            is_published,
            published_at: None,
        }
    }

    fn stored(new_blog: NewBlog) -> Blog {
        let now = Utc::now();
        Blog {
            id: 1,
            title: new_blog.title,
            slug: new_blog.slug,
            excerpt: new_blog.excerpt,
            content: new_blog.content,
            cover_image: new_blog.cover_image,
            author: new_blog.author,
            tags: new_blog.tags,
            is_published: new_blog.is_published,
            published_at: new_blog.published_at,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_derives_slug_from_title() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_create()
            .withf(|b| b.slug == "hello-world-2025")
            .times(1)
            .returning(|b| Ok(stored(b)));

        let service = BlogService::new(Arc::new(mock_repo));

        let blog = service
            .create(new_blog("  Hello, World! 2025 ", "", false))
            .await
            .unwrap();

        assert_eq!(blog.slug, "hello-world-2025");
        assert!(blog.published_at.is_none());
    }

    #[tokio::test]
    async fn test_create_published_stamps_published_at() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_create()
            .withf(|b| b.published_at.is_some())
            .times(1)
            .returning(|b| Ok(stored(b)));

        let service = BlogService::new(Arc::new(mock_repo));

        let blog = service
            .create(new_blog("Launch", "launch", true))
            .await
            .unwrap();
        assert!(blog.published_at.is_some());
    }

    #[tokio::test]
    async fn test_create_rejects_symbol_only_title() {
        let mock_repo = MockBlogRepository::new();
        let service = BlogService::new(Arc::new(mock_repo));

        let err = service.create(new_blog("???", "", false)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_explicit_slug() {
        let mock_repo = MockBlogRepository::new();
        let service = BlogService::new(Arc::new(mock_repo));

        let err = service
            .create(new_blog("Launch", "launch day!", false))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_public_get_hides_drafts() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_find_by_slug()
            .times(2)
            .returning(|slug| Ok(Some(stored(new_blog("Draft", slug, false)))));

        let service = BlogService::new(Arc::new(mock_repo));

        let err = service.get_by_slug("draft", false).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));

        let blog = service.get_by_slug("draft", true).await.unwrap();
        assert_eq!(blog.slug, "draft");
    }

    #[tokio::test]
    async fn test_update_publishes_draft() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored(new_blog("Draft", "draft", false)))));
        mock_repo
            .expect_update()
            .withf(|b| b.is_published && b.published_at.is_some() && b.slug == "draft")
            .times(1)
            .returning(|b| Ok(b.clone()));

        let service = BlogService::new(Arc::new(mock_repo));

        let blog = service
            .update(
                1,
                UpdateBlog {
                    is_published: Some(true),
                    title: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(blog.title, "Renamed");
    }
}
