//! PostgreSQL implementation of the blog repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Blog, NewBlog};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, title, slug, excerpt, content, cover_image, author, tags, \
                       is_published, published_at, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    cover_image: Option<String>,
    author: String,
    tags: Vec<String>,
    is_published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BlogRow> for Blog {
    fn from(r: BlogRow) -> Self {
        Blog {
            id: r.id,
            title: r.title,
            slug: r.slug,
            excerpt: r.excerpt,
            content: r.content,
            cover_image: r.cover_image,
            author: r.author,
            tags: r.tags,
            is_published: r.is_published,
            published_at: r.published_at,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for blog posts.
pub struct PgBlogRepository {
    pool: Arc<PgPool>,
}

impl PgBlogRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        let row: BlogRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO blogs (title, slug, excerpt, content, cover_image, author, tags,
                               is_published, published_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(new_blog.title)
        .bind(new_blog.slug)
        .bind(new_blog.excerpt)
        .bind(new_blog.content)
        .bind(new_blog.cover_image)
        .bind(new_blog.author)
        .bind(new_blog.tags)
        .bind(new_blog.is_published)
        .bind(new_blog.published_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        let row: Option<BlogRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM blogs WHERE id = $1"))
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Blog::from))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Blog>, AppError> {
        let row: Option<BlogRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM blogs WHERE slug = $1"))
                .bind(slug)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Blog::from))
    }

    async fn list(&self, published_only: bool) -> Result<Vec<Blog>, AppError> {
        let rows: Vec<BlogRow> = sqlx::query_as(&format!(
            r#"
            SELECT {COLUMNS}
            FROM blogs
            WHERE ($1 = FALSE OR is_published = TRUE)
            ORDER BY published_at DESC NULLS LAST, id DESC
            "#
        ))
        .bind(published_only)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn update(&self, blog: &Blog) -> Result<Blog, AppError> {
        let row: Option<BlogRow> = sqlx::query_as(&format!(
            r#"
            UPDATE blogs SET
                title        = $2,
                slug         = $3,
                excerpt      = $4,
                content      = $5,
                cover_image  = $6,
                author       = $7,
                tags         = $8,
                is_published = $9,
                published_at = $10,
                updated_at   = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(blog.id)
        .bind(&blog.title)
        .bind(&blog.slug)
        .bind(&blog.excerpt)
        .bind(&blog.content)
        .bind(&blog.cover_image)
        .bind(&blog.author)
        .bind(&blog.tags)
        .bind(blog.is_published)
        .bind(blog.published_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Blog::from)
            .ok_or_else(|| AppError::not_found("Blog not found"))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
