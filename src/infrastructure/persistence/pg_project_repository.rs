//! PostgreSQL implementation of the project repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewProject, Project};
use crate::domain::repositories::ProjectRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, title, description, technologies, image_url, github_url, live_url, \
                       featured, sort_order, is_active, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    title: String,
    description: String,
    technologies: Vec<String>,
    image_url: Option<String>,
    github_url: Option<String>,
    live_url: Option<String>,
    featured: bool,
    sort_order: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(r: ProjectRow) -> Self {
        Project {
            id: r.id,
            title: r.title,
            description: r.description,
            technologies: r.technologies,
            image_url: r.image_url,
            github_url: r.github_url,
            live_url: r.live_url,
            featured: r.featured,
            order: r.sort_order,
            is_active: r.is_active,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

pub struct PgProjectRepository {
    pool: Arc<PgPool>,
}

impl PgProjectRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn create(&self, p: NewProject) -> Result<Project, AppError> {
        let row: ProjectRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO projects (title, description, technologies, image_url, github_url,
                                  live_url, featured, sort_order, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(p.title)
        .bind(p.description)
        .bind(p.technologies)
        .bind(p.image_url)
        .bind(p.github_url)
        .bind(p.live_url)
        .bind(p.featured)
        .bind(p.order)
        .bind(p.is_active)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError> {
        let row: Option<ProjectRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM projects WHERE id = $1"))
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Project::from))
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Project>, AppError> {
        let rows: Vec<ProjectRow> = sqlx::query_as(&format!(
            r#"
            SELECT {COLUMNS}
            FROM projects
            WHERE ($1 = FALSE OR is_active = TRUE)
            ORDER BY sort_order, id
            "#
        ))
        .bind(only_active)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn update(&self, p: &Project) -> Result<Project, AppError> {
        let row: Option<ProjectRow> = sqlx::query_as(&format!(
            r#"
            UPDATE projects SET
                title        = $2,
                description  = $3,
                technologies = $4,
                image_url    = $5,
                github_url   = $6,
                live_url     = $7,
                featured     = $8,
                sort_order   = $9,
                is_active    = $10,
                updated_at   = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(p.id)
        .bind(&p.title)
        .bind(&p.description)
        .bind(&p.technologies)
        .bind(&p.image_url)
        .bind(&p.github_url)
        .bind(&p.live_url)
        .bind(p.featured)
        .bind(p.order)
        .bind(p.is_active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Project::from)
            .ok_or_else(|| AppError::not_found("Project not found"))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
