//! PostgreSQL implementation of the review repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewReview, Review};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, name, role, company, rating, review, avatar, project_id, \
                       sort_order, is_active, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    name: String,
    role: String,
    company: Option<String>,
    rating: i16,
    review: String,
    avatar: Option<String>,
    project_id: Option<i64>,
    sort_order: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(r: ReviewRow) -> Self {
        Review {
            id: r.id,
            name: r.name,
            role: r.role,
            company: r.company,
            rating: r.rating,
            review: r.review,
            avatar: r.avatar,
            project_id: r.project_id,
            order: r.sort_order,
            is_active: r.is_active,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

pub struct PgReviewRepository {
    pool: Arc<PgPool>,
}

impl PgReviewRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn create(&self, r: NewReview) -> Result<Review, AppError> {
        let row: ReviewRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO reviews (name, role, company, rating, review, avatar, project_id,
                                 sort_order, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(r.name)
        .bind(r.role)
        .bind(r.company)
        .bind(r.rating)
        .bind(r.review)
        .bind(r.avatar)
        .bind(r.project_id)
        .bind(r.order)
        .bind(r.is_active)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, AppError> {
        let row: Option<ReviewRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM reviews WHERE id = $1"))
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Review::from))
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Review>, AppError> {
        let rows: Vec<ReviewRow> = sqlx::query_as(&format!(
            r#"
            SELECT {COLUMNS}
            FROM reviews
            WHERE ($1 = FALSE OR is_active = TRUE)
            ORDER BY sort_order, id
            "#
        ))
        .bind(only_active)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn list_active_for_projects(
        &self,
        project_ids: &[i64],
    ) -> Result<Vec<Review>, AppError> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<ReviewRow> = sqlx::query_as(&format!(
            r#"
            SELECT {COLUMNS}
            FROM reviews
            WHERE is_active = TRUE AND project_id = ANY($1)
            ORDER BY sort_order, id
            "#
        ))
        .bind(project_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn update(&self, r: &Review) -> Result<Review, AppError> {
        let row: Option<ReviewRow> = sqlx::query_as(&format!(
            r#"
            UPDATE reviews SET
                name       = $2,
                role       = $3,
                company    = $4,
                rating     = $5,
                review     = $6,
                avatar     = $7,
                project_id = $8,
                sort_order = $9,
                is_active  = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(r.id)
        .bind(&r.name)
        .bind(&r.role)
        .bind(&r.company)
        .bind(r.rating)
        .bind(&r.review)
        .bind(&r.avatar)
        .bind(r.project_id)
        .bind(r.order)
        .bind(r.is_active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Review::from)
            .ok_or_else(|| AppError::not_found("Review not found"))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
