//! PostgreSQL implementation of the newsletter repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Subscriber;
use crate::domain::repositories::NewsletterRepository;
use crate::error::AppError;

const COLUMNS: &str =
    "id, email, is_active, subscribed_at, unsubscribed_at, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct SubscriberRow {
    id: i64,
    email: String,
    is_active: bool,
    subscribed_at: DateTime<Utc>,
    unsubscribed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SubscriberRow> for Subscriber {
    fn from(r: SubscriberRow) -> Self {
        Subscriber {
            id: r.id,
            email: r.email,
            is_active: r.is_active,
            subscribed_at: r.subscribed_at,
            unsubscribed_at: r.unsubscribed_at,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for newsletter subscribers.
///
/// The unique index on `email` turns a concurrent double insert into
/// [`AppError::Conflict`].
pub struct PgNewsletterRepository {
    pool: Arc<PgPool>,
}

impl PgNewsletterRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsletterRepository for PgNewsletterRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>, AppError> {
        let row: Option<SubscriberRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM newsletter_subscribers WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Subscriber::from))
    }

    async fn create(&self, email: &str) -> Result<Subscriber, AppError> {
        let row: SubscriberRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO newsletter_subscribers (email, is_active, subscribed_at)
            VALUES ($1, TRUE, NOW())
            RETURNING {COLUMNS}
            "#
        ))
        .bind(email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, subscriber: &Subscriber) -> Result<Subscriber, AppError> {
        let row: Option<SubscriberRow> = sqlx::query_as(&format!(
            r#"
            UPDATE newsletter_subscribers SET
                is_active       = $2,
                subscribed_at   = $3,
                unsubscribed_at = $4,
                updated_at      = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(subscriber.id)
        .bind(subscriber.is_active)
        .bind(subscriber.subscribed_at)
        .bind(subscriber.unsubscribed_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Subscriber::from)
            .ok_or_else(|| AppError::not_found("Subscriber not found"))
    }

    async fn list(&self) -> Result<Vec<Subscriber>, AppError> {
        let rows: Vec<SubscriberRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM newsletter_subscribers ORDER BY subscribed_at DESC, id DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Subscriber::from).collect())
    }
}
