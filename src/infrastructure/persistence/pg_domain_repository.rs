//! PostgreSQL implementation of domain repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Domain, NewDomain};
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;

const COLUMNS: &str = "id, name, slug, description, icon, has_active_projects, sort_order, \
                       is_active, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct DomainRow {
    id: i64,
    name: String,
    slug: String,
    description: String,
    icon: String,
    has_active_projects: bool,
    sort_order: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DomainRow> for Domain {
    fn from(r: DomainRow) -> Self {
        Domain {
            id: r.id,
            name: r.name,
            slug: r.slug,
            description: r.description,
            icon: r.icon,
            has_active_projects: r.has_active_projects,
            order: r.sort_order,
            is_active: r.is_active,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for the domains grid.
pub struct PgDomainRepository {
    pool: Arc<PgPool>,
}

impl PgDomainRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

async fn insert<'e, E>(executor: E, d: NewDomain) -> Result<Domain, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    let row: DomainRow = sqlx::query_as(&format!(
        r#"
        INSERT INTO domains (name, slug, description, icon, has_active_projects, sort_order, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(d.name)
    .bind(d.slug)
    .bind(d.description)
    .bind(d.icon)
    .bind(d.has_active_projects)
    .bind(d.order)
    .bind(d.is_active)
    .fetch_one(executor)
    .await?;

    Ok(row.into())
}

#[async_trait]
impl DomainRepository for PgDomainRepository {
    async fn create(&self, new_domain: NewDomain) -> Result<Domain, AppError> {
        Ok(insert(self.pool.as_ref(), new_domain).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Domain>, AppError> {
        let row: Option<DomainRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM domains WHERE id = $1"))
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Domain::from))
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Domain>, AppError> {
        let rows: Vec<DomainRow> = sqlx::query_as(&format!(
            r#"
            SELECT {COLUMNS}
            FROM domains
            WHERE ($1 = FALSE OR is_active = TRUE)
            ORDER BY sort_order, id
            "#
        ))
        .bind(only_active)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Domain::from).collect())
    }

    async fn update(&self, domain: &Domain) -> Result<Domain, AppError> {
        let row: Option<DomainRow> = sqlx::query_as(&format!(
            r#"
            UPDATE domains SET
                name                = $2,
                slug                = $3,
                description         = $4,
                icon                = $5,
                has_active_projects = $6,
                sort_order          = $7,
                is_active           = $8,
                updated_at          = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(domain.id)
        .bind(&domain.name)
        .bind(&domain.slug)
        .bind(&domain.description)
        .bind(&domain.icon)
        .bind(domain.has_active_projects)
        .bind(domain.order)
        .bind(domain.is_active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Domain::from)
            .ok_or_else(|| AppError::not_found("Domain not found"))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM domains WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn replace_all(&self, domains: Vec<NewDomain>) -> Result<Vec<Domain>, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM domains").execute(&mut *tx).await?;

        let mut created = Vec::with_capacity(domains.len());
        for domain in domains {
            created.push(insert(&mut *tx, domain).await?);
        }

        tx.commit().await?;
        Ok(created)
    }
}
