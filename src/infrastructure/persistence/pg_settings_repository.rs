//! PostgreSQL implementation of the settings repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewSettings, Settings, SocialMedia};
use crate::domain::repositories::SettingsRepository;
use crate::error::AppError;

/// The settings table holds at most this one row.
const SINGLETON_ID: i32 = 1;

#[derive(sqlx::FromRow)]
struct SettingsRow {
    site_name: String,
    tagline: String,
    mission_statement: String,
    contact_email: String,
    twitter: Option<String>,
    linkedin: Option<String>,
    github: Option<String>,
    facebook: Option<String>,
    updated_at: DateTime<Utc>,
}

impl From<SettingsRow> for Settings {
    fn from(r: SettingsRow) -> Self {
        Settings {
            site_name: r.site_name,
            tagline: r.tagline,
            mission_statement: r.mission_statement,
            contact_email: r.contact_email,
            social_media: SocialMedia {
                twitter: r.twitter,
                linkedin: r.linkedin,
                github: r.github,
                facebook: r.facebook,
            },
            updated_at: Some(r.updated_at),
        }
    }
}

pub struct PgSettingsRepository {
    pool: Arc<PgPool>,
}

impl PgSettingsRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn get(&self) -> Result<Option<Settings>, AppError> {
        let row: Option<SettingsRow> = sqlx::query_as(
            r#"
            SELECT site_name, tagline, mission_statement, contact_email,
                   twitter, linkedin, github, facebook, updated_at
            FROM settings
            WHERE id = $1
            "#,
        )
        .bind(SINGLETON_ID)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Settings::from))
    }

    async fn upsert(&self, settings: NewSettings) -> Result<Settings, AppError> {
        let row: SettingsRow = sqlx::query_as(
            r#"
            INSERT INTO settings (id, site_name, tagline, mission_statement, contact_email,
                                  twitter, linkedin, github, facebook)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                site_name         = EXCLUDED.site_name,
                tagline           = EXCLUDED.tagline,
                mission_statement = EXCLUDED.mission_statement,
                contact_email     = EXCLUDED.contact_email,
                twitter           = EXCLUDED.twitter,
                linkedin          = EXCLUDED.linkedin,
                github            = EXCLUDED.github,
                facebook          = EXCLUDED.facebook,
                updated_at        = NOW()
            RETURNING site_name, tagline, mission_statement, contact_email,
                      twitter, linkedin, github, facebook, updated_at
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(settings.site_name)
        .bind(settings.tagline)
        .bind(settings.mission_statement)
        .bind(settings.contact_email)
        .bind(settings.social_media.twitter)
        .bind(settings.social_media.linkedin)
        .bind(settings.social_media.github)
        .bind(settings.social_media.facebook)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
