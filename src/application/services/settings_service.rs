//! Site settings service.

use crate::domain::entities::{NewSettings, Settings};
use crate::domain::repositories::SettingsRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Serves the settings singleton, falling back to built-in defaults.
pub struct SettingsService<R: SettingsRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: SettingsRepository + ?Sized> SettingsService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the stored settings, or [`Settings::fallback`] when none exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self) -> Result<Settings, AppError> {
        Ok(self
            .repository
            .get()
            .await?
            .unwrap_or_else(Settings::fallback))
    }

    /// Creates or replaces the settings document.
    pub async fn update(&self, settings: NewSettings) -> Result<Settings, AppError> {
        let saved = self.repository.upsert(settings).await?;
        tracing::info!(site_name = %saved.site_name, "Settings updated");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SocialMedia;
    use crate::domain::repositories::MockSettingsRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_get_falls_back_to_defaults() {
        let mut mock_repo = MockSettingsRepository::new();
        mock_repo.expect_get().times(1).returning(|| Ok(None));

        let service = SettingsService::new(Arc::new(mock_repo));

        let settings = service.get().await.unwrap();

        assert!(settings.is_fallback());
        assert_eq!(settings.site_name, "Yggrasoft Labs");
        assert_eq!(settings.tagline, "Connecting Realms of Innovation");
        assert_eq!(settings.contact_email, "contact@yggrasoft.com");
    }

    #[tokio::test]
    async fn test_get_returns_stored_document() {
        let mut mock_repo = MockSettingsRepository::new();
        mock_repo.expect_get().times(1).returning(|| {
            Ok(Some(Settings {
                site_name: "Yggrasoft".to_string(),
                tagline: "Branches everywhere".to_string(),
                mission_statement: "Grow".to_string(),
                contact_email: "hello@yggrasoft.com".to_string(),
                social_media: SocialMedia {
                    github: Some("https://github.com/yggrasoft".to_string()),
                    ..Default::default()
                },
                updated_at: Some(Utc::now()),
            }))
        });

        let service = SettingsService::new(Arc::new(mock_repo));

        let settings = service.get().await.unwrap();
        assert!(!settings.is_fallback());
        assert_eq!(settings.site_name, "Yggrasoft");
    }

    #[tokio::test]
    async fn test_get_propagates_store_failure() {
        let mut mock_repo = MockSettingsRepository::new();
        mock_repo
            .expect_get()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", "connection reset")));

        let service = SettingsService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.get().await.unwrap_err(),
            AppError::Internal { .. }
        ));
    }
}
