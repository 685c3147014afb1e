//! Repository trait for the settings singleton.

use crate::domain::entities::{NewSettings, Settings};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for the single site settings document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Returns the stored document, or `None` if it was never written.
    async fn get(&self) -> Result<Option<Settings>, AppError>;

    /// Creates or fully replaces the stored document.
    async fn upsert(&self, settings: NewSettings) -> Result<Settings, AppError>;
}
