//! Site-wide settings singleton.

use chrono::{DateTime, Utc};

/// Links to the company's social profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialMedia {
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
}

/// The single settings document.
///
/// `updated_at` is `None` for the built-in defaults, which are never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub site_name: String,
    pub tagline: String,
    pub mission_statement: String,
    pub contact_email: String,
    pub social_media: SocialMedia,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Settings {
    /// Built-in settings served while no settings document exists.
    pub fn fallback() -> Self {
        Self {
            site_name: "Yggrasoft Labs".to_string(),
            tagline: "Connecting Realms of Innovation".to_string(),
            mission_statement:
                "Developing, funding, and deploying real-world solutions across multiple domains."
                    .to_string(),
            contact_email: "contact@yggrasoft.com".to_string(),
            social_media: SocialMedia::default(),
            updated_at: None,
        }
    }

    /// Returns true when these are the built-in defaults rather than a stored document.
    pub fn is_fallback(&self) -> bool {
        self.updated_at.is_none()
    }
}

/// Full replacement of the settings document.
#[derive(Debug, Clone)]
pub struct NewSettings {
    pub site_name: String,
    pub tagline: String,
    pub mission_statement: String,
    pub contact_email: String,
    pub social_media: SocialMedia,
}
