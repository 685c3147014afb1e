//! DTOs for the settings singleton.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::trim;

use crate::domain::entities::{NewSettings, Settings, SocialMedia};
use crate::utils::http_url::validate_http_url;

/// Social profile links. Unset links are omitted from responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SocialMediaDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_http_url"))]
    pub twitter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_http_url"))]
    pub linkedin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_http_url"))]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_http_url"))]
    pub facebook: Option<String>,
}

impl From<SocialMedia> for SocialMediaDto {
    fn from(s: SocialMedia) -> Self {
        Self {
            twitter: s.twitter,
            linkedin: s.linkedin,
            github: s.github,
            facebook: s.facebook,
        }
    }
}

impl From<SocialMediaDto> for SocialMedia {
    fn from(s: SocialMediaDto) -> Self {
        Self {
            twitter: s.twitter,
            linkedin: s.linkedin,
            github: s.github,
            facebook: s.facebook,
        }
    }
}

/// Settings as returned by `GET /api/settings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsItem {
    pub site_name: String,
    pub tagline: String,
    pub mission_statement: String,
    pub contact_email: String,
    pub social_media: SocialMediaDto,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Settings> for SettingsItem {
    fn from(s: Settings) -> Self {
        Self {
            site_name: s.site_name,
            tagline: s.tagline,
            mission_statement: s.mission_statement,
            contact_email: s.contact_email,
            social_media: s.social_media.into(),
            updated_at: s.updated_at,
        }
    }
}

/// Request body for `PUT /api/settings`. Replaces the whole document.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[validate(length(min = 1, max = 100, message = "Site name is required (max 100 characters)"))]
    #[serde(deserialize_with = "trim::string")]
    pub site_name: String,

    #[validate(length(min = 1, max = 200, message = "Tagline is required (max 200 characters)"))]
    #[serde(deserialize_with = "trim::string")]
    pub tagline: String,

    #[validate(length(
        min = 1,
        max = 1000,
        message = "Mission statement is required (max 1000 characters)"
    ))]
    #[serde(deserialize_with = "trim::string")]
    pub mission_statement: String,

    #[validate(email(message = "Contact email must be a valid email address"))]
    #[serde(deserialize_with = "trim::string")]
    pub contact_email: String,

    #[serde(default)]
    #[validate(nested)]
    pub social_media: SocialMediaDto,
}

impl From<UpdateSettingsRequest> for NewSettings {
    fn from(r: UpdateSettingsRequest) -> Self {
        Self {
            site_name: r.site_name,
            tagline: r.tagline,
            mission_statement: r.mission_statement,
            contact_email: r.contact_email.to_lowercase(),
            social_media: r.social_media.into(),
        }
    }
}
