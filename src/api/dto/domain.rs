//! DTOs for domain ("realm") endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::trim;

use crate::domain::entities::{Domain, NewDomain, UpdateDomain};

fn default_true() -> bool {
    true
}

/// Domain as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainItem {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub has_active_projects: bool,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Domain> for DomainItem {
    fn from(d: Domain) -> Self {
        Self {
            id: d.id,
            name: d.name,
            slug: d.slug,
            description: d.description,
            icon: d.icon,
            has_active_projects: d.has_active_projects,
            order: d.order,
            is_active: d.is_active,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// Request body for `POST /api/domains`.
///
/// The slug format is checked after trimming and lower-casing, in
/// [`crate::application::services::DomainService`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomainRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    #[serde(deserialize_with = "trim::string")]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Slug is required (max 100 characters)"))]
    #[serde(deserialize_with = "trim::string")]
    pub slug: String,

    #[validate(length(
        min = 50,
        max = 500,
        message = "Description must be between 50 and 500 characters"
    ))]
    #[serde(deserialize_with = "trim::string")]
    pub description: String,

    #[validate(length(min = 1, max = 100, message = "Icon is required"))]
    #[serde(deserialize_with = "trim::string")]
    pub icon: String,

    #[serde(default)]
    pub has_active_projects: bool,

    #[serde(default)]
    #[validate(range(min = 0, message = "Order must be zero or greater"))]
    pub order: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<CreateDomainRequest> for NewDomain {
    fn from(r: CreateDomainRequest) -> Self {
        Self {
            name: r.name,
            slug: r.slug,
            description: r.description,
            icon: r.icon,
            has_active_projects: r.has_active_projects,
            order: r.order,
            is_active: r.is_active,
        }
    }
}

/// Request body for `PUT /api/domains/{id}`. Absent fields are unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDomainRequest {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(min = 1, max = 100, message = "Slug is required (max 100 characters)"))]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(
        min = 50,
        max = 500,
        message = "Description must be between 50 and 500 characters"
    ))]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(min = 1, max = 100, message = "Icon is required"))]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_active_projects: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, message = "Order must be zero or greater"))]
    pub order: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl From<UpdateDomainRequest> for UpdateDomain {
    fn from(r: UpdateDomainRequest) -> Self {
        Self {
            name: r.name,
            slug: r.slug,
            description: r.description,
            icon: r.icon,
            has_active_projects: r.has_active_projects,
            order: r.order,
            is_active: r.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateDomainRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Technology",
            "slug": "technology",
            "description": "Software, infrastructure and research across the technology realm.",
            "icon": "FaLaptopCode"
        }))
        .unwrap()
    }

    #[test]
    fn test_create_defaults() {
        let request = valid_request();
        assert!(request.validate().is_ok());
        assert!(request.is_active);
        assert!(!request.has_active_projects);
        assert_eq!(request.order, 0);
    }

    #[test]
    fn test_short_description_rejected() {
        let mut request = valid_request();
        request.description = "Too short".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn test_negative_order_rejected() {
        let mut request = valid_request();
        request.order = -1;
        assert!(request.validate().is_err());
    }
}
