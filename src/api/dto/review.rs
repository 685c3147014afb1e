//! DTOs for client review endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::trim;

use crate::domain::entities::{NewReview, Review, UpdateReview};
use crate::utils::http_url::validate_http_url;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub company: Option<String>,
    pub rating: i16,
    pub review: String,
    pub avatar: Option<String>,
    pub project_id: Option<i64>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewItem {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            name: r.name,
            role: r.role,
            company: r.company,
            rating: r.rating,
            review: r.review,
            avatar: r.avatar,
            project_id: r.project_id,
            order: r.order,
            is_active: r.is_active,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Request body for `POST /api/reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    #[serde(deserialize_with = "trim::string")]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Role is required (max 100 characters)"))]
    #[serde(deserialize_with = "trim::string")]
    pub role: String,

    #[serde(default, deserialize_with = "trim::option")]
    #[validate(length(max = 100, message = "Company must be at most 100 characters"))]
    pub company: Option<String>,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i16,

    #[validate(length(min = 1, max = 2000, message = "Review is required (max 2000 characters)"))]
    #[serde(deserialize_with = "trim::string")]
    pub review: String,

    #[serde(default)]
    #[validate(custom(function = "validate_http_url"))]
    pub avatar: Option<String>,

    #[serde(default)]
    pub project_id: Option<i64>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Order must be zero or greater"))]
    pub order: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(r: CreateReviewRequest) -> Self {
        Self {
            name: r.name,
            role: r.role,
            company: r.company.filter(|c| !c.is_empty()),
            rating: r.rating,
            review: r.review,
            avatar: r.avatar,
            project_id: r.project_id,
            order: r.order,
            is_active: r.is_active,
        }
    }
}

/// Request body for `PUT /api/reviews/{id}`.
///
/// `company`, `avatar` and `projectId` accept `null` to clear the value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(min = 1, max = 100, message = "Role is required (max 100 characters)"))]
    pub role: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "trim::nullable"
    )]
    #[validate(length(max = 100, message = "Company must be at most 100 characters"))]
    pub company: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i16>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "trim::option")]
    #[validate(length(min = 1, max = 2000, message = "Review is required (max 2000 characters)"))]
    pub review: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[validate(custom(function = "validate_http_url"))]
    pub avatar: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub project_id: Option<Option<i64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, message = "Order must be zero or greater"))]
    pub order: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl From<UpdateReviewRequest> for UpdateReview {
    fn from(r: UpdateReviewRequest) -> Self {
        Self {
            name: r.name,
            role: r.role,
            company: r.company.map(|c| c.filter(|v| !v.is_empty())),
            rating: r.rating,
            review: r.review,
            avatar: r.avatar,
            project_id: r.project_id,
            order: r.order,
            is_active: r.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rating_out_of_range_rejected() {
        let request: CreateReviewRequest = serde_json::from_value(json!({
            "name": "Grace",
            "role": "CTO",
            "rating": 6,
            "review": "Excellent work"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rating"));
    }

    #[test]
    fn test_null_project_id_clears_link() {
        let request: UpdateReviewRequest =
            serde_json::from_value(json!({ "projectId": null })).unwrap();
        assert_eq!(UpdateReview::from(request).project_id, Some(None));
    }
}
