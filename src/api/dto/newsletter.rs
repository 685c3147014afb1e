//! DTOs for newsletter subscription endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::trim;

use crate::domain::entities::Subscriber;

/// Request body for `POST /api/newsletter/subscribe` and `/unsubscribe`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewsletterRequest {
    #[validate(email(message = "Please provide a valid email address"))]
    #[serde(deserialize_with = "trim::string")]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberItem {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
    pub subscribed_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
}

impl From<Subscriber> for SubscriberItem {
    fn from(s: Subscriber) -> Self {
        Self {
            id: s.id,
            email: s.email,
            is_active: s.is_active,
            subscribed_at: s.subscribed_at,
            unsubscribed_at: s.unsubscribed_at,
        }
    }
}
