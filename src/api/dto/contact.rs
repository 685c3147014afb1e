//! DTOs for the contact form and the admin inbox.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::trim;

use crate::domain::entities::{Contact, ContactStatus, NewContact};

/// Request body for `POST /api/contacts`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    #[serde(deserialize_with = "trim::string")]
    pub name: String,

    #[validate(email(message = "Please provide a valid email address"))]
    #[serde(deserialize_with = "trim::string")]
    pub email: String,

    #[serde(default, deserialize_with = "trim::option")]
    #[validate(length(max = 200, message = "Subject must be at most 200 characters"))]
    pub subject: Option<String>,

    #[validate(length(
        min = 10,
        max = 5000,
        message = "Message must be between 10 and 5000 characters"
    ))]
    #[serde(deserialize_with = "trim::string")]
    pub message: String,
}

impl From<ContactRequest> for NewContact {
    fn from(r: ContactRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            subject: r.subject.filter(|s| !s.is_empty()),
            message: r.message,
        }
    }
}

/// `data` of a successful submission. Only the id is echoed back.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactCreated {
    pub id: i64,
}

/// Stored submission as shown in the admin inbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactItem {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contact> for ContactItem {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            subject: c.subject,
            message: c.message,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Request body for `PATCH /api/contacts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateContactStatusRequest {
    pub status: ContactStatus,
}
