//! Client review (testimonial) entity.

use chrono::{DateTime, Utc};

/// A client review, optionally attached to a project.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
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

#[derive(Debug, Clone)]
pub struct NewReview {
    pub name: String,
    pub role: String,
    pub company: Option<String>,
    pub rating: i16,
    pub review: String,
    pub avatar: Option<String>,
    pub project_id: Option<i64>,
    pub order: i32,
    pub is_active: bool,
}

/// Partial update for a review.
#[derive(Debug, Clone, Default)]
pub struct UpdateReview {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<Option<String>>,
    pub rating: Option<i16>,
    pub review: Option<String>,
    pub avatar: Option<Option<String>>,
    pub project_id: Option<Option<i64>>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateReview {
    pub fn apply(self, review: &mut Review) {
        if let Some(name) = self.name {
            review.name = name;
        }
        if let Some(role) = self.role {
            review.role = role;
        }
        if let Some(company) = self.company {
            review.company = company;
        }
        if let Some(rating) = self.rating {
            review.rating = rating;
        }
        if let Some(text) = self.review {
            review.review = text;
        }
        if let Some(avatar) = self.avatar {
            review.avatar = avatar;
        }
        if let Some(project_id) = self.project_id {
            review.project_id = project_id;
        }
        if let Some(order) = self.order {
            review.order = order;
        }
        if let Some(is_active) = self.is_active {
            review.is_active = is_active;
        }
    }
}
