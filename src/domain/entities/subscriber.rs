//! Newsletter subscription entity.

use chrono::{DateTime, Utc};

/// A newsletter subscription, unique per email.
///
/// Unsubscribing deactivates the record; subscribing again reactivates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
    pub subscribed_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscriber {
    /// Marks the subscription active again.
    pub fn reactivate(&mut self, now: DateTime<Utc>) {
        self.is_active = true;
        self.subscribed_at = now;
        self.unsubscribed_at = None;
    }

    /// Marks the subscription inactive.
    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.unsubscribed_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_deactivate_then_reactivate() {
        let start = Utc::now() - Duration::days(10);
        let mut sub = Subscriber {
            id: 1,
            email: "reader@example.com".to_string(),
            is_active: true,
            subscribed_at: start,
            unsubscribed_at: None,
            created_at: start,
            updated_at: start,
        };

        let later = Utc::now();
        sub.deactivate(later);
        assert!(!sub.is_active);
        assert_eq!(sub.unsubscribed_at, Some(later));

        sub.reactivate(later);
        assert!(sub.is_active);
        assert!(sub.unsubscribed_at.is_none());
        assert_eq!(sub.subscribed_at, later);
    }
}
