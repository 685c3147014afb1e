//! Domain ("realm") entity shown in the public domains grid.

use chrono::{DateTime, Utc};

/// A business domain the company operates in.
///
/// Public listings only include active domains, ordered by `order`.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
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

/// Input data for creating a new domain.
#[derive(Debug, Clone)]
pub struct NewDomain {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub has_active_projects: bool,
    pub order: i32,
    pub is_active: bool,
}

/// Partial update for a domain. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateDomain {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub has_active_projects: Option<bool>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateDomain {
    /// Applies the provided fields onto an existing domain.
    pub fn apply(self, domain: &mut Domain) {
        if let Some(name) = self.name {
            domain.name = name;
        }
        if let Some(slug) = self.slug {
            domain.slug = slug;
        }
        if let Some(description) = self.description {
            domain.description = description;
        }
        if let Some(icon) = self.icon {
            domain.icon = icon;
        }
        if let Some(flag) = self.has_active_projects {
            domain.has_active_projects = flag;
        }
        if let Some(order) = self.order {
            domain.order = order;
        }
        if let Some(is_active) = self.is_active {
            domain.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Domain {
        let now = Utc::now();
        Domain {
            id: 1,
            name: "Technology".to_string(),
            slug: "technology".to_string(),
            description: "x".repeat(60),
            icon: "FaLaptopCode".to_string(),
            has_active_projects: true,
            order: 1,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_update_domain_partial() {
        let mut domain = sample();
        UpdateDomain {
            order: Some(7),
            is_active: Some(false),
            ..Default::default()
        }
        .apply(&mut domain);

        assert_eq!(domain.order, 7);
        assert!(!domain.is_active);
        assert_eq!(domain.slug, "technology");
    }

    #[test]
    fn test_update_domain_default_is_noop() {
        let mut domain = sample();
        let before = domain.clone();
        UpdateDomain::default().apply(&mut domain);
        assert_eq!(domain, before);
    }
}
