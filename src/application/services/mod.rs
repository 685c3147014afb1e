//! Business logic services for the application layer.

pub mod auth_service;
pub mod blog_service;
pub mod contact_service;
pub mod domain_service;
pub mod newsletter_service;
pub mod notification_service;
pub mod project_service;
pub mod review_service;
pub mod settings_service;
mod slug_rules;

pub use auth_service::{AuthService, IssuedToken};
pub use blog_service::BlogService;
pub use contact_service::ContactService;
pub use domain_service::DomainService;
pub use newsletter_service::{NewsletterService, SubscribeOutcome};
pub use notification_service::{NotificationOutcome, NotificationService};
pub use project_service::ProjectService;
pub use review_service::ReviewService;
pub use settings_service::SettingsService;
