//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::DomainService`] - Domains grid management and slug rules
//! - [`services::SettingsService`] - Settings singleton with built-in defaults
//! - [`services::ContactService`] - Contact submissions and the admin inbox
//! - [`services::NotificationService`] - Best-effort contact emails
//! - [`services::NewsletterService`] - Subscribe, resubscribe and unsubscribe
//! - [`services::BlogService`] - Blog posts, slug derivation and publishing
//! - [`services::ProjectService`] - Projects with embedded reviews
//! - [`services::ReviewService`] - Client reviews
//! - [`services::AuthService`] - Admin login and bearer token verification

pub mod services;
