//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`DomainRepository`] - Domains grid content
//! - [`SettingsRepository`] - Site settings singleton
//! - [`ContactRepository`] - Contact-form inbox
//! - [`NewsletterRepository`] - Newsletter subscriptions
//! - [`BlogRepository`] - Blog posts
//! - [`ProjectRepository`] - Portfolio projects
//! - [`ReviewRepository`] - Client reviews
//!
//! # Testing
//!
//! See integration tests in `tests/repository_postgres.rs` for usage examples.

pub mod blog_repository;
pub mod contact_repository;
pub mod domain_repository;
pub mod newsletter_repository;
pub mod project_repository;
pub mod review_repository;
pub mod settings_repository;

pub use blog_repository::BlogRepository;
pub use contact_repository::ContactRepository;
pub use domain_repository::DomainRepository;
pub use newsletter_repository::NewsletterRepository;
pub use project_repository::ProjectRepository;
pub use review_repository::ReviewRepository;
pub use settings_repository::SettingsRepository;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
#[cfg(test)]
pub use contact_repository::MockContactRepository;
#[cfg(test)]
pub use domain_repository::MockDomainRepository;
#[cfg(test)]
pub use newsletter_repository::MockNewsletterRepository;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
