//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through private `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgDomainRepository`] - Domains grid
//! - [`PgSettingsRepository`] - Settings singleton (upsert on id 1)
//! - [`PgContactRepository`] - Contact inbox
//! - [`PgNewsletterRepository`] - Newsletter subscribers
//! - [`PgBlogRepository`] - Blog posts
//! - [`PgProjectRepository`] - Portfolio projects
//! - [`PgReviewRepository`] - Client reviews

pub mod pg_blog_repository;
pub mod pg_contact_repository;
pub mod pg_domain_repository;
pub mod pg_newsletter_repository;
pub mod pg_project_repository;
pub mod pg_review_repository;
pub mod pg_settings_repository;

pub use pg_blog_repository::PgBlogRepository;
pub use pg_contact_repository::PgContactRepository;
pub use pg_domain_repository::PgDomainRepository;
pub use pg_newsletter_repository::PgNewsletterRepository;
pub use pg_project_repository::PgProjectRepository;
pub use pg_review_repository::PgReviewRepository;
pub use pg_settings_repository::PgSettingsRepository;
