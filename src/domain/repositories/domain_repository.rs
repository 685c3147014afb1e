//! Repository trait for domain ("realm") management.

use crate::domain::entities::{Domain, NewDomain};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing domains.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDomainRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_postgres.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Creates a new domain.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_domain: NewDomain) -> Result<Domain, AppError>;

    /// Finds a domain by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Domain>, AppError>;

    /// Lists domains ordered by `order`, then `id`.
    ///
    /// # Arguments
    ///
    /// - `only_active` - If true, returns only active domains
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, only_active: bool) -> Result<Vec<Domain>, AppError>;

    /// Persists every field of an already loaded domain.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the domain no longer exists.
    /// Returns [`AppError::Conflict`] if the new slug is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, domain: &Domain) -> Result<Domain, AppError>;

    /// Deletes a domain. Returns `Ok(false)` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Atomically replaces every domain with `domains`. Used by seeding.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; nothing is changed then.
    async fn replace_all(&self, domains: Vec<NewDomain>) -> Result<Vec<Domain>, AppError>;
}
