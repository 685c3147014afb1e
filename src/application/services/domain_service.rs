//! Domain ("realm") management service.

use crate::domain::entities::{Domain, NewDomain, UpdateDomain};
use crate::domain::repositories::DomainRepository;
use crate::error::{AppError, FieldError};
use std::sync::Arc;

use super::slug_rules::checked_slug;

/// Service for the domains shown in the public grid.
///
/// Slugs are trimmed and lower-cased before they are checked against
/// `^[a-z0-9-]+$`; uniqueness is enforced by the store.
pub struct DomainService<R: DomainRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: DomainRepository + ?Sized> DomainService<R> {
    /// Creates a new domain service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists domains ordered by `order`.
    ///
    /// # Arguments
    ///
    /// - `include_inactive` - Admin view; public callers only see active domains
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, include_inactive: bool) -> Result<Vec<Domain>, AppError> {
        self.repository.list(!include_inactive).await
    }

    /// Retrieves a domain by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the domain does not exist.
    pub async fn get(&self, id: i64) -> Result<Domain, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Domain not found"))
    }

    /// Creates a new domain.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the slug is malformed or the order is negative.
    /// Returns [`AppError::Conflict`] if the slug is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, mut new_domain: NewDomain) -> Result<Domain, AppError> {
        new_domain.slug = checked_slug(&new_domain.slug)?;
        ensure_order(new_domain.order)?;

        let created = self.repository.create(new_domain).await?;
        tracing::info!(domain_id = created.id, slug = %created.slug, "Domain created");
        Ok(created)
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the domain does not exist.
    /// Returns [`AppError::Validation`] or [`AppError::Conflict`] as for [`Self::create`].
    pub async fn update(&self, id: i64, mut update: UpdateDomain) -> Result<Domain, AppError> {
        if let Some(slug) = update.slug.as_deref() {
            update.slug = Some(checked_slug(slug)?);
        }
        if let Some(order) = update.order {
            ensure_order(order)?;
        }

        let mut domain = self.get(id).await?;
        update.apply(&mut domain);
        self.repository.update(&domain).await
    }

    /// Deletes a domain.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the domain does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Domain not found"));
        }

        tracing::info!(domain_id = id, "Domain deleted");
        Ok(())
    }

    /// Replaces every domain with `domains` in one transaction.
    ///
    /// Each entry is checked like [`Self::create`] before anything is written.
    pub async fn replace_all(&self, domains: Vec<NewDomain>) -> Result<Vec<Domain>, AppError> {
        let mut checked = Vec::with_capacity(domains.len());
        for mut domain in domains {
            domain.slug = checked_slug(&domain.slug)?;
            ensure_order(domain.order)?;
            checked.push(domain);
        }

        self.repository.replace_all(checked).await
    }
}

fn ensure_order(order: i32) -> Result<(), AppError> {
    if order < 0 {
        return Err(AppError::validation(vec![FieldError::new(
            "order",
            "Order must be a non-negative integer",
        )]));
    }
    Ok(())
}
