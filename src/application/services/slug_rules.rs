//! Slug checks shared by the domain and blog services.

use crate::error::{AppError, FieldError};
use crate::utils::slug::{SLUG_REGEX, normalize_slug};

pub(crate) const SLUG_MESSAGE: &str =
    "Slug can only contain lowercase letters, numbers, and hyphens";

/// Trims and lower-cases `slug`, then checks it against the slug pattern.
pub(crate) fn checked_slug(slug: &str) -> Result<String, AppError> {
    let slug = normalize_slug(slug);

    if !SLUG_REGEX.is_match(&slug) {
        return Err(AppError::validation(vec![FieldError::new(
            "slug",
            SLUG_MESSAGE,
        )]));
    }

    Ok(slug)
}
