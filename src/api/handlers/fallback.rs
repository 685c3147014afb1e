//! Catch-all for unmatched routes.

use axum::http::Uri;

use crate::error::AppError;

/// Returns `404` with `Route <path> not found`.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {} not found", uri.path()))
}
