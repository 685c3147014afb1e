//! Handlers for the settings singleton.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, header},
};

use super::domains::PUBLIC_CACHE;
use crate::api::dto::ApiResponse;
use crate::api::dto::settings::{SettingsItem, UpdateSettingsRequest};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the settings document, or the built-in defaults when none is stored.
///
/// # Endpoint
///
/// `GET /api/settings`
///
/// Only a stored document is marked cacheable, so a freshly seeded site is
/// picked up immediately.
pub async fn get_settings_handler(
    State(state): State<AppState>,
) -> Result<(HeaderMap, Json<ApiResponse<SettingsItem>>), AppError> {
    let settings = state.settings_service.get().await?;

    let mut headers = HeaderMap::new();
    if !settings.is_fallback() {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(PUBLIC_CACHE));
    }

    Ok((headers, Json(ApiResponse::data(settings.into()))))
}

/// Replaces the settings document.
///
/// # Endpoint
///
/// `PUT /api/settings` (admin)
pub async fn update_settings_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateSettingsRequest>,
) -> Result<Json<ApiResponse<SettingsItem>>, AppError> {
    let settings = state.settings_service.update(payload.into()).await?;

    Ok(Json(ApiResponse::data(settings.into())))
}
