//! Handlers for domain ("realm") endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};

use crate::api::dto::ApiResponse;
use crate::api::dto::domain::{CreateDomainRequest, DomainItem, UpdateDomainRequest};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Public listings change rarely; browsers and proxies may keep them for an hour.
pub const PUBLIC_CACHE: &str = "public, max-age=3600";

type CacheHeader = [(header::HeaderName, &'static str); 1];

/// Lists active domains ordered by `order`.
///
/// # Endpoint
///
/// `GET /api/domains`
pub async fn list_domains_handler(
    State(state): State<AppState>,
) -> Result<(CacheHeader, Json<ApiResponse<Vec<DomainItem>>>), AppError> {
    let domains = state.domain_service.list(false).await?;
    let items = domains.into_iter().map(DomainItem::from).collect();

    Ok((
        [(header::CACHE_CONTROL, PUBLIC_CACHE)],
        Json(ApiResponse::list(items)),
    ))
}

/// # Endpoint
///
/// `GET /api/domains/{id}`
///
/// # Errors
///
/// Returns 404 if the domain does not exist.
pub async fn get_domain_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<(CacheHeader, Json<ApiResponse<DomainItem>>), AppError> {
    let domain = state.domain_service.get(id).await?;

    Ok((
        [(header::CACHE_CONTROL, PUBLIC_CACHE)],
        Json(ApiResponse::data(domain.into())),
    ))
}

/// Creates a domain.
///
/// # Endpoint
///
/// `POST /api/domains` (admin)
///
/// # Errors
///
/// Returns 400 if the slug is not `^[a-z0-9-]+$` after normalization.
/// Returns 409 if the slug is already in use.
pub async fn create_domain_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDomainRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DomainItem>>), AppError> {
    let domain = state.domain_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(domain.into()))))
}

/// Partially updates a domain.
///
/// # Endpoint
///
/// `PUT /api/domains/{id}` (admin)
pub async fn update_domain_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateDomainRequest>,
) -> Result<Json<ApiResponse<DomainItem>>, AppError> {
    let domain = state.domain_service.update(id, payload.into()).await?;

    Ok(Json(ApiResponse::data(domain.into())))
}

/// # Endpoint
///
/// `DELETE /api/domains/{id}` (admin)
pub async fn delete_domain_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.domain_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Domain deleted successfully")))
}
