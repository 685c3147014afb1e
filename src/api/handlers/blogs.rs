//! Handlers for blog endpoints.
//!
//! Reads are public but only return published posts, unless the caller
//! presents a valid admin token.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::ApiResponse;
use crate::api::dto::blog::{BlogItem, CreateBlogRequest, UpdateBlogRequest};
use crate::api::extract::{ValidatedJson, Viewer};
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `GET /api/blogs`, most recently published first
pub async fn list_blogs_handler(
    viewer: Viewer,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BlogItem>>>, AppError> {
    let blogs = state.blog_service.list(viewer.is_admin()).await?;

    Ok(Json(ApiResponse::list(
        blogs.into_iter().map(BlogItem::from).collect(),
    )))
}

/// # Endpoint
///
/// `GET /api/blogs/{id}`
pub async fn get_blog_handler(
    viewer: Viewer,
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BlogItem>>, AppError> {
    let blog = state.blog_service.get(id, viewer.is_admin()).await?;
    Ok(Json(ApiResponse::data(blog.into())))
}

/// # Endpoint
///
/// `GET /api/blogs/slug/{slug}`
pub async fn get_blog_by_slug_handler(
    viewer: Viewer,
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BlogItem>>, AppError> {
    let blog = state
        .blog_service
        .get_by_slug(&slug, viewer.is_admin())
        .await?;

    Ok(Json(ApiResponse::data(blog.into())))
}

/// Creates a post. Without a slug, one is derived from the title.
///
/// # Endpoint
///
/// `POST /api/blogs` (admin)
///
/// # Errors
///
/// Returns 409 if the slug is already in use.
pub async fn create_blog_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBlogRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BlogItem>>), AppError> {
    let blog = state.blog_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::data(blog.into()))))
}

/// # Endpoint
///
/// `PUT /api/blogs/{id}` (admin)
pub async fn update_blog_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateBlogRequest>,
) -> Result<Json<ApiResponse<BlogItem>>, AppError> {
    let blog = state.blog_service.update(id, payload.into()).await?;
    Ok(Json(ApiResponse::data(blog.into())))
}

/// # Endpoint
///
/// `DELETE /api/blogs/{id}` (admin)
pub async fn delete_blog_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.blog_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Blog deleted successfully")))
}
