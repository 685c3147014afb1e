//! Handlers for client review endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::ApiResponse;
use crate::api::dto::review::{CreateReviewRequest, ReviewItem, UpdateReviewRequest};
use crate::api::extract::{ValidatedJson, Viewer};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_reviews_handler(
    viewer: Viewer,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ReviewItem>>>, AppError> {
    let reviews = state.review_service.list(viewer.is_admin()).await?;

    Ok(Json(ApiResponse::list(
        reviews.into_iter().map(ReviewItem::from).collect(),
    )))
}

pub async fn get_review_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ReviewItem>>, AppError> {
    let review = state.review_service.get(id).await?;
    Ok(Json(ApiResponse::data(review.into())))
}

pub async fn create_review_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReviewItem>>), AppError> {
    let review = state.review_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::data(review.into()))))
}

pub async fn update_review_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateReviewRequest>,
) -> Result<Json<ApiResponse<ReviewItem>>, AppError> {
    let review = state.review_service.update(id, payload.into()).await?;
    Ok(Json(ApiResponse::data(review.into())))
}

pub async fn delete_review_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.review_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Review deleted successfully")))
}
