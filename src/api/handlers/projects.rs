//! Handlers for portfolio project endpoints. Responses embed each project's
//! active reviews.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::ApiResponse;
use crate::api::dto::project::{CreateProjectRequest, ProjectItem, UpdateProjectRequest};
use crate::api::extract::{ValidatedJson, Viewer};
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `GET /api/projects`, ordered by `order`. The admin also sees inactive projects.
pub async fn list_projects_handler(
    viewer: Viewer,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ProjectItem>>>, AppError> {
    let projects = state.project_service.list(viewer.is_admin()).await?;

    Ok(Json(ApiResponse::list(
        projects.into_iter().map(ProjectItem::from).collect(),
    )))
}

/// # Endpoint
///
/// `GET /api/projects/{id}`
pub async fn get_project_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ProjectItem>>, AppError> {
    let project = state.project_service.get(id).await?;
    Ok(Json(ApiResponse::data(project.into())))
}

/// # Endpoint
///
/// `POST /api/projects` (admin)
pub async fn create_project_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProjectItem>>), AppError> {
    let project = state.project_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::data(project.into()))))
}

/// # Endpoint
///
/// `PUT /api/projects/{id}` (admin)
pub async fn update_project_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateProjectRequest>,
) -> Result<Json<ApiResponse<ProjectItem>>, AppError> {
    let project = state.project_service.update(id, payload.into()).await?;
    Ok(Json(ApiResponse::data(project.into())))
}

/// # Endpoint
///
/// `DELETE /api/projects/{id}` (admin). Reviews pointing at the project are kept.
pub async fn delete_project_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.project_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Project deleted successfully")))
}
