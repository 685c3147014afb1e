//! Handlers for the public contact form and the admin inbox.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::ApiResponse;
use crate::api::dto::contact::{
    ContactCreated, ContactItem, ContactRequest, UpdateContactStatusRequest,
};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Stores a contact-form submission and sends the notification emails.
///
/// # Endpoint
///
/// `POST /api/contacts` (contact rate limit)
///
/// The response does not depend on email delivery: a stored submission is
/// always reported as `201 Created`.
///
/// # Response
///
/// ```json
/// { "success": true, "message": "Contact form submitted successfully", "data": { "id": 42 } }
/// ```
pub async fn submit_contact_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContactRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ContactCreated>>), AppError> {
    let (contact, outcome) = state.contact_service.submit(payload.into()).await?;

    tracing::info!(
        contact_id = contact.id,
        admin_notification = outcome.admin_notification,
        user_confirmation = outcome.user_confirmation,
        "Contact form processed"
    );

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::data(ContactCreated { id: contact.id })
                .with_message("Contact form submitted successfully"),
        ),
    ))
}

/// # Endpoint
///
/// `GET /api/contacts` (admin), newest first
pub async fn list_contacts_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ContactItem>>>, AppError> {
    let contacts = state.contact_service.list().await?;

    Ok(Json(ApiResponse::list(
        contacts.into_iter().map(ContactItem::from).collect(),
    )))
}

/// # Endpoint
///
/// `GET /api/contacts/{id}` (admin)
pub async fn get_contact_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ContactItem>>, AppError> {
    let contact = state.contact_service.get(id).await?;
    Ok(Json(ApiResponse::data(contact.into())))
}

/// Moves a submission through the inbox workflow.
///
/// # Endpoint
///
/// `PATCH /api/contacts/{id}` (admin)
///
/// ```json
/// { "status": "replied" }
/// ```
pub async fn update_contact_status_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateContactStatusRequest>,
) -> Result<Json<ApiResponse<ContactItem>>, AppError> {
    let contact = state
        .contact_service
        .update_status(id, payload.status)
        .await?;

    Ok(Json(ApiResponse::data(contact.into())))
}

/// # Endpoint
///
/// `DELETE /api/contacts/{id}` (admin)
pub async fn delete_contact_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.contact_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Contact deleted successfully")))
}
