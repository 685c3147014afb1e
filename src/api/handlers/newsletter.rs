//! Handlers for newsletter subscriptions.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::ApiResponse;
use crate::api::dto::newsletter::{NewsletterRequest, SubscriberItem};
use crate::api::extract::ValidatedJson;
use crate::application::services::SubscribeOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Subscribes an email, or reactivates a previous subscription.
///
/// # Endpoint
///
/// `POST /api/newsletter/subscribe` (newsletter rate limit)
///
/// # Response Codes
///
/// - **201 Created**: New subscriber
/// - **200 OK**: Inactive subscriber reactivated
/// - **400 Bad Request**: Invalid email, or already subscribed
pub async fn subscribe_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewsletterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), AppError> {
    let outcome = state.newsletter_service.subscribe(&payload.email).await?;

    let (status, message) = match outcome {
        SubscribeOutcome::Subscribed(_) => {
            (StatusCode::CREATED, "Successfully subscribed to newsletter")
        }
        SubscribeOutcome::Resubscribed(_) => {
            (StatusCode::OK, "Successfully resubscribed to newsletter")
        }
    };

    Ok((status, Json(ApiResponse::message(message))))
}

/// # Endpoint
///
/// `POST /api/newsletter/unsubscribe` (newsletter rate limit)
///
/// # Response Codes
///
/// - **200 OK**: Unsubscribed
/// - **400 Bad Request**: Already unsubscribed
/// - **404 Not Found**: Unknown email
pub async fn unsubscribe_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewsletterRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.newsletter_service.unsubscribe(&payload.email).await?;

    Ok(Json(ApiResponse::message(
        "Successfully unsubscribed from newsletter",
    )))
}

/// # Endpoint
///
/// `GET /api/newsletter` (admin)
pub async fn list_subscribers_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SubscriberItem>>>, AppError> {
    let subscribers = state.newsletter_service.list().await?;

    Ok(Json(ApiResponse::list(
        subscribers.into_iter().map(SubscriberItem::from).collect(),
    )))
}
