//! Appends diagnostic `error` and `stack` fields to JSON error bodies.
//!
//! Installed only when the server runs outside production. The detail is
//! taken from the [`ErrorDetail`] extension that `AppError` attaches to its
//! response; responses without it pass through untouched.

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde_json::Value;

use crate::error::ErrorDetail;

/// Error bodies are small; anything larger is passed through as is.
const MAX_ERROR_BODY: usize = 64 * 1024;

pub async fn layer(State(expose): State<bool>, req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    if !expose {
        return response;
    }

    let Some(detail) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_ERROR_BODY).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Could not buffer error body");
            return Response::from_parts(parts, Body::empty());
        }
    };

    let mut json: Value = match serde_json::from_slice(&bytes) {
        Ok(json) => json,
        Err(_) => return Response::from_parts(parts, Body::from(bytes)),
    };

    if let Some(object) = json.as_object_mut() {
        object.insert("error".to_string(), Value::String(detail.error));
        if let Some(stack) = detail.stack {
            object.insert("stack".to_string(), Value::String(stack));
        }
    }

    let body = match serde_json::to_vec(&json) {
        Ok(body) => body,
        Err(_) => return Response::from_parts(parts, Body::from(bytes)),
    };

    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use axum::{Router, middleware, routing::get};
    use tower::ServiceExt;

    async fn failing() -> Result<(), AppError> {
        Err(AppError::internal("Database error", "connection reset"))
    }

    fn app(expose: bool) -> Router {
        Router::new()
            .route("/", get(failing))
            .layer(middleware::from_fn_with_state(expose, layer))
    }

    async fn body_json(router: Router) -> Value {
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), MAX_ERROR_BODY).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_detail_added_outside_production() {
        let json = body_json(app(true)).await;
        assert_eq!(json["message"], "Internal Server Error");
        assert_eq!(json["error"], "Database error");
        assert_eq!(json["stack"], "connection reset");
    }

    #[tokio::test]
    async fn test_detail_hidden_in_production() {
        let json = body_json(app(false)).await;
        assert_eq!(json["success"], false);
        assert!(json.get("error").is_none());
        assert!(json.get("stack").is_none());
    }
}
