//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database check failed
///
/// Mail delivery is reported but never degrades the service: contact
/// submissions are stored whether or not email goes out.
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 6 active domains" },
///     "mail": { "status": "ok", "message": "Mailer: smtp" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = check_database(&state).await;
    let mail = CheckStatus::ok(format!(
        "Mailer: {}",
        state.notification_service.mailer_name()
    ));

    let healthy = database.is_ok();

    let response = HealthResponse {
        success: healthy,
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database, mail },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity by listing the active domains.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.domain_service.list(false).await {
        Ok(domains) => CheckStatus::ok(format!("Connected, {} active domains", domains.len())),
        Err(e) => CheckStatus::error(format!("Database error: {e}")),
    }
}
