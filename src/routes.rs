//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`, `/blog`, `/blog/{slug}` - Public site (HTML)
//! - `GET  /health`                    - Health check: database, mailer
//! - `/api/*`                          - REST API (general rate limit)
//! - `/static/*`                       - Static assets
//! - anything else                     - `404 Route <path> not found`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Error detail** - `error`/`stack` on error bodies outside production
//! - **Rate limiting** - Per-IP budgets on `/api`, stricter on the forms
//! - **Authentication** - Bearer token on admin methods

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{error_detail, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Path normalization and CORS are applied by [`crate::server::run`], so
/// tests can drive this router directly.
pub fn app_router(state: AppState) -> Router {
    let api_router = api::routes::routes(&state).layer(middleware::from_fn_with_state(
        state.rate_limits.api.clone(),
        rate_limit::layer,
    ));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .layer(middleware::from_fn_with_state(
            state.expose_error_detail,
            error_detail::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}
