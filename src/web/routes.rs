//! Public site route configuration.

use crate::state::AppState;
use crate::web::handlers::{blog_list_handler, blog_post_handler, landing_handler};
use axum::{Router, routing::get};

/// Server-rendered pages.
///
/// # Endpoints
///
/// - `GET /` - Landing page (about, domains, projects, contact, newsletter)
/// - `GET /blog` - Published posts
/// - `GET /blog/{slug}` - A single published post
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_handler))
        .route("/blog", get(blog_list_handler))
        .route("/blog/{slug}", get(blog_post_handler))
}
