//! Public blog pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Datelike, Utc};

use super::landing::section;
use super::view::PostView;
use crate::domain::entities::Settings;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "web/blog_list.html")]
pub struct BlogListTemplate {
    pub site_name: String,
    pub year: i32,
    pub posts: Option<Vec<PostView>>,
}

#[derive(Template, WebTemplate)]
#[template(path = "web/blog_post.html")]
pub struct BlogPostTemplate {
    pub site_name: String,
    pub year: i32,
    pub post: PostView,
}

#[derive(Template, WebTemplate)]
#[template(path = "web/not_found.html")]
pub struct NotFoundTemplate {
    pub site_name: String,
    pub year: i32,
    pub message: String,
}

/// Site name from stored settings; the built-in name when unavailable.
async fn site_name(state: &AppState) -> String {
    state
        .settings_service
        .get()
        .await
        .unwrap_or_else(|_| Settings::fallback())
        .site_name
}

/// Renders published posts, newest first.
///
/// # Endpoint
///
/// `GET /blog`
pub async fn blog_list_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (site_name, posts) = tokio::join!(site_name(&state), state.blog_service.list(false));

    BlogListTemplate {
        site_name,
        year: Utc::now().year(),
        posts: section("blog", posts).map(|items| items.into_iter().map(PostView::from).collect()),
    }
}

/// Renders one published post.
///
/// # Endpoint
///
/// `GET /blog/{slug}`
///
/// Drafts and unknown slugs render the HTML not-found page with `404`.
pub async fn blog_post_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let (site_name, post) = tokio::join!(
        site_name(&state),
        state.blog_service.get_by_slug(&slug, false)
    );
    let year = Utc::now().year();

    match post {
        Ok(post) => Ok(BlogPostTemplate {
            site_name,
            year,
            post: post.into(),
        }
        .into_response()),
        Err(AppError::NotFound { .. }) => Ok((
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                site_name,
                year,
                message: "This post does not exist or is not published yet.".to_string(),
            },
        )
            .into_response()),
        Err(e) => Err(e),
    }
}
