//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use chrono::{Datelike, Utc};

use super::view::{DomainCard, ProjectCard, SettingsView};
use crate::domain::entities::Settings;
use crate::state::AppState;

/// Template for `templates/web/landing.html`.
///
/// Each section is `None` when its data could not be loaded; the template
/// renders a "temporarily unavailable" block in its place.
#[derive(Template, WebTemplate)]
#[template(path = "web/landing.html")]
pub struct LandingTemplate {
    pub site_name: String,
    pub year: i32,
    pub settings: Option<SettingsView>,
    pub domains: Option<Vec<DomainCard>>,
    pub projects: Option<Vec<ProjectCard>>,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
///
/// The settings, domains and projects sections load concurrently and
/// independently: one failing section does not affect the others.
pub async fn landing_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (settings, domains, projects) = tokio::join!(
        state.settings_service.get(),
        state.domain_service.list(false),
        state.project_service.list(false),
    );

    let settings = section("settings", settings).map(SettingsView::from);
    let domains = section("domains", domains)
        .map(|items| items.into_iter().map(DomainCard::from).collect());
    let projects = section("projects", projects)
        .map(|items| items.into_iter().map(ProjectCard::from).collect());

    LandingTemplate {
        site_name: settings
            .as_ref()
            .map(|s| s.site_name.clone())
            .unwrap_or_else(|| Settings::fallback().site_name),
        year: Utc::now().year(),
        settings,
        domains,
        projects,
    }
}

/// Logs a failed section load and turns it into `None`.
pub(super) fn section<T, E: std::fmt::Display>(name: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(section = name, error = %e, "Page section unavailable");
            None
        }
    }
}
