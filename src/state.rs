//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::api::middleware::rate_limit::RateLimits;
use crate::application::services::{
    AuthService, BlogService, ContactService, DomainService, NewsletterService,
    NotificationService, ProjectService, ReviewService, SettingsService,
};
use crate::config::Config;
use crate::domain::repositories::{
    BlogRepository, ContactRepository, DomainRepository, NewsletterRepository, ProjectRepository,
    ReviewRepository, SettingsRepository,
};
use crate::infrastructure::mail::Mailer;
use crate::infrastructure::persistence::{
    PgBlogRepository, PgContactRepository, PgDomainRepository, PgNewsletterRepository,
    PgProjectRepository, PgReviewRepository, PgSettingsRepository,
};

/// One implementation per repository trait.
///
/// Production wires the PostgreSQL repositories; integration tests wire
/// in-memory ones.
#[derive(Clone)]
pub struct Repositories {
    pub domains: Arc<dyn DomainRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub newsletter: Arc<dyn NewsletterRepository>,
    pub blogs: Arc<dyn BlogRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
}

impl Repositories {
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            domains: Arc::new(PgDomainRepository::new(pool.clone())),
            settings: Arc::new(PgSettingsRepository::new(pool.clone())),
            contacts: Arc::new(PgContactRepository::new(pool.clone())),
            newsletter: Arc::new(PgNewsletterRepository::new(pool.clone())),
            blogs: Arc::new(PgBlogRepository::new(pool.clone())),
            projects: Arc::new(PgProjectRepository::new(pool.clone())),
            reviews: Arc::new(PgReviewRepository::new(pool)),
        }
    }
}

/// Settings needed to build [`AppState`], extracted from [`Config`].
#[derive(Debug, Clone)]
pub struct StateOptions {
    pub admin_username: String,
    pub admin_password: String,
    pub token_signing_secret: String,
    pub token_ttl: chrono::Duration,
    pub contact_email: String,
    pub base_url: String,
    pub mail_timeout: Duration,
    pub rate_limit_window: Duration,
    pub rate_limit_max_requests: u32,
    pub behind_proxy: bool,
    /// Adds `error`/`stack` to error bodies. Off in production.
    pub expose_error_detail: bool,
}

impl StateOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            admin_username: config.admin_username.clone(),
            admin_password: config.admin_password.clone(),
            token_signing_secret: config.token_signing_secret.clone(),
            token_ttl: chrono::Duration::hours(config.token_ttl_hours),
            contact_email: config.contact_email.clone(),
            base_url: config.base_url.clone(),
            mail_timeout: Duration::from_secs(config.smtp_timeout_secs),
            rate_limit_window: config.rate_limit_window(),
            rate_limit_max_requests: config.rate_limit_max_requests,
            behind_proxy: config.behind_proxy,
            expose_error_detail: !config.is_production(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub domain_service: Arc<DomainService<dyn DomainRepository>>,
    pub settings_service: Arc<SettingsService<dyn SettingsRepository>>,
    pub contact_service: Arc<ContactService<dyn ContactRepository>>,
    pub newsletter_service: Arc<NewsletterService<dyn NewsletterRepository>>,
    pub blog_service: Arc<BlogService<dyn BlogRepository>>,
    pub project_service: Arc<ProjectService<dyn ProjectRepository, dyn ReviewRepository>>,
    pub review_service: Arc<ReviewService<dyn ReviewRepository>>,
    pub notification_service: Arc<NotificationService>,
    pub auth_service: Arc<AuthService>,
    pub rate_limits: RateLimits,
    pub expose_error_detail: bool,
}

impl AppState {
    pub fn new(repos: Repositories, mailer: Arc<dyn Mailer>, options: StateOptions) -> Self {
        let notification_service = Arc::new(NotificationService::new(
            mailer,
            options.contact_email,
            options.base_url,
            options.mail_timeout,
        ));

        Self {
            domain_service: Arc::new(DomainService::new(repos.domains)),
            settings_service: Arc::new(SettingsService::new(repos.settings)),
            contact_service: Arc::new(ContactService::new(
                repos.contacts,
                notification_service.clone(),
            )),
            newsletter_service: Arc::new(NewsletterService::new(repos.newsletter)),
            blog_service: Arc::new(BlogService::new(repos.blogs)),
            project_service: Arc::new(ProjectService::new(repos.projects, repos.reviews.clone())),
            review_service: Arc::new(ReviewService::new(repos.reviews)),
            notification_service,
            auth_service: Arc::new(AuthService::new(
                options.admin_username,
                options.admin_password,
                options.token_signing_secret,
                options.token_ttl,
            )),
            rate_limits: RateLimits::new(
                options.rate_limit_max_requests,
                options.rate_limit_window,
                options.behind_proxy,
            ),
            expose_error_detail: options.expose_error_detail,
        }
    }
}
