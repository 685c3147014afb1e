//! API route configuration.
//!
//! Reads of published content are public; every write, the contact inbox and
//! the subscriber list require the admin bearer token via
//! [`crate::api::middleware::auth`]. Authentication and the per-form rate
//! limits are attached per method with `route_layer`, so a public `GET` and an
//! admin `POST` can share one path.

use axum::{
    Router, middleware,
    routing::{MethodRouter, get, post, put},
};

use crate::api::handlers::{auth, blogs, contacts, domains, newsletter, projects, reviews, settings};
use crate::api::middleware::{auth as auth_layer, rate_limit};
use crate::state::AppState;

/// Wraps a method router with the admin bearer check.
fn admin(route: MethodRouter<AppState>, state: &AppState) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth_layer::layer,
    ))
}

/// All `/api` routes.
///
/// # Endpoints
///
/// - `POST   /auth/login`                       - Admin login
/// - `GET    /domains`, `/domains/{id}`         - Domains grid
/// - `POST   /domains`, `PUT|DELETE /domains/{id}` (admin)
/// - `GET    /settings`, `PUT /settings` (admin)
/// - `POST   /contacts` (contact limit), `GET /contacts` (admin)
/// - `GET|PATCH|DELETE /contacts/{id}` (admin)
/// - `POST   /newsletter/subscribe`, `/newsletter/unsubscribe` (newsletter limit)
/// - `GET    /newsletter` (admin)
/// - `GET    /blogs`, `/blogs/{id}`, `/blogs/slug/{slug}`; writes admin
/// - `GET    /projects`, `/projects/{id}`; writes admin
/// - `GET    /reviews`, `/reviews/{id}`; writes admin
pub fn routes(state: &AppState) -> Router<AppState> {
    let contact_limit = middleware::from_fn_with_state(
        state.rate_limits.contact.clone(),
        rate_limit::layer,
    );
    let newsletter_limit = middleware::from_fn_with_state(
        state.rate_limits.newsletter.clone(),
        rate_limit::layer,
    );

    Router::new()
        .route("/auth/login", post(auth::login_handler))
        .route(
            "/domains",
            get(domains::list_domains_handler)
                .merge(admin(post(domains::create_domain_handler), state)),
        )
        .route(
            "/domains/{id}",
            get(domains::get_domain_handler).merge(admin(
                put(domains::update_domain_handler).delete(domains::delete_domain_handler),
                state,
            )),
        )
        .route(
            "/settings",
            get(settings::get_settings_handler)
                .merge(admin(put(settings::update_settings_handler), state)),
        )
        .route(
            "/contacts",
            post(contacts::submit_contact_handler)
                .route_layer(contact_limit)
                .merge(admin(get(contacts::list_contacts_handler), state)),
        )
        .route(
            "/contacts/{id}",
            admin(
                get(contacts::get_contact_handler)
                    .patch(contacts::update_contact_status_handler)
                    .delete(contacts::delete_contact_handler),
                state,
            ),
        )
        .route(
            "/newsletter",
            admin(get(newsletter::list_subscribers_handler), state),
        )
        .route(
            "/newsletter/subscribe",
            post(newsletter::subscribe_handler).route_layer(newsletter_limit.clone()),
        )
        .route(
            "/newsletter/unsubscribe",
            post(newsletter::unsubscribe_handler).route_layer(newsletter_limit),
        )
        .route(
            "/blogs",
            get(blogs::list_blogs_handler).merge(admin(post(blogs::create_blog_handler), state)),
        )
        .route(
            "/blogs/{id}",
            get(blogs::get_blog_handler).merge(admin(
                put(blogs::update_blog_handler).delete(blogs::delete_blog_handler),
                state,
            )),
        )
        .route("/blogs/slug/{slug}", get(blogs::get_blog_by_slug_handler))
        .route(
            "/projects",
            get(projects::list_projects_handler)
                .merge(admin(post(projects::create_project_handler), state)),
        )
        .route(
            "/projects/{id}",
            get(projects::get_project_handler).merge(admin(
                put(projects::update_project_handler).delete(projects::delete_project_handler),
                state,
            )),
        )
        .route(
            "/reviews",
            get(reviews::list_reviews_handler)
                .merge(admin(post(reviews::create_review_handler), state)),
        )
        .route(
            "/reviews/{id}",
            get(reviews::get_review_handler).merge(admin(
                put(reviews::update_review_handler).delete(reviews::delete_review_handler),
                state,
            )),
        )
}
