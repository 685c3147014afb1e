//! Public website rendered with Askama templates.
//!
//! Pages read through the same services as the API; the contact and
//! newsletter forms post JSON to the API from `static/site.js`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers and view models
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
