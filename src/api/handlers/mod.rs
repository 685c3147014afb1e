//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod auth;
pub mod blogs;
pub mod contacts;
pub mod domains;
pub mod fallback;
pub mod health;
pub mod newsletter;
pub mod projects;
pub mod reviews;
pub mod settings;

pub use fallback::not_found_handler;
pub use health::health_handler;
