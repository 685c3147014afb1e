//! HTTP middleware for the API.
//!
//! - [`auth`] - Bearer token check for admin routes
//! - [`rate_limit`] - Per-IP request budgets
//! - [`error_detail`] - Diagnostic fields on error bodies outside production
//! - [`tracing`] - Request/response logging

pub mod auth;
pub mod error_detail;
pub mod rate_limit;
pub mod tracing;
