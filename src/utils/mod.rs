//! Utility functions for slugs, link validation, and request handling.
//!
//! - [`slug`] - Slug derivation and the slug pattern
//! - [`http_url`] - `http(s)` URL validation for `validator`
//! - [`client_ip`] - Client IP extraction for rate limiting

pub mod client_ip;
pub mod http_url;
pub mod slug;
