//! Data Transfer Objects for API requests and responses.
//!
//! Response DTOs serialize with camelCase field names. Request DTOs carry
//! `validator` rules that run in [`crate::api::extract::ValidatedJson`]
//! before any handler logic. Free-text fields are trimmed while they are
//! deserialized (see [`trim`]), so the rules apply to the stored value.

pub mod auth;
pub mod blog;
pub mod contact;
pub mod domain;
pub mod health;
pub mod newsletter;
pub mod project;
pub mod response;
pub mod review;
pub mod settings;
pub mod trim;

pub use response::ApiResponse;
