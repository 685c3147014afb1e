//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and email delivery.
//!
//! # Modules
//!
//! - [`mail`] - Email delivery (SMTP and no-op implementations)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod mail;
pub mod persistence;
