//! Application error type and its HTTP mapping.
//!
//! Every fallible service and repository call returns [`AppError`]. Handlers
//! propagate it with `?` and the [`IntoResponse`] impl below is the single
//! place where errors become HTTP responses.
//!
//! # Response shape
//!
//! ```json
//! { "success": false, "message": "Blog not found" }
//! ```
//!
//! Validation failures additionally carry `errors: [{ "field", "message" }]`.
//! Outside production the `error` and `stack` fields are appended by
//! [`crate::api::middleware::error_detail`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Message returned for unexpected failures.
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error kinds raised by the application.
///
/// Everything except [`AppError::Internal`] is an operational error: an
/// expected outcome whose message is safe to show to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    RateLimited { message: String },
    #[error("{message}: {cause}")]
    Internal { message: String, cause: String },
}

impl AppError {
    /// Operational 400 without field detail (e.g. "already subscribed").
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation {
            message: "Validation failed".to_string(),
            errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: message.into(),
            cause: cause.to_string(),
        }
    }

    /// HTTP status declared by the error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns true for expected, typed application errors.
    pub fn is_operational(&self) -> bool {
        !matches!(self, AppError::Internal { .. })
    }

    /// Message that is safe to expose in every environment.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Internal { .. } => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Public error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

/// Diagnostic detail attached to error responses as a response extension.
///
/// Only rendered into the body when the server runs outside production.
#[derive(Debug, Clone)]
pub struct ErrorDetail {
    pub error: String,
    pub stack: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let detail = match &self {
            AppError::Internal { message, cause } => {
                tracing::error!(status = status.as_u16(), %cause, "{message}");
                ErrorDetail {
                    error: message.clone(),
                    stack: Some(cause.clone()),
                }
            }
            other => {
                tracing::debug!(status = status.as_u16(), "{other}");
                ErrorDetail {
                    error: other.to_string(),
                    stack: None,
                }
            }
        };

        let message = self.public_message();
        let errors = match self {
            AppError::Validation { errors, .. } => errors,
            _ => Vec::new(),
        };

        let body = ErrorBody {
            success: false,
            message,
            errors,
        };

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(detail);
        response
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Vec::new();
        collect_field_errors(&errors, "", &mut fields);
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::validation(fields)
    }
}

/// Flattens nested struct errors into dotted field paths (`social_media.github`).
fn collect_field_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}"));
                    FieldError::new(path.clone(), message)
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = e {
            return AppError::not_found("Resource not found");
        }

        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            let message = match db.constraint() {
                Some(constraint) if constraint.contains("slug") => "Slug is already in use",
                Some(constraint) if constraint.contains("email") => "Email is already registered",
                _ => "Duplicate value",
            };
            return AppError::conflict(message);
        }

        AppError::internal("Database error", e)
    }
}
