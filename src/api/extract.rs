//! Request extractors shared by the API handlers.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use axum_auth::AuthBearer;
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use validator::Validate;

use crate::error::{AppError, FieldError};
use crate::state::AppState;

/// JSON body that has passed its `validator` rules.
///
/// Malformed JSON is reported like a validation failure with a single
/// `body` field error, so clients see one error shape for bad input.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::validation(vec![FieldError::new("body", rejection.body_text())])
            })?;

        value.validate()?;
        Ok(Self(value))
    }
}

/// Who is asking: the public, or the admin holding a valid bearer token.
///
/// Never rejects. Read endpoints use it to decide whether inactive or
/// unpublished records are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Public,
    Admin,
}

impl Viewer {
    pub fn is_admin(self) -> bool {
        self == Viewer::Admin
    }
}

impl FromRequestParts<AppState> for Viewer {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let viewer = match AuthBearer::from_request_parts(parts, &()).await {
            Ok(AuthBearer(token)) if state.auth_service.authenticate(&token).is_ok() => {
                Viewer::Admin
            }
            _ => Viewer::Public,
        };

        Ok(viewer)
    }
}
