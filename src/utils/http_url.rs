//! Validation of user-supplied links (project URLs, images, avatars).

use std::borrow::Cow;
use url::Url;
use validator::ValidationError;

/// Accepts only absolute `http` or `https` URLs with a host.
///
/// Rejects potentially dangerous schemes like `javascript:`, `data:` or `file:`.
///
/// Used as a `validator` custom function:
///
/// ```rust,ignore
/// #[validate(custom(function = "validate_http_url"))]
/// pub github_url: Option<String>,
/// ```
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(value.trim()).map_err(|_| invalid())?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(()),
        _ => Err(invalid()),
    }
}

fn invalid() -> ValidationError {
    ValidationError::new("url").with_message(Cow::Borrowed("Must be a valid http(s) URL"))
}
