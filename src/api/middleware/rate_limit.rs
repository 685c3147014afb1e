//! Per-IP rate limiting using the GCRA limiter from `governor`.
//!
//! Three independent budgets exist: the general API budget applied to every
//! `/api` route, and the stricter contact-form and newsletter budgets layered
//! on their own routes. A request rejected by any budget gets `429` with the
//! budget's fixed message and is not processed further.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::net::IpAddr;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use crate::error::AppError;
use crate::utils::client_ip::client_ip;

pub const GENERAL_MESSAGE: &str = "Too many requests from this IP, please try again later.";
pub const CONTACT_MESSAGE: &str = "Too many contact form submissions. Please try again later.";
pub const NEWSLETTER_MESSAGE: &str = "Too many subscription attempts. Please try again later.";

const HOUR: Duration = Duration::from_secs(60 * 60);

/// One keyed budget: `max` requests per `window`, per client IP.
///
/// The whole budget is available as a burst; it refills evenly over the
/// window.
#[derive(Clone)]
pub struct RateLimit {
    limiter: Arc<DefaultKeyedRateLimiter<IpAddr>>,
    message: &'static str,
    behind_proxy: bool,
}

impl RateLimit {
    pub fn new(max: u32, window: Duration, message: &'static str, behind_proxy: bool) -> Self {
        let max = NonZeroU32::new(max).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(window / max.get())
            .unwrap_or_else(|| Quota::per_second(max))
            .allow_burst(max);

        Self {
            limiter: Arc::new(RateLimiter::keyed(quota)),
            message,
            behind_proxy,
        }
    }

    /// Consumes one request from the budget of `ip`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RateLimited`] when the budget is exhausted.
    pub fn check(&self, ip: IpAddr) -> Result<(), AppError> {
        self.limiter.check_key(&ip).map_err(|_| {
            tracing::warn!(%ip, message = self.message, "Rate limit exceeded");
            AppError::rate_limited(self.message)
        })
    }

    /// Drops keys whose budget has fully refilled.
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    pub fn tracked_keys(&self) -> usize {
        self.limiter.len()
    }
}

/// The three budgets used by the router.
#[derive(Clone)]
pub struct RateLimits {
    pub api: RateLimit,
    pub contact: RateLimit,
    pub newsletter: RateLimit,
}

impl RateLimits {
    /// General budget from configuration, contact at 5/hour, newsletter at 3/hour.
    pub fn new(api_max: u32, api_window: Duration, behind_proxy: bool) -> Self {
        Self {
            api: RateLimit::new(api_max, api_window, GENERAL_MESSAGE, behind_proxy),
            contact: RateLimit::new(5, HOUR, CONTACT_MESSAGE, behind_proxy),
            newsletter: RateLimit::new(3, HOUR, NEWSLETTER_MESSAGE, behind_proxy),
        }
    }

    pub fn retain_recent(&self) {
        self.api.retain_recent();
        self.contact.retain_recent();
        self.newsletter.retain_recent();
    }
}

/// Middleware enforcing a single [`RateLimit`].
///
/// # Example
///
/// ```rust,ignore
/// let contact = post(submit_contact_handler).route_layer(
///     middleware::from_fn_with_state(limits.contact.clone(), rate_limit::layer),
/// );
/// ```
pub async fn layer(
    State(limit): State<RateLimit>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ip = client_ip(&req, limit.behind_proxy);
    limit.check(ip)?;
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn ip(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
    }

    #[test]
    fn test_budget_exhausts_after_max() {
        let limit = RateLimit::new(5, HOUR, CONTACT_MESSAGE, false);

        for _ in 0..5 {
            assert!(limit.check(ip(1)).is_ok());
        }

        match limit.check(ip(1)) {
            Err(AppError::RateLimited { message }) => assert_eq!(message, CONTACT_MESSAGE),
            other => panic!("expected rate limit, got {other:?}"),
        }
    }

    #[test]
    fn test_budgets_are_per_ip() {
        let limit = RateLimit::new(1, HOUR, NEWSLETTER_MESSAGE, false);

        assert!(limit.check(ip(1)).is_ok());
        assert!(limit.check(ip(1)).is_err());
        assert!(limit.check(ip(2)).is_ok());
        assert_eq!(limit.tracked_keys(), 2);
    }

    #[test]
    fn test_zero_max_is_clamped_to_one() {
        let limit = RateLimit::new(0, HOUR, GENERAL_MESSAGE, false);
        assert!(limit.check(ip(3)).is_ok());
        assert!(limit.check(ip(3)).is_err());
    }
}
