//! Authentication service for the single admin account.
//!
//! `POST /api/auth/login` exchanges the admin credentials for a bearer token
//! of the form `base64url(claims).hex(hmac)`, where the HMAC-SHA256 is keyed by
//! the server-side `TOKEN_SIGNING_SECRET`. Tokens are stateless: nothing is
//! stored, and rotating the secret invalidates every issued token.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, TimeZone, Utc};
use hmac::{Hmac, Mac};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

const INVALID_TOKEN: &str = "Invalid or expired token";

/// A freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
    nonce: String,
}

/// Issues and verifies admin bearer tokens.
pub struct AuthService {
    username: String,
    password: String,
    signing_secret: String,
    ttl: Duration,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `username` / `password` - The admin credentials
    /// - `signing_secret` - HMAC key for issued tokens
    /// - `ttl` - Lifetime of issued tokens
    pub fn new(username: String, password: String, signing_secret: String, ttl: Duration) -> Self {
        Self {
            username,
            password,
            signing_secret,
            ttl,
        }
    }

    fn mac(&self) -> Result<HmacSha256, AppError> {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .map_err(|e| AppError::internal("Failed to initialise token signer", e))
    }

    fn sign(&self, payload: &str) -> Result<String, AppError> {
        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Compares two secrets without leaking where they differ.
    fn secrets_match(&self, given: &str, expected: &str) -> Result<bool, AppError> {
        let expected_tag = hex::decode(self.sign(expected)?)
            .map_err(|e| AppError::internal("Failed to compare credentials", e))?;

        let mut mac = self.mac()?;
        mac.update(given.as_bytes());
        Ok(mac.verify_slice(&expected_tag).is_ok())
    }

    /// Checks the admin credentials and issues a token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the credentials do not match.
    pub fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AppError> {
        let username_ok = self.secrets_match(username, &self.username)?;
        let password_ok = self.secrets_match(password, &self.password)?;

        if !(username_ok && password_ok) {
            tracing::warn!("Admin login rejected");
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let expires_at = Utc::now() + self.ttl;
        let token = self.issue(expires_at)?;

        tracing::info!(%expires_at, "Admin token issued");
        Ok(IssuedToken { token, expires_at })
    }

    fn issue(&self, expires_at: DateTime<Utc>) -> Result<String, AppError> {
        let nonce: [u8; 16] = rand::rng().random();
        let claims = Claims {
            sub: self.username.clone(),
            exp: expires_at.timestamp(),
            nonce: hex::encode(nonce),
        };

        let json = serde_json::to_vec(&claims)
            .map_err(|e| AppError::internal("Failed to encode token", e))?;
        let payload = URL_SAFE_NO_PAD.encode(json);
        let signature = self.sign(&payload)?;

        Ok(format!("{payload}.{signature}"))
    }

    /// Verifies a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, carries a
    /// bad signature, belongs to another subject or has expired.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        let unauthorized = || AppError::unauthorized(INVALID_TOKEN);

        let (payload, signature) = token.split_once('.').ok_or_else(unauthorized)?;
        let signature = hex::decode(signature).map_err(|_| unauthorized())?;

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).map_err(|_| unauthorized())?;

        let json = URL_SAFE_NO_PAD.decode(payload).map_err(|_| unauthorized())?;
        let claims: Claims = serde_json::from_slice(&json).map_err(|_| unauthorized())?;

        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .ok_or_else(unauthorized)?;

        if claims.sub != self.username || expires_at <= Utc::now() {
            return Err(unauthorized());
        }

        Ok(())
    }
}
