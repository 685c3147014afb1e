//! HTTP client for the content API, used by the admin tool.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::api::dto::ApiResponse;
use crate::api::dto::auth::{LoginRequest, LoginResponse};

/// Every admin request gives up after this long.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error envelope.
    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("not logged in")]
    NotAuthenticated,

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// Error body returned by the API; `errors` is present on validation failures.
#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    message: String,
    #[serde(default)]
    errors: Vec<FieldMessage>,
}

#[derive(Debug, serde::Deserialize)]
struct FieldMessage {
    field: String,
    message: String,
}

/// Thin JSON client over `reqwest` with a fixed timeout and optional bearer token.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchanges the admin credentials for a token and keeps it for later calls.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;

        let login: LoginResponse = read_json(response).await?;
        self.token = Some(login.token.clone());
        Ok(login)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let token = self.token.as_deref().ok_or(ClientError::NotAuthenticated)?;
        Ok(request.bearer_auth(token))
    }

    async fn envelope<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>, ClientError> {
        let response = self.authorized(request)?.send().await?;
        read_json(response).await
    }

    async fn data<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        self.envelope(request)
            .await?
            .data
            .ok_or_else(|| ClientError::Unexpected("response has no data".to_string()))
    }

    /// `GET path` as the admin, so inactive and unpublished records are included.
    pub async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ClientError> {
        self.data(self.http.get(self.url(path))).await
    }

    pub async fn create<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.data(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn update<B, T>(&self, path: &str, id: i64, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.data(self.http.put(self.url(&format!("{path}/{id}"))).json(body))
            .await
    }

    pub async fn delete(&self, path: &str, id: i64) -> Result<(), ClientError> {
        self.envelope::<serde_json::Value>(self.http.delete(self.url(&format!("{path}/{id}"))))
            .await?;
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorEnvelope>().await {
        Ok(body) if body.errors.is_empty() => body.message,
        Ok(body) => {
            let details: Vec<String> = body
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect();
            format!("{} ({})", body.message, details.join("; "))
        }
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };

    Err(ClientError::Api { status, message })
}
