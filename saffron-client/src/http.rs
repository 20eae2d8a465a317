//! HTTP client for network-based API calls
//!
//! Thin wrapper around reqwest that unwraps the backend's response
//! envelope. Non-2xx statuses and `success: false` envelopes both map onto
//! [`ClientError`] variants; callers never see a raw response.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::ApiResponse;
use tracing::{debug, warn};

/// HTTP client for making network requests to the POS backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the session token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Clear the session token
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Make a GET request, returning the envelope data
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        debug!(path, "GET");
        let response = request.send().await?;
        Self::unwrap_data(Self::handle_response(response).await?)
    }

    /// Make a POST request with JSON body, returning the envelope data
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        debug!(path, "POST");
        let response = request.send().await?;
        Self::unwrap_data(Self::handle_response(response).await?)
    }

    /// Make a POST request whose response data is ignored
    pub async fn post_unit<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        debug!(path, "POST");
        let response = request.send().await?;
        Self::handle_response::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// Make a PUT request with JSON body, returning the envelope data
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        debug!(path, "PUT");
        let response = request.send().await?;
        Self::unwrap_data(Self::handle_response(response).await?)
    }

    /// Make a DELETE request whose response data is ignored
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let mut request = self.client.delete(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        debug!(path, "DELETE");
        let response = request.send().await?;
        Self::handle_response::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// Map the HTTP response onto the envelope, surfacing failures
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<ApiResponse<T>> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            warn!(%status, "request failed");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.success {
            warn!(
                status_code = envelope.status_code,
                message = %envelope.message,
                "server reported failure"
            );
            return Err(ClientError::Api {
                status_code: envelope.status_code,
                message: envelope.message,
            });
        }
        Ok(envelope)
    }

    fn unwrap_data<T>(envelope: ApiResponse<T>) -> ClientResult<T> {
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("missing data in envelope".to_string()))
    }
}
