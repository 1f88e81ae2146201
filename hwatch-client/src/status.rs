//! Homework status API client

use hwatch_core::Cursor;
use hwatch_core::dto::status::StatusQuery;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::error::Result;
use crate::handle_response;

/// HTTP client for the homework status endpoint
#[derive(Clone)]
pub struct StatusApiClient {
    /// Full endpoint URL, used verbatim
    endpoint: String,
    /// OAuth token sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl StatusApiClient {
    /// Create a new status API client
    ///
    /// # Arguments
    /// * `endpoint` - The full status endpoint URL
    /// * `token` - OAuth token for the status API
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new status API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(endpoint: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch status changes since `from_date`
    ///
    /// The decoded body is returned as-is; checking its shape is the
    /// caller's job (see [`hwatch_core::validate`]).
    ///
    /// # Errors
    /// Fails on connection errors, any status other than `200 OK`, and
    /// bodies that are not JSON.
    pub async fn fetch_statuses(&self, from_date: Cursor) -> Result<Value> {
        debug!("Fetching homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&StatusQuery { from_date })
            .send()
            .await?;

        handle_response(response).await
    }
}

impl fmt::Debug for StatusApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusApiClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = StatusApiClient::new("http://localhost:8080/api/statuses/", "secret");
        assert_eq!(client.endpoint(), "http://localhost:8080/api/statuses/");
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = StatusApiClient::new("http://localhost:8080", "super-secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
