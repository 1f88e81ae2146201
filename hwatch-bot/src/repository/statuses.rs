//! Status repository
//!
//! Fetches raw status payloads for a time window from the status API.

use async_trait::async_trait;
use hwatch_client::StatusApiClient;
use hwatch_core::Cursor;
use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::TransportError;

/// Repository trait for the status API
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches status changes newer than `cursor`
    ///
    /// Returns the decoded response body without interpreting it.
    ///
    /// # Arguments
    /// * `cursor` - Lower bound of the fetch window
    async fn fetch(&self, cursor: Cursor) -> Result<Value, TransportError>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: StatusApiClient,
}

impl HttpStatusRepository {
    /// Creates a new HTTP status repository
    pub fn new(client: StatusApiClient) -> Self {
        Self { client }
    }

    /// Creates a repository for the configured endpoint and token
    pub fn from_config(config: &Config, http: Client) -> Self {
        Self::new(StatusApiClient::with_client(
            config.status_endpoint.clone(),
            config.practicum_token.clone(),
            http,
        ))
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch(&self, cursor: Cursor) -> Result<Value, TransportError> {
        let payload = self.client.fetch_statuses(cursor).await?;
        Ok(payload)
    }
}
