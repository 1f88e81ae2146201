//! Telegram Bot API client

use hwatch_core::dto::telegram::{SendMessage, TelegramReply};
use reqwest::Client;
use std::fmt;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::{handle_response, normalize_base_url};

/// Default Bot API base URL
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    base_url: String,
    /// Bot token, part of every method URL
    token: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a client against the public Bot API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(TELEGRAM_API_URL, token, Client::new())
    }

    /// Create a client with a custom base URL and HTTP client
    ///
    /// # Arguments
    /// * `base_url` - The Bot API base URL
    /// * `token` - The bot token
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            token: token.into(),
            client,
        }
    }

    /// Get the Bot API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a text message to a chat
    ///
    /// A single attempt; success means the Bot API accepted the message.
    ///
    /// # Arguments
    /// * `chat_id` - Target chat identifier
    /// * `text` - Message text
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: chat_id.to_string(),
                text: text.to_string(),
            })
            .send()
            .await
            // reqwest errors carry the URL, which contains the token
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        let reply: TelegramReply = handle_response(response).await?;
        if !reply.ok {
            return Err(ClientError::api_error(
                reply.error_code.unwrap_or(200),
                reply
                    .description
                    .unwrap_or_else(|| "Telegram rejected the message".to_string()),
            ));
        }

        debug!("Message accepted by Telegram for chat {}", chat_id);
        Ok(())
    }
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
