//! Notifier
//!
//! Delivers notification text to the configured Telegram chat.

use async_trait::async_trait;
use hwatch_client::TelegramClient;
use reqwest::Client;

use crate::config::Config;
use crate::error::DeliveryError;

/// Delivery channel for notifications
///
/// One call is one delivery attempt; implementations must not retry.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers a message to the fixed recipient
    ///
    /// # Arguments
    /// * `message` - Notification text
    async fn deliver(&self, message: &str) -> Result<(), DeliveryError>;
}

/// Telegram implementation of Notifier
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier bound to one chat
    ///
    /// # Arguments
    /// * `client` - Telegram Bot API client
    /// * `chat_id` - Recipient chat identifier
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }

    /// Creates a notifier for the configured bot and chat
    pub fn from_config(config: &Config, http: Client) -> Self {
        let client = TelegramClient::with_client(
            config.telegram_api_url.clone(),
            config.telegram_token.clone(),
            http,
        );
        Self::new(client, config.telegram_chat_id.clone())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn deliver(&self, message: &str) -> Result<(), DeliveryError> {
        self.client.send_message(&self.chat_id, message).await?;
        Ok(())
    }
}
