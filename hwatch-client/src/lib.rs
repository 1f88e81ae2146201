//! hwatch HTTP clients
//!
//! Small, typed clients for the two remote services the watcher talks to:
//! - [`StatusApiClient`]: the homework status endpoint
//! - [`TelegramClient`]: the Telegram Bot API, used to deliver notifications
//!
//! Both clients share [`ClientError`] and the same response handling, and
//! neither retries on its own.
//!
//! # Example
//!
//! ```no_run
//! use hwatch_client::StatusApiClient;
//! use hwatch_core::Cursor;
//!
//! # async fn example() -> hwatch_client::Result<()> {
//! let client = StatusApiClient::new(
//!     "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!     "my-token",
//! );
//! let payload = client.fetch_statuses(Cursor::now()).await?;
//! println!("{payload}");
//! # Ok(())
//! # }
//! ```

pub mod error;
mod status;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use status::StatusApiClient;
pub use telegram::{TELEGRAM_API_URL, TelegramClient};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default request timeout for clients built with [`build_http_client`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds a reqwest client with a request timeout
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(ClientError::from)
}

// =============================================================================
// Response Handlers
// =============================================================================

/// Handle an API response and deserialize JSON
///
/// Only `200 OK` counts as success; any other status, including other 2xx
/// codes, is turned into [`ClientError::ApiError`].
pub(crate) async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if status != StatusCode::OK {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), truncate_body(&error_text)));
    }

    response
        .json()
        .await
        .map_err(|e| {
            ClientError::ParseError(format!("Failed to parse JSON response: {}", e.without_url()))
        })
}

/// Longest error body kept in [`ClientError::ApiError`], in characters
pub const MAX_ERROR_BODY: usize = 200;

/// Cuts an error body down to [`MAX_ERROR_BODY`] characters
pub(crate) fn truncate_body(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Strips trailing slashes so paths can be appended with `/`
pub(crate) fn normalize_base_url(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}
