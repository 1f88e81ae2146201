//! hwatch
//!
//! A long-running bot that watches the review status of a submitted
//! homework and reports every change to a Telegram chat.
//!
//! Architecture:
//! - Configuration: Secrets and tunables from the environment (or `.env`)
//! - Repositories: HTTP access to the status API and Telegram
//! - Services: Formatting and delivering notifications
//! - Scheduler: The poll loop and its time cursor
//!
//! The bot polls the status API every retry period for changes since the
//! last cursor, notifies about each of them, and keeps going whatever
//! fails along the way.

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use hwatch_core::{StatusFormatter, VerdictTable};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{HttpStatusRepository, TelegramNotifier};
use crate::scheduler::StatusPoller;
use crate::service::StandardNotificationService;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine, the variables may come from the environment
    let dotenv = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwatch_bot=info,hwatch_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting hwatch");
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    // Missing secrets are fatal: report once and never enter the loop
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.status_endpoint, config.telegram_chat_id
    );

    let mut poller = build_poller(&config)?;

    info!("Poll interval: {:?}", config.retry_period);
    poller.run(shutdown_signal()).await;

    info!("hwatch stopped at cursor {}", poller.cursor());
    Ok(())
}

/// Loads and validates configuration from environment variables
fn load_config() -> Result<Config, error::ConfigError> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Wires the repositories and services into a poller
fn build_poller(config: &Config) -> Result<StatusPoller> {
    let http = hwatch_client::build_http_client(config.request_timeout)
        .context("Failed to build HTTP client")?;

    let statuses = Arc::new(HttpStatusRepository::from_config(config, http.clone()));
    let notifier = Arc::new(TelegramNotifier::from_config(config, http));

    let formatter = StatusFormatter::new(VerdictTable::default());
    let notifications = Arc::new(StandardNotificationService::new(formatter, notifier));

    Ok(StatusPoller::new(config.retry_period, statuses, notifications))
}

/// Resolves on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the process can only be killed
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwatch_core::Cursor;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mock_config(server: &MockServer) -> Config {
        let mut config = Config::new("p-token".into(), "123:abc".into(), "42".into());
        config.status_endpoint = format!("{}/api/user_api/homework_statuses/", server.uri());
        config.telegram_api_url = server.uri();
        config
    }

    #[tokio::test]
    async fn test_cycle_against_live_http() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/user_api/homework_statuses/"))
            .and(query_param("from_date", "0"))
            .and(header("Authorization", "OAuth p-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "homeworks": [{"homework_name": "lab1", "status": "approved"}],
                "current_date": 1000
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMessage"))
            .and(body_json(json!({
                "chat_id": "42",
                "text": "Status changed for \"lab1\". Работа проверена: ревьюеру всё понравилось. Ура!"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let config = mock_config(&server);
        let mut poller = build_poller(&config).unwrap().with_cursor(Cursor::new(0));

        let outcome = poller.poll_once().await.unwrap();

        assert_eq!(outcome.delivered, 1);
        assert_eq!(poller.cursor(), Cursor::new(1000));
    }

    #[tokio::test]
    async fn test_status_outage_keeps_cursor() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(0)
            .mount(&server)
            .await;

        let config = mock_config(&server);
        let mut poller = build_poller(&config).unwrap().with_cursor(Cursor::new(700));

        assert!(poller.poll_once().await.is_err());
        assert_eq!(poller.cursor(), Cursor::new(700));
    }
}
