//! Wire-level tests for the status API and Telegram clients.
//!
//! All tests use wiremock to stand in for the remote services - no real API
//! calls are made.

use hwatch_client::{
    ClientError, MAX_ERROR_BODY, StatusApiClient, TelegramClient, build_http_client,
};
use hwatch_core::Cursor;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATUS_PATH: &str = "/api/user_api/homework_statuses/";
const UNREACHABLE: &str = "http://127.0.0.1:1";

fn status_client(server: &MockServer) -> StatusApiClient {
    StatusApiClient::new(format!("{}{}", server.uri(), STATUS_PATH), "practicum-token")
}

fn telegram_client(server: &MockServer) -> TelegramClient {
    TelegramClient::with_client(server.uri(), "123:abc", reqwest::Client::new())
}

// ============================================================================
// Status API
// ============================================================================

mod status_api {
    use super::*;

    #[tokio::test]
    async fn sends_cursor_and_oauth_header() {
        let server = MockServer::start().await;
        let body = json!({
            "homeworks": [{"homework_name": "lab1", "status": "approved"}],
            "current_date": 1000
        });

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .and(query_param("from_date", "500"))
            .and(header("Authorization", "OAuth practicum-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let payload = status_client(&server)
            .fetch_statuses(Cursor::new(500))
            .await
            .unwrap();

        assert_eq!(payload, body);
    }

    #[tokio::test]
    async fn payload_is_passed_through_untouched() {
        let server = MockServer::start().await;
        let body = json!({"unexpected": true});

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let payload = status_client(&server)
            .fetch_statuses(Cursor::new(0))
            .await
            .unwrap();

        assert_eq!(payload, body);
    }

    #[tokio::test]
    async fn server_error_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = status_client(&server)
            .fetch_statuses(Cursor::new(0))
            .await
            .unwrap_err();

        assert!(err.is_server_error());
        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn hung_request_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(STATUS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"homeworks": [], "current_date": 1}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let http = build_http_client(Duration::from_millis(200)).unwrap();
        let client = StatusApiClient::with_client(
            format!("{}{}", server.uri(), STATUS_PATH),
            "practicum-token",
            http,
        );

        let err = client.fetch_statuses(Cursor::new(0)).await.unwrap_err();

        assert!(err.is_timeout());
        assert!(matches!(err, ClientError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn long_error_page_is_truncated() {
        let server = MockServer::start().await;
        let page = format!("<html><body>{}</body></html>", "Bad Gateway ".repeat(1000));

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string(page))
            .mount(&server)
            .await;

        let err = status_client(&server)
            .fetch_statuses(Cursor::new(0))
            .await
            .unwrap_err();

        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 502);
                assert!(message.starts_with("<html><body>Bad Gateway"));
                assert!(message.chars().count() <= MAX_ERROR_BODY + 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn unauthorized_is_client_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": "not_authenticated",
                "message": "Учетные данные не были предоставлены."
            })))
            .mount(&server)
            .await;

        let err = status_client(&server)
            .fetch_statuses(Cursor::new(0))
            .await
            .unwrap_err();

        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn non_200_success_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = status_client(&server)
            .fetch_statuses(Cursor::new(0))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::ApiError { status: 204, .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = status_client(&server)
            .fetch_statuses(Cursor::new(0))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn connection_refused_is_request_failed() {
        // Nothing listens on port 1
        let client = StatusApiClient::new(format!("{UNREACHABLE}{STATUS_PATH}"), "token");
        let err = client.fetch_statuses(Cursor::new(0)).await.unwrap_err();

        assert!(matches!(err, ClientError::RequestFailed(_)));
    }
}

// ============================================================================
// Telegram
// ============================================================================

mod telegram {
    use super::*;

    #[tokio::test]
    async fn send_message_posts_chat_and_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMessage"))
            .and(body_json(json!({"chat_id": "42", "text": "hello"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": {"message_id": 1}
            })))
            .expect(1)
            .mount(&server)
            .await;

        telegram_client(&server)
            .send_message("42", "hello")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn bad_request_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = telegram_client(&server)
            .send_message("42", "hello")
            .await
            .unwrap_err();

        assert!(err.is_client_error());
        assert!(err.to_string().contains("chat not found"));
    }

    #[tokio::test]
    async fn ok_false_reply_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": false,
                "error_code": 403,
                "description": "Forbidden: bot was blocked by the user"
            })))
            .mount(&server)
            .await;

        let err = telegram_client(&server)
            .send_message("42", "hello")
            .await
            .unwrap_err();

        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("blocked"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn connection_error_does_not_leak_token() {
        let client = TelegramClient::with_client(UNREACHABLE, "123:abc", reqwest::Client::new());
        let err = client.send_message("42", "hello").await.unwrap_err();

        assert!(matches!(err, ClientError::RequestFailed(_)));
        assert!(!err.to_string().contains("123:abc"));
    }
}
