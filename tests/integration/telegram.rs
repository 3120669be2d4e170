//! Integration tests for Telegram message delivery

use serde_json::json;
use stonks::bot::{BotMessage, TelegramClient, TelegramError};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn send_message_posts_json_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bottest-token/sendMessage"))
        .and(body_json(json!({"chat_id": 7, "text": "AAPL is oversold"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = TelegramClient::with_client(server.uri(), "test-token", reqwest::Client::new());
    client
        .send_message(&BotMessage {
            chat_id: 7,
            text: "AAPL is oversold".to_string(),
        })
        .await
        .expect("message delivered");

    let requests = server.received_requests().await.expect("wiremock requests");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn send_message_surfaces_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botbad-token/sendMessage"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let client = TelegramClient::with_client(server.uri(), "bad-token", reqwest::Client::new());
    let err = client
        .send_message(&BotMessage {
            chat_id: 7,
            text: "hi".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        TelegramError::Rejected { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Unauthorized");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
