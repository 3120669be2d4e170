//! Telegram Bot API types and `sendMessage` client

use crate::config;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("telegram request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("telegram rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Webhook payload. Only text messages are acted on.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: Option<i64>,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    /// `(chat_id, text)` when the update carries a text message.
    pub fn text_message(&self) -> Option<(i64, &str)> {
        let message = self.message.as_ref()?;
        let text = message.text.as_deref()?;
        Some((message.chat.id, text))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotMessage {
    pub chat_id: i64,
    pub text: String,
}

pub struct TelegramClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl TelegramClient {
    pub fn new(token: impl Into<String>) -> Result<Self, TelegramError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self::with_client(config::get_telegram_api_url(), token, client))
    }

    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            client,
        }
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.base_url.trim_end_matches('/'),
            self.token
        )
    }

    pub async fn send_message(&self, message: &BotMessage) -> Result<(), TelegramError> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(message)
            .send()
            .await?;

        let status = response.status();
        debug!(chat_id = message.chat_id, status = %status, "Telegram sendMessage");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TelegramError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
