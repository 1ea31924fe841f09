use error_stack::ResultExt;
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use crate::adapters::config::telegram_config::TelegramConfig;
use crate::ports::notifier::Notifier;

pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Error, Debug)]
enum TelegramError {
    #[error("HTTP request failed")]
    HttpError,
    #[error("Telegram rejected the message: {0}")]
    Rejected(reqwest::StatusCode),
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Sends report results to a Telegram chat through the Bot API.
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_url: String,
    config: TelegramConfig,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("config", &self.config)
            .finish()
    }
}

impl TelegramNotifier {
    pub fn new(client: reqwest::Client, config: TelegramConfig) -> Self {
        Self::with_api_url(client, config, TELEGRAM_API_URL)
    }

    pub fn with_api_url(
        client: reqwest::Client,
        config: TelegramConfig,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            config,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.credentials().is_some()
    }

    async fn send(
        &self,
        token: &str,
        chat_id: &str,
        text: &str,
    ) -> error_stack::Result<(), TelegramError> {
        let url = send_message_url(&self.api_url, token);
        let response = self
            .client
            .post(url)
            .json(&SendMessage { chat_id, text })
            .send()
            .await
            .change_context(TelegramError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_stack::report!(TelegramError::Rejected(status)).attach_printable(body));
        }

        Ok(())
    }
}

fn send_message_url(api_url: &str, token: &str) -> String {
    format!("{}/bot{}/sendMessage", api_url.trim_end_matches('/'), token)
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    #[instrument(skip(self))]
    async fn notify(&self, text: &str) {
        let Some((token, chat_id)) = self.config.credentials() else {
            tracing::info!("Telegram: not configured, skipping notification");
            return;
        };

        match self.send(token, chat_id, text).await {
            Ok(()) => tracing::info!("Telegram: 📨 Notification sent"),
            Err(report) => tracing::error!("Telegram: ❌ Failed to send notification: {:?}", report),
        }
    }
}
