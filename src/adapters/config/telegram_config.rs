#[derive(serde::Deserialize, Clone, Default)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: Option<Box<str>>,
    #[serde(default)]
    pub chat_id: Option<Box<str>>,
}

impl TelegramConfig {
    /// Both the token and the chat id are needed to send anything.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.bot_token.as_deref(), self.chat_id.as_deref()) {
            (Some(token), Some(chat_id)) if !token.is_empty() && !chat_id.is_empty() => {
                Some((token, chat_id))
            }
            _ => None,
        }
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_need_token_and_chat() {
        let mut config = TelegramConfig::default();
        assert!(config.credentials().is_none());

        config.bot_token = Some("123:abc".into());
        assert!(config.credentials().is_none());

        config.chat_id = Some("".into());
        assert!(config.credentials().is_none());

        config.chat_id = Some("-1001".into());
        assert_eq!(config.credentials(), Some(("123:abc", "-1001")));
    }

    #[test]
    fn test_debug_hides_token() {
        let config = TelegramConfig {
            bot_token: Some("secret-token".into()),
            chat_id: Some("42".into()),
        };
        assert!(!format!("{:?}", config).contains("secret-token"));
    }
}
