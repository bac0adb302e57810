
use async_trait::async_trait;
use mockall::automock;
use teloxide::{Bot, prelude::*, types::ChatId};
use thiserror::Error;

/// Errors raised while delivering a message to Telegram.
#[derive(Debug, Error)]
pub enum MessagingError {
    /// The Telegram API call failed.
    #[error("Teloxide API request failed: {0}")]
    TeloxideRequest(#[from] teloxide::RequestError),
}

type Result<T> = std::result::Result<T, MessagingError>;

/// Trait for sending messages to the user.
#[automock]
#[async_trait]
pub trait MessagingService: Send + Sync {
    /// Delivers `text` to the provided chat.
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<()>;
}

/// Telegram messaging service.
pub struct TelegramMessagingService {
    bot: Bot,
}

impl TelegramMessagingService {
    /// Creates a new service over the given bot.
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl MessagingService for TelegramMessagingService {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<()> {
        self.bot
            .send_message(chat_id, text)
            .await
            .map(|_| ())
            .map_err(MessagingError::TeloxideRequest)?;
        tracing::info!("Message delivered to chat {chat_id}");
        Ok(())
    }
}
