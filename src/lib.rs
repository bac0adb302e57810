#![warn(missing_docs)]
//! A Telegram bot for tracking homework review results.
//!
//! The bot polls the Practicum homework API on a fixed interval and sends a
//! message to a single Telegram chat whenever the most recent submission
//! changes its review status. Operational failures are reported to the same
//! chat, de-duplicated so an unchanged error is not repeated every cycle.

/// The client for the homework statuses API.
pub mod api;
/// The configuration for the application.
pub mod config;
/// Status catalog, response validation and message formatting.
pub mod homework;
/// The service for sending messages to the user.
pub mod messaging;
/// The poller for fetching homework statuses and notifying the chat.
pub mod poller;

use std::sync::Arc;

use teloxide::{Bot, types::ChatId};

use crate::{
    api::DefaultPracticumClient, config::Config, messaging::TelegramMessagingService,
    poller::StatusPoller,
};

/// Runs the bot.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let api_client =
        Arc::new(DefaultPracticumClient::new(&config.practicum_token, &config.endpoint)?);
    let bot = Bot::new(config.telegram_bot_token.clone());
    let messaging_service = Arc::new(TelegramMessagingService::new(bot));

    let poller = StatusPoller::new(
        api_client,
        messaging_service,
        ChatId(config.telegram_chat_id),
        config.poll_interval,
    );

    tracing::info!("Configuration loaded, entering the poll loop");
    poller.run().await;

    Ok(())
}
