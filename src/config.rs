use std::env;

use thiserror::Error;

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_POLL_INTERVAL: u64 = 600;

/// Errors raised while reading the configuration from the environment.
///
/// These are the only fatal errors in the application: they abort the process
/// before the poll loop starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("required environment variable `{0}` is missing or empty")]
    MissingVar(&'static str),
    /// The chat id variable is present but not a valid integer.
    #[error("environment variable `{0}` is not a valid chat id")]
    InvalidChatId(&'static str),
}

/// Represents the application configuration.
#[derive(Debug)]
pub struct Config {
    /// The Practicum API token.
    pub practicum_token: String,
    /// The Telegram bot token.
    pub telegram_bot_token: String,
    /// The Telegram chat to notify.
    pub telegram_chat_id: i64,
    /// The URL of the homework statuses endpoint.
    pub endpoint: String,
    /// The interval in seconds between polls.
    pub poll_interval: u64,
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// The three secrets are required and must be non-empty; the endpoint and
    /// poll interval fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            practicum_token: required_var("PRACTICUM_TOKEN")?,
            telegram_bot_token: required_var("TELOXIDE_TOKEN")?,
            telegram_chat_id: required_var("TELEGRAM_CHAT_ID")?
                .parse()
                .map_err(|_| ConfigError::InvalidChatId("TELEGRAM_CHAT_ID"))?,
            endpoint: env::var("HOMEWORK_API_URL")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            poll_interval: env::var("POLL_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_POLL_INTERVAL),
        })
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use temp_env::with_vars;

    use super::*;

    #[test]
    fn test_from_env() {
        with_vars(
            [
                ("PRACTICUM_TOKEN", Some("test practicum token")),
                ("TELOXIDE_TOKEN", Some("test telegram bot token")),
                ("TELEGRAM_CHAT_ID", Some("123456")),
                ("HOMEWORK_API_URL", Some("https://example.com/statuses/")),
                ("POLL_INTERVAL", Some("100")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.practicum_token, "test practicum token");
                assert_eq!(config.telegram_bot_token, "test telegram bot token");
                assert_eq!(config.telegram_chat_id, 123456);
                assert_eq!(config.endpoint, "https://example.com/statuses/");
                assert_eq!(config.poll_interval, 100);
            },
        );
    }

    #[test]
    fn test_missing_practicum_token_error() {
        with_vars(
            [
                ("PRACTICUM_TOKEN", None),
                ("TELOXIDE_TOKEN", Some("test telegram bot token")),
                ("TELEGRAM_CHAT_ID", Some("123456")),
            ],
            || {
                let config = Config::from_env();
                assert!(matches!(config, Err(ConfigError::MissingVar("PRACTICUM_TOKEN"))));
            },
        );
    }

    #[test]
    fn test_empty_telegram_bot_token_error() {
        with_vars(
            [
                ("PRACTICUM_TOKEN", Some("test practicum token")),
                ("TELOXIDE_TOKEN", Some("   ")),
                ("TELEGRAM_CHAT_ID", Some("123456")),
            ],
            || {
                let config = Config::from_env();
                assert!(matches!(config, Err(ConfigError::MissingVar("TELOXIDE_TOKEN"))));
            },
        );
    }

    #[test]
    fn test_invalid_chat_id_error() {
        with_vars(
            [
                ("PRACTICUM_TOKEN", Some("test practicum token")),
                ("TELOXIDE_TOKEN", Some("test telegram bot token")),
                ("TELEGRAM_CHAT_ID", Some("not a number")),
            ],
            || {
                let config = Config::from_env();
                assert!(matches!(config, Err(ConfigError::InvalidChatId("TELEGRAM_CHAT_ID"))));
            },
        );
    }

    #[test]
    fn test_missing_endpoint_default() {
        with_vars(
            [
                ("PRACTICUM_TOKEN", Some("test practicum token")),
                ("TELOXIDE_TOKEN", Some("test telegram bot token")),
                ("TELEGRAM_CHAT_ID", Some("123456")),
                ("HOMEWORK_API_URL", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
            },
        );
    }

    #[test]
    fn test_missing_poll_interval_default() {
        with_vars(
            [
                ("PRACTICUM_TOKEN", Some("test practicum token")),
                ("TELOXIDE_TOKEN", Some("test telegram bot token")),
                ("TELEGRAM_CHAT_ID", Some("123456")),
                ("POLL_INTERVAL", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.poll_interval, DEFAULT_POLL_INTERVAL);
            },
        );
    }

    #[test]
    fn test_unparsable_poll_interval_default() {
        with_vars(
            [
                ("PRACTICUM_TOKEN", Some("test practicum token")),
                ("TELOXIDE_TOKEN", Some("test telegram bot token")),
                ("TELEGRAM_CHAT_ID", Some("123456")),
                ("POLL_INTERVAL", Some("soon")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.poll_interval, DEFAULT_POLL_INTERVAL);
            },
        );
    }
}
