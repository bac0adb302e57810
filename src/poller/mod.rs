
use std::{sync::Arc, time::Duration};

use chrono::Utc;
use teloxide::types::ChatId;
use thiserror::Error;

use crate::{
    api::{ApiError, PracticumClient},
    homework::{self, FormatError, ValidationError},
    messaging::MessagingService,
};

/// Prefix for operational-failure notifications.
const FAILURE_PREFIX: &str = "Program failure: ";

/// Errors a single poll cycle can raise.
///
/// Transparent wrapping keeps the notified text identical to the underlying
/// error's own description, which is also what de-duplication compares.
#[derive(Debug, Error)]
pub enum PollerError {
    /// The API request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The API response had an unexpected shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A homework record could not be formatted.
    #[error(transparent)]
    Format(#[from] FormatError),
}

type Result<T> = std::result::Result<T, PollerError>;

/// A poller for homework statuses.
///
/// Owns all mutable state of the loop: the timestamp cursor the API is
/// queried with, and the description of the last reported failure.
pub struct StatusPoller {
    api_client: Arc<dyn PracticumClient>,
    messaging_service: Arc<dyn MessagingService>,
    chat_id: ChatId,
    // The interval in seconds between polls.
    poll_interval: u64,
    // Unix timestamp the next request asks for changes since.
    cursor: i64,
    // Description of the last notified failure, for de-duplication.
    last_reported_error: Option<String>,
}

impl StatusPoller {
    /// Create a new StatusPoller. The cursor starts at the current time.
    pub fn new(
        api_client: Arc<dyn PracticumClient>,
        messaging_service: Arc<dyn MessagingService>,
        chat_id: ChatId,
        poll_interval: u64,
    ) -> Self {
        Self {
            api_client,
            messaging_service,
            chat_id,
            poll_interval,
            cursor: Utc::now().timestamp(),
            last_reported_error: None,
        }
    }

    /// Run the poller. The loop only ends with the process.
    pub async fn run(mut self) {
        tracing::debug!("Starting status poller");

        let mut interval = tokio::time::interval(Duration::from_secs(self.poll_interval));

        loop {
            interval.tick().await;
            self.poll_cycle().await;
        }
    }

    /// One poll, validate, format, notify pass, cursor advance included.
    async fn poll_cycle(&mut self) {
        let outcome = self.poll_once(self.cursor).await;

        // The next cycle asks for changes since this one, even after a failure.
        self.cursor = Utc::now().timestamp();

        if let Err(error) = outcome {
            self.report_failure(&error).await;
        }
    }

    /// Poll the API once and notify the chat about the latest homework.
    async fn poll_once(&self, from_date: i64) -> Result<()> {
        let response = self.api_client.homework_statuses(from_date).await?;
        let homeworks = homework::check_response(&response)?;

        let Some(latest) = homeworks.first() else {
            tracing::info!("No homework updates since last poll");
            return Ok(());
        };

        let text = homework::parse_status(latest)?;
        if let Err(e) = self.messaging_service.send_message(self.chat_id, &text).await {
            tracing::error!("Failed to deliver status notification: {e:?}");
        }

        Ok(())
    }

    /// Notify the chat about a failed cycle, suppressing repeats of the same
    /// error description.
    async fn report_failure(&mut self, error: &PollerError) {
        let description = error.to_string();
        tracing::error!("Poll cycle failed: {description}");

        if self.last_reported_error.as_deref() == Some(description.as_str()) {
            tracing::info!("Error `{description}` is not fixed yet, notification suppressed");
            return;
        }

        let text = format!("{FAILURE_PREFIX}{description}");
        if let Err(e) = self.messaging_service.send_message(self.chat_id, &text).await {
            tracing::error!("Failed to deliver failure notification: {e:?}");
        }

        self.last_reported_error = Some(description);
    }
}
