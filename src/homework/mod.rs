
use std::collections::HashMap;

use lazy_static::lazy_static;
use serde_json::Value;
use thiserror::Error;

lazy_static! {
    /// Display verdict for every review outcome the API can report.
    pub static ref HOMEWORK_VERDICTS: HashMap<&'static str, &'static str> = HashMap::from([
        ("approved", "The reviewer liked everything. Hooray!"),
        ("reviewing", "The work has been taken up for review."),
        ("rejected", "The work has been checked: the reviewer has remarks."),
    ]);
}

/// Errors raised when the API response has an unexpected shape.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The response body is not a JSON object.
    #[error("API response is not a JSON object")]
    NotAnObject,
    /// The response object has no `homeworks` key.
    #[error("API response has no `homeworks` key")]
    MissingHomeworks,
    /// The `homeworks` value is not an array.
    #[error("`homeworks` value is not an array")]
    NotAnArray,
}

/// Errors raised when a homework record cannot be turned into a message.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The record lacks a required string field.
    #[error("homework record has no `{0}` field")]
    MissingField(&'static str),
    /// The record's status is not in the verdict catalog.
    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),
}

/// Checks the response shape and extracts the homework list.
///
/// An empty list is the normal "nothing new" case, not an error. The records
/// themselves are not inspected here; that is [`parse_status`]'s job.
pub fn check_response(response: &Value) -> Result<&[Value], ValidationError> {
    let object = response.as_object().ok_or(ValidationError::NotAnObject)?;
    let homeworks = object.get("homeworks").ok_or(ValidationError::MissingHomeworks)?;
    let homeworks = homeworks.as_array().ok_or(ValidationError::NotAnArray)?;
    Ok(homeworks)
}

/// Builds the notification text for a single homework record.
///
/// The status must be known to the catalog before any verdict text is used.
pub fn parse_status(homework: &Value) -> Result<String, FormatError> {
    let homework_name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(FormatError::MissingField("homework_name"))?;
    let status = homework
        .get("status")
        .and_then(Value::as_str)
        .ok_or(FormatError::MissingField("status"))?;
    let verdict = HOMEWORK_VERDICTS
        .get(status)
        .ok_or_else(|| FormatError::UnknownStatus(status.to_string()))?;

    Ok(format!("Changed review status of work \"{homework_name}\". {verdict}"))
}
