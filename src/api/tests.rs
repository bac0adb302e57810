use super::*;

#[test]
fn test_new_practicum_client() {
    let client = DefaultPracticumClient::new("test_token", "https://example.com/statuses/");
    assert!(client.is_ok());
}

#[test]
fn test_new_rejects_token_with_control_characters() {
    let client = DefaultPracticumClient::new("bad\ntoken", "https://example.com/statuses/");
    assert!(matches!(client, Err(ApiError::InvalidHeader(_))));
}

#[test]
fn test_remote_status_error_carries_the_code() {
    let error = ApiError::RemoteStatus(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error.to_string().contains("500"));
}
