use crate::error::BotClientError;
use crate::error::bot_client::{BACKEND_UNAVAILABLE_MESSAGE, INVALID_RESPONSE_MESSAGE};

use common::HttpStatusCode;

/// **VALUE**: Verifies the error panel text never includes the `[file:line:col]` suffix.
///
/// **WHY THIS MATTERS**: Display output is for logs; the view shows `user_message()`.
/// Leaking source locations into the panel would make fixed messages unmatchable.
#[test]
fn given_unavailable_error_when_reading_user_message_then_returns_fixed_text() {
    let error = BotClientError::unavailable(HttpStatusCode(503));

    assert_eq!(error.user_message(), BACKEND_UNAVAILABLE_MESSAGE);
    assert_eq!(error.status_code(), Some(503));
    assert!(error.to_string().contains("503"));
}

#[test]
fn given_malformed_response_when_reading_user_message_then_returns_fixed_text() {
    let error = BotClientError::malformed_response();

    assert_eq!(error.user_message(), INVALID_RESPONSE_MESSAGE);
    assert_eq!(error.status_code(), None);
}

/// **VALUE**: Verifies the server-supplied message is shown exactly, with the status
/// fallback used only when the body had none.
#[test]
fn given_server_errors_when_reading_user_message_then_uses_body_or_status_fallback() {
    let with_body = BotClientError::server(HttpStatusCode(400), Some("Missing description in request"));
    let without_body = BotClientError::server(HttpStatusCode(502), None);

    assert_eq!(with_body.user_message(), "Missing description in request");
    assert_eq!(without_body.user_message(), "Server error: 502");
}

#[test]
fn given_io_error_when_converted_then_keeps_message_verbatim() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "handbook.txt is gone");

    let error = BotClientError::from(io);

    assert_eq!(error.user_message(), "handbook.txt is gone");
    assert!(error.to_string().starts_with("IO Error: handbook.txt is gone ["));
}
