use crate::helpers::{UNREACHABLE_BASE_URL, client_for, mount_probe, results_body};

use client_core::bot_client::BotClient;
use client_core::error::BotClientError;

use models::AnswerRecord;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// BotClient against a mock backend
// ============================================================================

/// **VALUE**: Verifies the question is posted as `{"description": ...}` with JSON headers.
///
/// **WHY THIS MATTERS**: The backend answers 400 "Missing description in request" for any
/// other shape, so the field name is the whole contract.
#[tokio::test]
async fn given_question_when_processing_then_posts_description_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({ "description": "How do I become a member?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body(&["Email membership@org.com"])))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .process("How do I become a member?")
        .await
        .unwrap();

    assert_eq!(
        results,
        vec![
            AnswerRecord::new("Email membership@org.com")
                .with_name("AI Response")
                .with_web_address("#")
        ]
    );
}

#[tokio::test]
async fn given_empty_question_when_processing_then_sends_it_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .and(body_json(json!({ "description": "" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server).process("").await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn given_backend_with_path_prefix_when_processing_then_keeps_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BotClient::new(&format!("{}/bot", server.uri())).unwrap();

    assert!(client.process("hi").await.is_ok());
}

/// **VALUE**: Verifies a non-JSON success body surfaces the decoder's own message.
///
/// **BUG THIS CATCHES**: Would catch if a garbled body were reported as an empty answer
/// or as the fixed "invalid format" message, hiding what actually came back.
#[tokio::test]
async fn given_non_json_success_body_when_processing_then_returns_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"))
        .mount(&server)
        .await;

    let error = client_for(&server).process("hi").await.unwrap_err();

    assert!(matches!(error, BotClientError::Json { .. }), "got {error:?}");
    assert!(!error.user_message().is_empty());
}

#[tokio::test]
async fn given_error_body_with_message_when_processing_then_returns_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "error": "Error processing request: model offline" })),
        )
        .mount(&server)
        .await;

    let error = client_for(&server).process("hi").await.unwrap_err();

    assert_eq!(error.status_code(), Some(500));
    assert_eq!(error.user_message(), "Error processing request: model offline");
}

#[tokio::test]
async fn given_healthy_backend_when_probing_then_succeeds() {
    let server = MockServer::start().await;
    mount_probe(&server, 200).await;

    assert!(client_for(&server).probe().await.is_ok());
}

#[tokio::test]
async fn given_failing_probe_when_probing_then_returns_unavailable() {
    let server = MockServer::start().await;
    mount_probe(&server, 503).await;

    let error = client_for(&server).probe().await.unwrap_err();

    assert!(matches!(error, BotClientError::Unavailable { .. }));
    assert_eq!(error.status_code(), Some(503));
}

/// **VALUE**: Verifies connection failures surface the transport's message, not a fixed one.
///
/// **WHY THIS MATTERS**: The fixed "not responding" text is reserved for a backend that
/// answered with a failure status; a refused connection must say what the transport said.
#[tokio::test]
async fn given_unreachable_backend_when_probing_then_returns_transport_error() {
    let client = BotClient::new(UNREACHABLE_BASE_URL).unwrap();

    let error = client.probe().await.unwrap_err();

    assert!(matches!(error, BotClientError::Http { .. }), "got {error:?}");
    assert!(error.user_message().contains("127.0.0.1:1"));
}
