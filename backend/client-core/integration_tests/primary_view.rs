use crate::helpers::{
    UNREACHABLE_BASE_URL, client_for, forbid_process, mount_probe, mount_process, request_count,
    results_body,
};

use client_core::bot_client::BotClient;
use client_core::view::primary::{SUBMIT_LABEL, SUBMIT_LOADING_LABEL};
use client_core::view::{PrimaryView, SubmitOutcome, ViewState};

use models::AnswerRecord;

use std::time::Duration;

use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};

// ============================================================================
// Primary view: probe, ask, render into results panel or error panel
// ============================================================================

/// **VALUE**: End-to-end happy path for the main form.
///
/// **WHY THIS MATTERS**: This is the flow nearly every user goes through: one question,
/// one answer, no error panel.
#[tokio::test]
async fn given_member_question_when_submitted_then_results_panel_shows_single_answer() {
    // GIVEN: A healthy backend that knows about membership
    let server = MockServer::start().await;
    mount_probe(&server, 200).await;
    mount_process(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({ "results": [{ "description": "Email membership@org.com" }] })),
    )
    .await;

    let mut view = PrimaryView::new(client_for(&server));
    view.set_query("How do I become a member?");

    // WHEN: Submitting
    let outcome = view.submit().await;

    // THEN: Exactly one result, not loading, no error
    let expected = ViewState::Results(vec![AnswerRecord::new("Email membership@org.com")]);
    assert_eq!(outcome, SubmitOutcome::Completed(expected.clone()));

    let state = view.store().get().await;
    assert_eq!(state, expected);
    assert!(!state.is_loading());
    assert_eq!(state.error(), None);
    assert_eq!(view.query(), "How do I become a member?", "query is not cleared");
}

/// **VALUE**: Verifies a failing probe stops the flow before any question is sent.
///
/// **BUG THIS CATCHES**: Would catch if the probe result were ignored and `/process` were
/// called against a backend that already reported itself unhealthy.
#[tokio::test]
async fn given_failing_probe_when_submitted_then_shows_fixed_error_without_processing() {
    let server = MockServer::start().await;
    mount_probe(&server, 500).await;
    forbid_process(&server).await;

    let mut view = PrimaryView::new(client_for(&server));
    view.set_query("anything");

    let outcome = view.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Completed(ViewState::Error("Backend server is not responding".to_string()))
    );
    assert_eq!(request_count(&server, "/process").await, 0);
}

#[tokio::test]
async fn given_empty_results_when_submitted_then_results_panel_is_empty_not_error() {
    let server = MockServer::start().await;
    mount_probe(&server, 200).await;
    mount_process(&server, ResponseTemplate::new(200).set_body_json(json!({ "results": [] }))).await;

    let view = PrimaryView::new(client_for(&server));
    view.submit().await;

    assert_eq!(view.store().get().await, ViewState::Results(Vec::new()));
}

#[tokio::test]
async fn given_missing_results_field_when_submitted_then_shows_invalid_format_error() {
    let server = MockServer::start().await;
    mount_probe(&server, 200).await;
    mount_process(&server, ResponseTemplate::new(200).set_body_json(json!({ "answer": "42" }))).await;

    let view = PrimaryView::new(client_for(&server));
    view.submit().await;

    assert_eq!(
        view.store().get().await,
        ViewState::Error("Invalid response format from server".to_string())
    );
}

#[tokio::test]
async fn given_error_body_when_submitted_then_shows_server_message_exactly() {
    let server = MockServer::start().await;
    mount_probe(&server, 200).await;
    mount_process(&server, ResponseTemplate::new(400).set_body_json(json!({ "error": "X" }))).await;

    let view = PrimaryView::new(client_for(&server));
    view.submit().await;

    assert_eq!(view.store().get().await, ViewState::Error("X".to_string()));
}

/// **VALUE**: Verifies unparseable error bodies fall back to the numeric status.
///
/// **BUG THIS CATCHES**: Would catch if an HTML error page from a proxy were shown raw in
/// the error panel, or if the fallback dropped the status code.
#[tokio::test]
async fn given_unparseable_error_body_when_submitted_then_shows_status_fallback() {
    let server = MockServer::start().await;
    mount_probe(&server, 200).await;
    mount_process(&server, ResponseTemplate::new(502).set_body_string("<h1>Bad Gateway</h1>")).await;

    let view = PrimaryView::new(client_for(&server));
    view.submit().await;

    assert_eq!(view.store().get().await, ViewState::Error("Server error: 502".to_string()));
}

#[tokio::test]
async fn given_unreachable_backend_when_submitted_then_shows_transport_message() {
    let view = PrimaryView::new(BotClient::new(UNREACHABLE_BASE_URL).unwrap());

    view.submit().await;

    let state = view.store().get().await;
    let message = state.error().expect("should end in the error panel");
    assert_ne!(message, "Backend server is not responding");
    assert!(message.contains("127.0.0.1:1"), "unexpected message: {message}");
    assert!(!state.is_loading());
}

/// **VALUE**: Verifies loading covers the whole span from submission to outcome.
///
/// **WHY THIS MATTERS**: The Ask button is disabled and relabelled only while loading.
/// If loading dropped early, users could submit twice; if it stuck, the form would lock.
///
/// **BUG THIS CATCHES**: Would catch if loading were cleared after the probe instead of
/// after `/process`, or never cleared on completion.
#[tokio::test]
async fn given_slow_backend_when_sampling_mid_flight_then_loading_until_outcome() {
    // GIVEN: A backend that takes a while to answer
    let server = MockServer::start().await;
    mount_probe(&server, 200).await;
    mount_process(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(results_body(&["slow answer"]))
            .set_delay(Duration::from_millis(500)),
    )
    .await;

    let mut view = PrimaryView::new(client_for(&server));
    view.set_query("slow?");
    let observer = view.clone();
    assert_eq!(observer.submit_label().await, SUBMIT_LABEL);

    // WHEN: Submitting in the background and sampling while the answer is pending
    let handle = tokio::spawn(async move { view.submit().await });
    tokio::time::sleep(Duration::from_millis(150)).await;

    // THEN: Loading mid-flight
    assert!(observer.store().is_loading().await, "should be loading mid-flight");
    assert_eq!(observer.store().get().await, ViewState::Requesting);
    assert_eq!(observer.submit_label().await, SUBMIT_LOADING_LABEL);

    // AND: Not loading once the flow completes
    handle.await.unwrap();
    assert!(!observer.store().is_loading().await);
    assert_eq!(observer.submit_label().await, SUBMIT_LABEL);
}

/// **VALUE**: Verifies a second submission is refused while the first is in flight.
///
/// **BUG THIS CATCHES**: Would catch removal of the loading guard, which would issue a
/// second probe and `/process` call and let two answers race for the results panel.
#[tokio::test]
async fn given_submission_in_flight_when_submitting_again_then_returns_busy() {
    let server = MockServer::start().await;
    mount_probe(&server, 200).await;
    mount_process(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(results_body(&["only once"]))
            .set_delay(Duration::from_millis(400)),
    )
    .await;

    let view = PrimaryView::new(client_for(&server));
    let first = view.clone();
    let handle = tokio::spawn(async move { first.submit().await });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let second = view.submit().await;

    assert_eq!(second, SubmitOutcome::Busy);
    assert!(matches!(handle.await.unwrap(), SubmitOutcome::Completed(ViewState::Results(_))));
    assert_eq!(request_count(&server, "/process").await, 1);
}

/// **VALUE**: Verifies a new submission clears the previous error before showing results.
#[tokio::test]
async fn given_previous_error_when_submitting_successfully_then_error_is_replaced() {
    let server = MockServer::start().await;
    mount_probe(&server, 200).await;
    mount_process(&server, ResponseTemplate::new(200).set_body_json(results_body(&["fresh"]))).await;

    let view = PrimaryView::new(client_for(&server));
    view.store().set(ViewState::Error("stale".to_string())).await;

    view.submit().await;

    let state = view.store().get().await;
    assert_eq!(state.error(), None);
    assert_eq!(state.results().map(<[AnswerRecord]>::len), Some(1));
}

#[test]
fn given_custom_bot_toggle_when_switching_then_placeholder_follows_mode() {
    let mut view = PrimaryView::new(BotClient::new(UNREACHABLE_BASE_URL).unwrap());

    assert!(!view.custom_bot());
    assert_eq!(view.placeholder(), "e.g. How do I become a member?");

    view.set_custom_bot(true);

    assert_eq!(view.placeholder(), "Ask your uploaded bot...");
}
