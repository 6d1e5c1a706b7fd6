use crate::helpers::{UNREACHABLE_BASE_URL, client_for, mount_process, request_count, results_body};

use client_core::bot_client::BotClient;
use client_core::view::flow::NO_RESPONSE_TEXT;
use client_core::view::secondary::{ASK_LABEL, ASK_LOADING_LABEL};
use client_core::view::{SecondaryView, SubmitOutcome, ViewState};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Secondary view: ask without probe, single inline response
// ============================================================================

/// **VALUE**: Verifies whitespace-only questions are dropped before any request.
///
/// **WHY THIS MATTERS**: The previous answer must stay on screen; an accidental Ask on an
/// empty box should neither call the backend nor blank the response area.
#[tokio::test]
async fn given_whitespace_question_when_asking_then_no_request_and_response_unchanged() {
    // GIVEN: A view already showing an answer
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body(&["unused"])))
        .expect(0)
        .mount(&server)
        .await;

    let mut view = SecondaryView::new(client_for(&server));
    view.store().set(ViewState::Response("previous answer".to_string())).await;
    view.set_question("   ");

    // WHEN: Asking
    let outcome = view.ask().await;

    // THEN: Nothing was sent and the response is untouched
    assert_eq!(outcome, SubmitOutcome::BlankQuery);
    assert_eq!(
        view.store().get().await,
        ViewState::Response("previous answer".to_string())
    );
}

#[tokio::test]
async fn given_answer_when_asking_then_shows_first_description_without_probe() {
    let server = MockServer::start().await;
    mount_process(
        &server,
        ResponseTemplate::new(200).set_body_json(results_body(&["first answer", "second answer"])),
    )
    .await;

    let mut view = SecondaryView::new(client_for(&server));
    view.set_question("What is the handbook about?");

    let outcome = view.ask().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Completed(ViewState::Response("first answer".to_string()))
    );
    assert_eq!(request_count(&server, "/test").await, 0, "secondary view never probes");
}

/// **VALUE**: Verifies every "no usable first result" shape collapses to the fallback text.
///
/// **BUG THIS CATCHES**: Would catch an index panic on an empty list, or an empty string
/// being shown instead of the fallback.
#[tokio::test]
async fn given_unusable_first_result_when_asking_then_shows_no_response() {
    let bodies = [
        json!({ "results": [] }),
        json!({ "results": [{ "name": "AI Response" }] }),
        json!({ "results": [{ "description": "" }] }),
        json!({ "message": "no results field" }),
    ];

    for body in bodies {
        let server = MockServer::start().await;
        mount_process(&server, ResponseTemplate::new(200).set_body_json(body.clone())).await;

        let mut view = SecondaryView::new(client_for(&server));
        view.set_question("hello?");
        view.ask().await;

        assert_eq!(
            view.store().get().await,
            ViewState::Response(NO_RESPONSE_TEXT.to_string()),
            "body {body} should fall back"
        );
    }
}

/// **VALUE**: Verifies transport and server failures take the explicit fallback branch.
///
/// **WHY THIS MATTERS**: This view has no error panel. A failure must still end loading
/// and show the fallback rather than leaving the view stuck in "Asking...".
#[tokio::test]
async fn given_failing_backend_when_asking_then_shows_no_response_and_stops_loading() {
    let server = MockServer::start().await;
    mount_process(&server, ResponseTemplate::new(500).set_body_string("oops")).await;

    for client in [client_for(&server), BotClient::new(UNREACHABLE_BASE_URL).unwrap()] {
        let mut view = SecondaryView::new(client);
        view.set_question("hello?");

        view.ask().await;

        let state = view.store().get().await;
        assert_eq!(state, ViewState::Response(NO_RESPONSE_TEXT.to_string()));
        assert!(!state.is_loading());
    }
}

/// **VALUE**: Verifies overlapping asks are allowed here, unlike the primary view.
#[tokio::test]
async fn given_ask_in_flight_when_asking_again_then_both_requests_are_sent() {
    let server = MockServer::start().await;
    mount_process(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(results_body(&["answer"]))
            .set_delay(Duration::from_millis(300)),
    )
    .await;

    let mut view = SecondaryView::new(client_for(&server));
    view.set_question("twice?");
    let first = view.clone();

    let handle = tokio::spawn(async move { first.ask().await });
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(view.ask_label().await, ASK_LOADING_LABEL);

    let second = view.ask().await;

    assert!(matches!(second, SubmitOutcome::Completed(_)));
    assert!(matches!(handle.await.unwrap(), SubmitOutcome::Completed(_)));
    assert_eq!(request_count(&server, "/process").await, 2);
    assert_eq!(view.ask_label().await, ASK_LABEL);
}
