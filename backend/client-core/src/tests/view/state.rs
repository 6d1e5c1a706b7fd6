use crate::view::state::{ViewState, ViewStore};

use models::AnswerRecord;

#[test]
fn given_each_state_when_checking_loading_then_only_probing_and_requesting_load() {
    assert!(ViewState::Probing.is_loading());
    assert!(ViewState::Requesting.is_loading());
    assert!(!ViewState::Idle.is_loading());
    assert!(!ViewState::Results(Vec::new()).is_loading());
    assert!(!ViewState::Response("No response".to_string()).is_loading());
    assert!(!ViewState::Error("boom".to_string()).is_loading());
}

#[test]
fn given_terminal_states_when_reading_accessors_then_only_matching_variant_answers() {
    let results = ViewState::Results(vec![AnswerRecord::new("a")]);
    let error = ViewState::Error("boom".to_string());

    assert_eq!(results.results().map(<[AnswerRecord]>::len), Some(1));
    assert_eq!(results.error(), None);
    assert_eq!(error.error(), Some("boom"));
    assert_eq!(error.results(), None);
    assert_eq!(error.response(), None);
}

/// **VALUE**: Verifies the store refuses to start a second flow while one is loading.
///
/// **WHY THIS MATTERS**: This is the primary view's disabled Ask button. Without it two
/// overlapping submissions race to write the results panel.
#[tokio::test]
async fn given_loading_store_when_trying_to_begin_then_refuses_and_keeps_state() {
    let store = ViewStore::new();
    assert!(store.try_begin(ViewState::Probing).await);

    let started_again = store.try_begin(ViewState::Probing).await;

    assert!(!started_again);
    assert_eq!(store.get().await, ViewState::Probing);
}

#[tokio::test]
async fn given_terminal_state_when_trying_to_begin_then_replaces_previous_outcome() {
    let store = ViewStore::new();
    store.set(ViewState::Error("old".to_string())).await;

    assert!(store.try_begin(ViewState::Requesting).await);
    assert_eq!(store.get().await, ViewState::Requesting);
}

#[tokio::test]
async fn given_cloned_store_when_setting_then_both_handles_observe_change() {
    let store = ViewStore::new();
    let observer = store.clone();

    store.set(ViewState::Results(Vec::new())).await;

    assert_eq!(observer.get().await, ViewState::Results(Vec::new()));
}
