use crate::render;

use client_core::view::{Notice, ViewState};
use models::AnswerRecord;

#[test]
fn given_single_result_when_rendering_primary_then_shows_answer_panel() {
    let state = ViewState::Results(vec![AnswerRecord::new("Email membership@org.com")]);

    assert_eq!(render::primary(&state), "Answer\n  Email membership@org.com\n");
}

#[test]
fn given_multiline_results_when_rendering_primary_then_indents_and_separates_records() {
    let state = ViewState::Results(vec![
        AnswerRecord::new("line one\nline two"),
        AnswerRecord::new("second"),
    ]);

    assert_eq!(
        render::primary(&state),
        "Answer\n  line one\n  line two\n  ----\n  second\n"
    );
}

/// **VALUE**: Verifies an empty result list renders nothing rather than an empty panel
/// or an error.
#[test]
fn given_empty_results_or_idle_when_rendering_primary_then_renders_nothing() {
    assert_eq!(render::primary(&ViewState::Results(Vec::new())), "");
    assert_eq!(render::primary(&ViewState::Idle), "");
}

#[test]
fn given_error_when_rendering_primary_then_shows_message_and_help() {
    let state = ViewState::Error("Backend server is not responding".to_string());

    assert_eq!(
        render::primary(&state),
        "Backend server is not responding\nPlease check the log for more details.\n"
    );
}

#[test]
fn given_loading_states_when_rendering_then_shows_each_views_label() {
    assert_eq!(render::primary(&ViewState::Probing), "Thinking...\n");
    assert_eq!(render::primary(&ViewState::Requesting), "Thinking...\n");
    assert_eq!(render::secondary(&ViewState::Requesting), "Asking...\n");
}

#[test]
fn given_response_when_rendering_secondary_then_shows_response_block() {
    let state = ViewState::Response("No response".to_string());

    assert_eq!(render::secondary(&state), "Response:\n  No response\n");
    assert_eq!(render::secondary(&ViewState::Idle), "");
}

#[test]
fn given_notice_when_rendering_then_prints_message_line() {
    let notice = Notice::NoFileSelected("Please upload a .txt file first.");

    assert_eq!(render::notice(&notice), "Please upload a .txt file first.\n");
}

#[test]
fn given_mode_when_rendering_header_then_names_knowledge_base() {
    let header = render::primary_header(true);

    assert!(header.starts_with("Build-a-BOT\n"));
    assert!(header.contains("Using your uploaded .txt file"));
    assert!(render::primary_header(false).contains("default knowledge base"));
}
