// Unit tests for decoding the `/process` success body

use crate::bot_client::{BotClient, decode_results};
use crate::error::BotClientError;

use models::AnswerRecord;
use serde_json::json;

/// **VALUE**: Verifies an empty `results` array is an answer, not a malformed response.
///
/// **WHY THIS MATTERS**: An empty list and a missing field mean different things to the
/// user: "no answers" versus "the server is broken".
///
/// **BUG THIS CATCHES**: Would catch a truthiness check that treats `[]` as absent.
#[test]
fn given_empty_results_array_when_decoding_then_returns_empty_list() {
    let results = decode_results(json!({ "results": [] })).unwrap();

    assert!(results.is_empty());
}

#[test]
fn given_results_with_records_when_decoding_then_preserves_order() {
    let body = json!({
        "results": [
            { "description": "first" },
            { "description": "second", "name": "AI Response", "web_address": "#" }
        ]
    });

    let results = decode_results(body).unwrap();

    assert_eq!(
        results,
        vec![
            AnswerRecord::new("first"),
            AnswerRecord::new("second")
                .with_name("AI Response")
                .with_web_address("#"),
        ]
    );
}

/// **VALUE**: Verifies every falsy or non-list `results` value is reported as malformed.
///
/// **BUG THIS CATCHES**: Would catch if `null` or `0` slipped through as an empty list,
/// or if a bare string was rendered as an answer.
#[test]
fn given_missing_or_falsy_results_when_decoding_then_returns_malformed_response() {
    let bodies = [
        json!({}),
        json!({ "results": null }),
        json!({ "results": false }),
        json!({ "results": 0 }),
        json!({ "results": "" }),
        json!({ "results": "an answer" }),
        json!({ "results": { "description": "x" } }),
        json!([{ "description": "x" }]),
        json!(null),
    ];

    for body in bodies {
        let result = decode_results(body.clone());
        assert!(
            matches!(result, Err(BotClientError::MalformedResponse { .. })),
            "{body} should be malformed, got {result:?}"
        );
    }
}

#[test]
fn given_base_url_without_trailing_slash_when_creating_client_then_normalizes_path() {
    let client = BotClient::new("http://localhost:5001/api").unwrap();

    assert_eq!(client.base_url().as_str(), "http://localhost:5001/api/");
}

#[test]
fn given_non_base_url_when_creating_client_then_returns_url_parse_error() {
    let result = BotClient::new("mailto:bot@example.com");

    assert!(matches!(result, Err(BotClientError::UrlParse { .. })));
}

#[test]
fn given_garbage_url_when_creating_client_then_returns_url_parse_error() {
    let result = BotClient::new("not a url");

    assert!(matches!(result, Err(BotClientError::UrlParse { .. })));
}
