use crate::HttpStatusCode;

/// **VALUE**: Verifies the success class boundaries used for probe and upload outcomes.
///
/// **BUG THIS CATCHES**: Would catch if 3xx responses or 299 were misclassified, which
/// would flip an upload notice or a probe decision.
#[test]
fn given_status_codes_when_checking_success_then_only_2xx_succeeds() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(199).is_success());
    assert!(!HttpStatusCode(302).is_success());
    assert!(!HttpStatusCode(500).is_success());
}

#[test]
fn given_status_codes_when_categorizing_then_client_and_server_ranges_are_distinct() {
    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(404).is_server_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(503).is_client_error());
}

#[test]
fn given_status_code_when_displayed_then_prints_bare_number() {
    assert_eq!(HttpStatusCode::from(418).to_string(), "418");
}
