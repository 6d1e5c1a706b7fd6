use buildabot::commands::{ask, interactive, upload, user_bot};
use buildabot::error::BuildabotError;

use client_core::bot_client::BotClient;
use client_core::view::ViewState;

use serde_json::json;
use tempfile::TempDir;
use tokio::io::BufReader;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Commands driven end to end against a mock backend, output captured
// ============================================================================

async fn healthy_backend(answer: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "results": [{ "description": answer }] })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    server
}

fn client_for(server: &MockServer) -> BotClient {
    BotClient::new(&server.uri()).unwrap()
}

fn output(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).expect("output should be utf-8")
}

/// **VALUE**: Verifies the `ask` command prints the loading line and the answer panel.
#[tokio::test]
async fn given_member_question_when_running_ask_then_prints_answer_panel() {
    let server = healthy_backend("Email membership@org.com").await;
    let mut out = Vec::new();

    let state = ask::run(
        client_for(&server),
        "How do I become a member?".to_string(),
        false,
        None,
        &mut out,
    )
    .await
    .unwrap();

    let printed = output(out);
    assert_eq!(state.results().map(|results| results.len()), Some(1));
    assert!(printed.contains("Thinking...\n"));
    assert!(printed.ends_with("Answer\n  Email membership@org.com\n"), "got: {printed}");
}

#[tokio::test]
async fn given_custom_bot_with_file_when_running_ask_then_uploads_before_asking() {
    let dir = TempDir::new().unwrap();
    let kb = dir.path().join("handbook.txt");
    std::fs::write(&kb, "Dues are paid in March.").unwrap();
    let server = healthy_backend("In March.").await;
    let mut out = Vec::new();

    ask::run(client_for(&server), "When are dues paid?".to_string(), true, Some(kb), &mut out)
        .await
        .unwrap();

    let printed = output(out);
    let upload_at = printed
        .find("✅ File uploaded successfully! You can now ask your bot.")
        .expect("upload notice printed");
    let answer_at = printed.find("  In March.").expect("answer printed");
    assert!(upload_at < answer_at);
}

#[tokio::test]
async fn given_failing_probe_when_running_ask_then_prints_error_panel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let mut out = Vec::new();

    let state = ask::run(client_for(&server), "hi".to_string(), false, None, &mut out)
        .await
        .unwrap();

    assert_eq!(state, ViewState::Error("Backend server is not responding".to_string()));
    assert!(output(out).ends_with(
        "Backend server is not responding\nPlease check the log for more details.\n"
    ));
}

#[tokio::test]
async fn given_non_txt_file_when_running_ask_then_returns_input_error() {
    let server = healthy_backend("unused").await;
    let mut out = Vec::new();

    let result = ask::run(
        client_for(&server),
        "hi".to_string(),
        true,
        Some("slides.pdf".into()),
        &mut out,
    )
    .await;

    assert!(matches!(result, Err(BuildabotError::Input { .. })));
}

/// **VALUE**: Verifies `upload` without a file refuses locally.
#[tokio::test]
async fn given_no_file_when_running_upload_then_prints_select_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let mut out = Vec::new();

    let notice = upload::run(client_for(&server), None, &mut out).await.unwrap();

    assert!(!notice.is_success());
    assert_eq!(output(out), "Please upload a .txt file first.\n");
}

/// **VALUE**: Verifies a whitespace question on the user-bot page sends nothing and
/// prints no response block.
#[tokio::test]
async fn given_whitespace_question_when_running_user_bot_then_prints_title_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let mut out = Vec::new();

    let state = user_bot::run(client_for(&server), "   ".to_string(), None, &mut out)
        .await
        .unwrap();

    assert_eq!(state, ViewState::Idle);
    assert_eq!(output(out), "🧠 Upload Your Own Bot\n");
}

#[tokio::test]
async fn given_file_and_question_when_running_user_bot_then_uploads_and_prints_response() {
    let dir = TempDir::new().unwrap();
    let kb = dir.path().join("faq.txt");
    std::fs::write(&kb, "Q: hours? A: 9 to 5").unwrap();
    let server = healthy_backend("9 to 5").await;
    let mut out = Vec::new();

    user_bot::run(client_for(&server), "What are the hours?".to_string(), Some(kb), &mut out)
        .await
        .unwrap();

    assert_eq!(
        output(out),
        "🧠 Upload Your Own Bot\nFile uploaded successfully. You can now ask questions!\nResponse:\n  9 to 5\n"
    );
}

/// **VALUE**: Scripted interactive session covering toggle, selection, upload and asking.
///
/// **WHY THIS MATTERS**: The session keeps one view alive across lines; this checks that
/// the selection and mode persist and that an empty line is still submitted verbatim.
#[tokio::test]
async fn given_scripted_session_when_running_interactive_then_view_persists_across_lines() {
    let dir = TempDir::new().unwrap();
    let kb = dir.path().join("kb.txt");
    std::fs::write(&kb, "The office is in Lisbon.").unwrap();

    let server = healthy_backend("Lisbon").await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .and(body_json(json!({ "description": "" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .with_priority(1)
        .mount(&server)
        .await;

    let script = format!(
        ":upload\n:custom on\n:upload\n:file {}\n:upload\nWhere is the office?\n\n:bogus\n:quit\nnever read\n",
        kb.display()
    );
    let input = BufReader::new(script.as_bytes());
    let mut out = Vec::new();

    interactive::run(client_for(&server), input, &mut out).await.unwrap();

    let printed = output(out);
    assert!(printed.contains("Turn on custom bot mode first (:custom on)."));
    assert!(printed.contains("Please upload a .txt file first."));
    assert!(printed.contains("Selected kb.txt"));
    assert!(printed.contains("✅ File uploaded successfully! You can now ask your bot."));
    assert!(printed.contains("Answer\n  Lisbon\n"));
    assert!(printed.contains("Unknown command: :bogus"));
    assert!(printed.contains("Ask your uploaded bot... > "));
    assert!(!printed.contains("never read"));
}
