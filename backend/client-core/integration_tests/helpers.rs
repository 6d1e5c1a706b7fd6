use client_core::bot_client::BotClient;

use models::UploadedFile;

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Nothing listens here; connecting fails immediately.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1";

pub fn client_for(server: &MockServer) -> BotClient {
    BotClient::new(&server.uri()).expect("mock server uri should parse")
}

pub async fn mount_probe(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_json(json!({ "status": "ok", "message": "Backend is running!" })),
        )
        .mount(server)
        .await;
}

pub async fn mount_process(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Fail the test on drop if `/process` is ever called.
pub async fn forbid_process(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(0)
        .mount(server)
        .await;
}

pub fn results_body(descriptions: &[&str]) -> Value {
    let results: Vec<Value> = descriptions
        .iter()
        .map(|description| json!({ "name": "AI Response", "description": description, "web_address": "#" }))
        .collect();

    json!({ "results": results })
}

pub fn write_knowledge_base(dir: &TempDir, name: &str, contents: &str) -> UploadedFile {
    let file_path = dir.path().join(name);
    std::fs::write(&file_path, contents).expect("temp file should be writable");
    UploadedFile::select(file_path).expect("txt file should be selectable")
}

pub async fn request_count(server: &MockServer, endpoint: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == endpoint)
        .count()
}
