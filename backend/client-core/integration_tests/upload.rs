use crate::helpers::{UNREACHABLE_BASE_URL, client_for, write_knowledge_base};

use client_core::bot_client::BotClient;
use client_core::view::{Notice, PrimaryView, SecondaryView, UploadFlow, UploadNotices};

use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Upload flow shared by both views
// ============================================================================

/// **VALUE**: Verifies that uploading without a selection never touches the network.
///
/// **BUG THIS CATCHES**: Would catch if an empty multipart form were sent, which the
/// backend would answer with an error the user never asked for.
#[tokio::test]
async fn given_no_file_selected_when_uploading_then_notifies_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let primary = PrimaryView::new(client_for(&server));
    let secondary = SecondaryView::new(client_for(&server));

    assert_eq!(
        primary.upload().await,
        Notice::NoFileSelected("Please upload a .txt file first.")
    );
    assert_eq!(
        secondary.upload().await,
        Notice::NoFileSelected("Please select a .txt file first.")
    );
}

/// **VALUE**: Verifies the file travels as multipart field `file` with its name and content.
///
/// **WHY THIS MATTERS**: The backend reads exactly `request.files["file"]`; any other
/// field name is a silent failure on the server side.
#[tokio::test]
async fn given_selected_file_when_uploading_then_sends_multipart_file_field() {
    let dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"handbook.txt\""))
        .and(body_string_contains("Members pay dues yearly."))
        .respond_with(ResponseTemplate::new(200).set_body_string("ignored"))
        .expect(1)
        .mount(&server)
        .await;

    let mut view = PrimaryView::new(client_for(&server));
    view.set_custom_bot(true);
    view.select_file(write_knowledge_base(&dir, "handbook.txt", "Members pay dues yearly."));

    let notice = view.upload().await;

    assert!(notice.is_success());
    assert_eq!(
        notice.message(),
        "✅ File uploaded successfully! You can now ask your bot."
    );
    assert!(view.selected_file().is_some(), "selection is kept after upload");
}

#[tokio::test]
async fn given_rejected_upload_when_uploading_then_returns_view_failure_notice() {
    let dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(413))
        .mount(&server)
        .await;

    let mut primary = PrimaryView::new(client_for(&server));
    primary.select_file(write_knowledge_base(&dir, "big.txt", "lots of text"));
    let mut secondary = SecondaryView::new(client_for(&server));
    secondary.select_file(write_knowledge_base(&dir, "big.txt", "lots of text"));

    assert_eq!(primary.upload().await, Notice::Failed("❌ Upload failed."));
    assert_eq!(secondary.upload().await, Notice::Failed("Failed to upload file."));
}

#[tokio::test]
async fn given_same_selection_when_uploading_twice_then_resends_file() {
    let dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(&server)
        .await;

    let mut view = SecondaryView::new(client_for(&server));
    view.select_file(write_knowledge_base(&dir, "faq.txt", "Q: A"));

    assert_eq!(
        view.upload().await,
        Notice::Uploaded("File uploaded successfully. You can now ask questions!")
    );
    assert!(view.upload().await.is_success());
}

/// **VALUE**: Verifies unreadable files and dead backends end in the failure notice.
///
/// **BUG THIS CATCHES**: Would catch an I/O or transport error escaping as a panic or
/// being reported as a successful upload.
#[tokio::test]
async fn given_missing_file_or_unreachable_backend_when_uploading_then_fails_gracefully() {
    let dir = TempDir::new().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let deleted = write_knowledge_base(&dir, "gone.txt", "bye");
    std::fs::remove_file(deleted.path()).unwrap();
    let flow = UploadFlow::new(client_for(&server), UploadNotices::PRIMARY);
    assert_eq!(flow.upload(Some(&deleted)).await, Notice::Failed("❌ Upload failed."));

    let present = write_knowledge_base(&dir, "here.txt", "hello");
    let offline = UploadFlow::new(BotClient::new(UNREACHABLE_BASE_URL).unwrap(), UploadNotices::SECONDARY);
    assert_eq!(offline.upload(Some(&present)).await, Notice::Failed("Failed to upload file."));
}
