use crate::{ModelError, UploadedFile};

#[test]
fn given_txt_path_when_selecting_then_keeps_path_and_file_name() {
    let file = UploadedFile::select("/tmp/handbook.txt").unwrap();

    assert_eq!(file.file_name(), "handbook.txt");
    assert_eq!(file.path().to_str(), Some("/tmp/handbook.txt"));
}

/// **VALUE**: Verifies the picker's `.txt` filter is case-insensitive.
///
/// **BUG THIS CATCHES**: Would catch a byte-exact extension comparison rejecting
/// files saved as `NOTES.TXT` on case-insensitive filesystems.
#[test]
fn given_uppercase_extension_when_selecting_then_accepts_file() {
    assert!(UploadedFile::select("NOTES.TXT").is_ok());
}

/// **VALUE**: Verifies non-text selections are refused before any upload is attempted.
///
/// **WHY THIS MATTERS**: The backend indexes the upload as plain text. A PDF or an
/// extensionless path slipping through would be sent and silently produce garbage answers.
#[test]
fn given_non_txt_path_when_selecting_then_returns_validation_error() {
    for path in ["report.pdf", "README", "archive.txt.gz"] {
        match UploadedFile::select(path) {
            Err(ModelError::Validation { message, .. }) => {
                assert!(message.contains("Only .txt files"), "unexpected message: {message}");
            }
            Ok(file) => panic!("{path} should be rejected, got {file:?}"),
        }
    }
}

#[test]
fn given_path_without_file_name_when_selecting_then_returns_validation_error() {
    let result = UploadedFile::select("/");

    assert!(matches!(result, Err(ModelError::Validation { .. })));
}
