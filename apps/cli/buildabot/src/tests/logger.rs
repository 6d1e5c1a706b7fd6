// Unit tests for logger initialization
// Kept in a single test: the installed logger is process-global.

use crate::error::BuildabotError;
use crate::logger::{LOG_FILE_NAME, initialize};

use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

/// **VALUE**: Verifies the full initialization lifecycle: a bad directory fails without
/// installing anything, a good one succeeds, and repeat calls are harmless.
///
/// **WHY THIS MATTERS**: `main` calls initialize before anything else. A panic on an
/// unwritable directory, or on a second call, would crash the CLI before it prints.
///
/// **BUG THIS CATCHES**: Would catch if `fern::log_file()` were unwrapped, if a failed
/// attempt blocked later attempts, or if the guard against double installation broke.
#[test]
#[serial]
fn given_logger_lifecycle_when_initializing_then_fails_cleanly_then_is_idempotent() {
    // GIVEN: A path that cannot hold a log file
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN/THEN: First attempt fails with an app error
    match initialize(&invalid_dir) {
        Err(BuildabotError::Buildabot { message, .. }) => {
            assert!(message.contains("log file"), "unexpected message: {message}");
        }
        other => panic!("expected Buildabot error, got {other:?}"),
    }

    // WHEN/THEN: A writable directory succeeds and creates the log file
    let temp_dir = TempDir::new().unwrap();
    assert!(initialize(temp_dir.path()).is_ok(), "first valid initialization should succeed");
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());

    // WHEN/THEN: Later calls are no-ops, whatever the directory
    assert!(initialize(temp_dir.path()).is_ok(), "second initialization should be idempotent");
    assert!(initialize(&invalid_dir).is_ok(), "no reinstall after success");
}
