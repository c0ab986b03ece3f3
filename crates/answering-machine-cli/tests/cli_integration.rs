//! CLI Integration Tests
//!
//! These tests verify the CLI commands work end-to-end against the local
//! store in a temporary data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory and no ambient config
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("answering-machine").expect("Failed to find answering-machine binary");
    cmd.env_remove("ANSWERING_MACHINE_ENDPOINT")
        .env_remove("ANSWERING_MACHINE_TOKEN")
        .env_remove("ANSWERING_MACHINE_USER")
        .env_remove("RUST_LOG");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

fn as_alice(data_dir: &TempDir) -> Command {
    let mut cmd = cli_cmd(data_dir);
    cmd.arg("--user").arg("alice");
    cmd
}

// ============================================================================
// Info
// ============================================================================

#[test]
fn test_info_shows_session() {
    let data_dir = TempDir::new().unwrap();

    as_alice(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Answering Machine"))
        .stdout(predicate::str::contains("Signed in as: alice"))
        .stdout(predicate::str::contains("Backend: local"));
}

// ============================================================================
// List
// ============================================================================

#[test]
fn test_list_anonymous_shows_landing() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sign up or log in to leave a message"));
}

#[test]
fn test_list_empty() {
    let data_dir = TempDir::new().unwrap();

    as_alice(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(no messages yet)"));
}

#[test]
fn test_list_fetch_failure_shows_empty_table_and_notice() {
    let data_dir = TempDir::new().unwrap();

    // Nothing listens on the discard port, so the request fails
    as_alice(&data_dir)
        .args(["--endpoint", "http://127.0.0.1:9", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no messages yet)"))
        .stderr(predicate::str::contains("Could not load your messages"));
}

// ============================================================================
// Send
// ============================================================================

#[test]
fn test_send_then_list_shows_first_line() {
    let data_dir = TempDir::new().unwrap();

    as_alice(&data_dir)
        .args(["send", "hello\nworld"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Message sent."))
        .stdout(predicate::str::contains("Message sent at").not());

    as_alice(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"))
        .stdout(predicate::str::contains("world").not());

    as_alice(&data_dir)
        .args(["list", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("world"));
}

#[test]
fn test_send_rejects_empty_and_too_long() {
    let data_dir = TempDir::new().unwrap();

    as_alice(&data_dir)
        .args(["send", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("message is empty"));

    as_alice(&data_dir)
        .args(["send", &"x".repeat(100)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("the limit is 99"));

    as_alice(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(no messages yet)"));
}

#[test]
fn test_send_requires_sign_in() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["send", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not signed in"));
}

#[test]
fn test_messages_are_per_user() {
    let data_dir = TempDir::new().unwrap();

    as_alice(&data_dir).args(["send", "from alice"]).assert().success();

    cli_cmd(&data_dir)
        .args(["--user", "bob", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no messages yet)"));
}
