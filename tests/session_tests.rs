//! Integration tests for session commands and reads while offline

use predicates::prelude::*;

mod common;
use common::{blockout_cmd, outbox, workspace};

#[test]
fn test_create_session_is_queued() {
    let temp = workspace("t1", "trainer");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["session", "create", "--date", "tomorrow", "--time", "15:00"])
        .args(["--duration", "45m", "--location", "Studio B"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("New session created for "))
        .stdout(predicate::str::contains("at 3:00 PM."));

    let entries = outbox(temp.path());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["operation"], "createSession");

    let payload = &entries[0]["payload"];
    assert_eq!(payload["title"], "Available Session");
    assert_eq!(payload["status"], "available");
    assert_eq!(payload["duration"], 45);
    assert_eq!(payload["location"], "Studio B");
    assert!(payload["end"].as_str().unwrap().ends_with("T15:45:00"));
}

#[test]
fn test_client_cannot_create_session() {
    let temp = workspace("c1", "client");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["session", "create", "--date", "tomorrow", "--time", "15:00"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Permission denied"));

    assert!(outbox(temp.path()).is_empty());
}

#[test]
fn test_client_books_demo_session() {
    let temp = workspace("c1", "client");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["session", "book", "demo-1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Session successfully booked for "))
        .stdout(predicate::str::contains("at 9:00 AM."));

    let entries = outbox(temp.path());
    assert_eq!(entries[0]["operation"], "bookSession");
    assert_eq!(entries[0]["payload"]["sessionId"], "demo-1");
}

#[test]
fn test_cancel_unknown_session_still_queued() {
    let temp = workspace("c1", "client");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["session", "cancel", "s99"])
        .assert()
        .success()
        .stdout("Session s99 cancelled.\n");

    assert_eq!(outbox(temp.path())[0]["operation"], "cancelSession");
}

#[test]
fn test_confirm_requires_staff() {
    let client = workspace("c1", "client");
    blockout_cmd()
        .current_dir(client.path())
        .args(["session", "confirm", "demo-2"])
        .assert()
        .code(5);
    assert!(outbox(client.path()).is_empty());

    let admin = workspace("a1", "admin");
    blockout_cmd()
        .current_dir(admin.path())
        .args(["session", "confirm", "demo-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("at 11:00 AM has been confirmed."));
    assert_eq!(outbox(admin.path())[0]["operation"], "confirmSession");
}

#[test]
fn test_offline_reads_fall_back_to_demo_data() {
    let temp = workspace("t1", "trainer");

    blockout_cmd()
        .current_dir(temp.path())
        .arg("sessions")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo-1"))
        .stdout(predicate::str::contains("Equipment maintenance"))
        .stderr(predicate::str::contains("using demo sessions"));

    blockout_cmd()
        .current_dir(temp.path())
        .arg("trainers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jordan Blake"));
}

#[test]
fn test_log_filter_silences_fallback_warning() {
    let temp = workspace("t1", "trainer");

    blockout_cmd()
        .current_dir(temp.path())
        .env("BLOCKOUT_LOG", "error")
        .arg("trainers")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
