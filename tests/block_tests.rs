//! Integration tests for blocking and unblocking time offline

use predicates::prelude::*;

mod common;
use common::{blockout_cmd, outbox, workspace};

#[test]
fn test_trainer_weekly_block_is_queued_once() {
    let temp = workspace("t1", "trainer");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["block", "--date", "next monday", "--time", "09:00"])
        .args(["--reason", "Conference", "--type", "weekly"])
        .args(["--days", "mon,wed", "--weeks", "2", "--trainer", "t2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Weekly blocked time created for 2 weeks starting from Monday,",
        ))
        .stdout(predicate::str::contains("at 9:00 AM for your personal schedule."));

    let entries = outbox(temp.path());
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry["operation"], "createBlockedTime");
    let payload = &entry["payload"];
    assert_eq!(payload["trainerId"], "t1");
    assert_eq!(payload["status"], "blocked");
    assert_eq!(payload["blockType"], "weekly");
    assert_eq!(payload["isRecurring"], true);
    assert_eq!(payload["createdByRole"], "trainer");
    assert_eq!(payload["reason"], "Conference");
    assert_eq!(payload["recurringPattern"]["daysOfWeek"], serde_json::json!([1, 3]));
    assert_eq!(payload["recurringPattern"]["numberOfWeeks"], 2);
    assert!(payload["title"].as_str().unwrap().starts_with("Conference - "));
}

#[test]
fn test_admin_block_without_trainer_is_global() {
    let temp = workspace("a1", "admin");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["block", "--date", "tomorrow", "--time", "2:30pm"])
        .args(["--reason", "Maintenance", "--duration", "2h"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "at 2:30 PM as a global block affecting all trainers.",
        ));

    let entries = outbox(temp.path());
    let payload = &entries[0]["payload"];
    assert!(payload.get("trainerId").is_none());
    assert_eq!(payload["duration"], 120);
    assert_eq!(payload["isRecurring"], false);
    assert_eq!(payload["title"], "Maintenance - All Trainers");
}

#[test]
fn test_empty_reason_is_rejected_and_nothing_queued() {
    let temp = workspace("a1", "admin");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["block", "--date", "tomorrow", "--time", "09:00"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Cannot submit this request"));

    assert!(outbox(temp.path()).is_empty());
}

#[test]
fn test_weekly_without_days_is_rejected() {
    let temp = workspace("a1", "admin");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["block", "--date", "tomorrow", "--time", "09:00"])
        .args(["--reason", "Travel", "--type", "weekly", "--days", ""])
        .assert()
        .code(4);

    assert!(outbox(temp.path()).is_empty());
}

#[test]
fn test_client_cannot_block() {
    let temp = workspace("c1", "client");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["block", "--date", "tomorrow", "--time", "09:00", "--reason", "Busy"])
        .assert()
        .code(5);

    assert!(outbox(temp.path()).is_empty());
}

#[test]
fn test_dry_run_prints_request_without_queueing() {
    let temp = workspace("a1", "admin");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["block", "--date", "tomorrow", "--time", "09:00"])
        .args(["--reason", "Holiday", "--type", "monthly", "--dates", "1,15"])
        .args(["--months", "3", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would block"))
        .stdout(predicate::str::contains("(1 hour)"))
        .stdout(predicate::str::contains("\"datesOfMonth\""))
        .stdout(predicate::str::contains("\"numberOfMonths\": 3"));

    assert!(outbox(temp.path()).is_empty());
}

#[test]
fn test_invalid_inputs() {
    let temp = workspace("a1", "admin");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["block", "--date", "someday", "--time", "09:00", "--reason", "x"])
        .assert()
        .code(3);

    blockout_cmd()
        .current_dir(temp.path())
        .args(["block", "--date", "tomorrow", "--time", "09:00", "--reason", "x"])
        .args(["--type", "daily"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid types: single, weekly, monthly, yearly"));

    blockout_cmd()
        .current_dir(temp.path())
        .args(["block", "--date", "tomorrow", "--time", "09:00", "--reason", "x"])
        .args(["--duration", "50m"])
        .assert()
        .code(4);
}

#[test]
fn test_unblock_series() {
    let temp = workspace("a1", "admin");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["unblock", "b42", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blocked time b42 deleted."));

    let entries = outbox(temp.path());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["operation"], "deleteBlockedTime");
    assert_eq!(entries[0]["payload"]["sessionId"], "b42");
    assert_eq!(entries[0]["payload"]["removeAll"], true);
}

#[test]
fn test_unblock_demo_slot_announces() {
    let temp = workspace("a1", "admin");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["unblock", "demo-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("at 12:00 PM has been deleted."));
}

#[test]
fn test_outbox_listing_and_clear() {
    let temp = workspace("a1", "admin");

    blockout_cmd()
        .current_dir(temp.path())
        .arg("outbox")
        .assert()
        .success()
        .stdout("Outbox is empty");

    blockout_cmd()
        .current_dir(temp.path())
        .args(["unblock", "b1"])
        .assert()
        .success();

    blockout_cmd()
        .current_dir(temp.path())
        .arg("outbox")
        .assert()
        .success()
        .stdout(predicate::str::contains("deleteBlockedTime"));

    blockout_cmd()
        .current_dir(temp.path())
        .args(["outbox", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 queued request(s)"));

    assert!(outbox(temp.path()).is_empty());
}
