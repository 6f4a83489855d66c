#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn blockout_cmd() -> Command {
    let mut cmd = Command::cargo_bin("blockout").unwrap();
    cmd.env_remove("BLOCKOUT_ROOT");
    cmd.env_remove("BLOCKOUT_TOKEN");
    cmd.env_remove("BLOCKOUT_LOG");
    cmd
}

/// An offline workspace acting as the given user
pub fn workspace(user_id: &str, role: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    blockout_cmd()
        .arg("init")
        .arg(temp.path())
        .args(["--user-id", user_id, "--role", role])
        .assert()
        .success();
    temp
}

/// Queued outbox entries as raw JSON
pub fn outbox(root: &Path) -> Vec<serde_json::Value> {
    let path = root.join(".blockout/outbox.jsonl");
    if !path.exists() {
        return Vec::new();
    }
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}
