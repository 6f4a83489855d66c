//! Offline gateway that queues mutations in a JSON-lines file

use crate::domain::{BlockedTimeRequest, NewSession, SessionEvent, Trainer};
use crate::error::{BlockoutError, Result};
use crate::infrastructure::ScheduleGateway;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// One queued mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboxEntry {
    pub operation: String,
    pub payload: serde_json::Value,
    pub queued_at: DateTime<Utc>,
}

pub struct OutboxGateway {
    path: PathBuf,
}

impl OutboxGateway {
    pub fn new(path: PathBuf) -> Self {
        OutboxGateway { path }
    }

    fn append(&self, operation: &str, payload: serde_json::Value) -> Result<()> {
        let entry = OutboxEntry {
            operation: operation.to_string(),
            payload,
            queued_at: Utc::now(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", serde_json::to_string(&entry)?)?;

        info!(operation, path = %self.path.display(), "queued request in outbox");
        Ok(())
    }

    /// Queued entries, oldest first
    pub fn entries(&self) -> Result<Vec<OutboxEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        fs::read_to_string(&self.path)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(BlockoutError::from))
            .collect()
    }

    /// Drop every queued entry, returning how many were removed
    pub fn clear(&self) -> Result<usize> {
        let count = self.entries()?.len();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(count)
    }
}

impl ScheduleGateway for OutboxGateway {
    fn create_blocked_time(&self, request: &BlockedTimeRequest) -> Result<()> {
        self.append("createBlockedTime", serde_json::to_value(request)?)
    }

    fn delete_blocked_time(&self, id: &str, remove_all: bool) -> Result<()> {
        self.append(
            "deleteBlockedTime",
            json!({ "sessionId": id, "removeAll": remove_all }),
        )
    }

    fn create_session(&self, session: &NewSession) -> Result<()> {
        self.append("createSession", serde_json::to_value(session)?)
    }

    fn book_session(&self, id: &str) -> Result<()> {
        self.append("bookSession", json!({ "sessionId": id }))
    }

    fn cancel_session(&self, id: &str) -> Result<()> {
        self.append("cancelSession", json!({ "sessionId": id }))
    }

    fn confirm_session(&self, id: &str) -> Result<()> {
        self.append("confirmSession", json!({ "sessionId": id }))
    }

    fn fetch_sessions(&self) -> Result<Vec<SessionEvent>> {
        Err(BlockoutError::Offline)
    }

    fn fetch_trainers(&self) -> Result<Vec<Trainer>> {
        Err(BlockoutError::Offline)
    }
}
