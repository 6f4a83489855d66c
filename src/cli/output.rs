//! Output formatting utilities

use crate::domain::announcement::{announce_date, announce_time};
use crate::domain::{SessionEvent, Trainer};
use crate::infrastructure::OutboxEntry;

/// Format sessions and blocked slots for display
pub fn format_session_list(sessions: &[SessionEvent]) -> String {
    if sessions.is_empty() {
        return "No sessions found".to_string();
    }

    let mut output = String::new();
    for session in sessions {
        let label = if session.is_blocked() {
            session
                .reason
                .as_deref()
                .or(session.title.as_deref())
                .unwrap_or("Blocked")
        } else {
            session.title.as_deref().unwrap_or("Session")
        };

        output.push_str(&format!(
            "{}  {}-{}  {:<10} {:<14} {}\n",
            session.start.format("%Y-%m-%d"),
            session.start.format("%H:%M"),
            session.end().format("%H:%M"),
            session.status.to_string(),
            session.id,
            label
        ));
    }
    output
}

/// Format the trainer roster for display
pub fn format_trainer_list(trainers: &[Trainer]) -> String {
    if trainers.is_empty() {
        return "No trainers found".to_string();
    }

    let mut output = String::new();
    for trainer in trainers {
        output.push_str(&format!("{:<16} {}\n", trainer.id, trainer.full_name()));
    }
    output
}

/// Format queued outbox entries for display
pub fn format_outbox(entries: &[OutboxEntry]) -> String {
    if entries.is_empty() {
        return "Outbox is empty".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {:<18} {}\n",
            entry.queued_at.format("%Y-%m-%d %H:%M:%S"),
            entry.operation,
            entry.payload
        ));
    }
    output
}

/// One-line summary of a start, as used in announcements
pub fn format_when(start: chrono::NaiveDateTime) -> String {
    format!("{} at {}", announce_date(start), announce_time(start))
}
