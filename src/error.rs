//! Error types for blockout

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for blockout
#[derive(Debug, Error)]
pub enum BlockoutError {
    #[error("Not a blockout workspace: {0}")]
    NotWorkspace(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid request: {}", join_issues(.0))]
    Validation(Vec<ValidationError>),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Backend rejected request ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Offline: no backend URL configured")]
    Offline,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn join_issues(issues: &[ValidationError]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl BlockoutError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BlockoutError::NotWorkspace(_) => 2,
            BlockoutError::InvalidDate(_) => 3,
            BlockoutError::Validation(_) => 4,
            BlockoutError::PermissionDenied(_) => 5,
            BlockoutError::Backend { .. } | BlockoutError::Http(_) => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BlockoutError::NotWorkspace(path) => {
                format!(
                    "Not a blockout workspace: {}\n\n\
                    Suggestions:\n\
                    • Run 'blockout init --user-id <id> --role <role>' to create one\n\
                    • Navigate to an existing blockout workspace\n\
                    • Set BLOCKOUT_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            BlockoutError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, tomorrow\n\
                    • monday, tuesday, ..., sunday (today or the next one)\n\
                    • next monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD or DD-MM-YYYY\n\n\
                    Examples:\n\
                    blockout block --date tomorrow --time 09:00 --reason Holiday\n\
                    blockout block --date 2025-01-06 --time 14:30 --reason Training",
                    input
                )
            }
            BlockoutError::Validation(issues) => {
                let mut message = String::from("Cannot submit this request:\n");
                for issue in issues {
                    message.push_str(&format!("• {}\n", issue));
                }
                message.push_str("\nNo request was sent. Fix the fields above and try again.");
                message
            }
            BlockoutError::PermissionDenied(msg) => {
                format!(
                    "Permission denied: {}\n\n\
                    Suggestions:\n\
                    • Only admins and trainers can manage the schedule\n\
                    • Check the configured role: blockout config role",
                    msg
                )
            }
            BlockoutError::Offline => {
                "Offline: no backend URL configured\n\n\
                Suggestions:\n\
                • Configure the API: blockout config api_url https://studio.example.com\n\
                • Queued changes can be inspected with: blockout outbox"
                    .to_string()
            }
            BlockoutError::Config(msg) => {
                if msg.contains("Invalid role") {
                    format!(
                        "{}\n\n\
                        Valid roles: admin, trainer, client\n\
                        Example: blockout config role trainer",
                        msg
                    )
                } else if msg.contains("Invalid block type") {
                    format!(
                        "{}\n\n\
                        Valid types: single, weekly, monthly, yearly\n\
                        Example: blockout block --type weekly --days mon,wed --weeks 4",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BlockoutError
pub type Result<T> = std::result::Result<T, BlockoutError>;
