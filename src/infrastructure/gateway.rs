//! Seam between use cases and the scheduling backend

use crate::domain::{BlockedTimeRequest, NewSession, SessionEvent, Trainer};
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemWorkspace, HttpGateway, OutboxGateway};

/// Operations the scheduling backend offers
pub trait ScheduleGateway {
    fn create_blocked_time(&self, request: &BlockedTimeRequest) -> Result<()>;

    /// Remove one blocked slot, or its whole recurring series
    fn delete_blocked_time(&self, id: &str, remove_all: bool) -> Result<()>;

    fn create_session(&self, session: &NewSession) -> Result<()>;

    fn book_session(&self, id: &str) -> Result<()>;

    fn cancel_session(&self, id: &str) -> Result<()>;

    fn confirm_session(&self, id: &str) -> Result<()>;

    fn fetch_sessions(&self) -> Result<Vec<SessionEvent>>;

    fn fetch_trainers(&self) -> Result<Vec<Trainer>>;
}

/// Pick the gateway for a workspace: HTTP when an API URL is configured,
/// otherwise the local outbox.
pub fn connect(workspace: &FileSystemWorkspace, config: &Config) -> Result<Box<dyn ScheduleGateway>> {
    match config.api_url.as_deref().map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => Ok(Box::new(HttpGateway::new(
            url,
            config.get_token(),
            config.timeout_secs,
        )?)),
        None => Ok(Box::new(OutboxGateway::new(workspace.outbox_path()))),
    }
}
