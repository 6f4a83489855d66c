//! In-memory gateway for use case tests

use crate::domain::{BlockedTimeRequest, NewSession, SessionEvent, Trainer};
use crate::error::{BlockoutError, Result};
use crate::infrastructure::ScheduleGateway;
use std::cell::RefCell;

#[derive(Default)]
pub struct RecordingGateway {
    pub fail: bool,
    pub blocks: RefCell<Vec<BlockedTimeRequest>>,
    pub sessions: RefCell<Vec<NewSession>>,
    /// `(operation, id)` for id-based mutations
    pub calls: RefCell<Vec<(String, String)>>,
    pub stored_sessions: Vec<SessionEvent>,
    pub roster: Vec<Trainer>,
}

impl RecordingGateway {
    pub fn failing() -> Self {
        RecordingGateway {
            fail: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            Err(BlockoutError::Backend {
                status: 503,
                message: "Service Unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn record(&self, operation: &str, id: &str) -> Result<()> {
        self.check()?;
        self.calls
            .borrow_mut()
            .push((operation.to_string(), id.to_string()));
        Ok(())
    }
}

impl ScheduleGateway for RecordingGateway {
    fn create_blocked_time(&self, request: &BlockedTimeRequest) -> Result<()> {
        self.check()?;
        self.blocks.borrow_mut().push(request.clone());
        Ok(())
    }

    fn delete_blocked_time(&self, id: &str, remove_all: bool) -> Result<()> {
        let operation = if remove_all {
            "deleteBlockedTimeSeries"
        } else {
            "deleteBlockedTime"
        };
        self.record(operation, id)
    }

    fn create_session(&self, session: &NewSession) -> Result<()> {
        self.check()?;
        self.sessions.borrow_mut().push(session.clone());
        Ok(())
    }

    fn book_session(&self, id: &str) -> Result<()> {
        self.record("bookSession", id)
    }

    fn cancel_session(&self, id: &str) -> Result<()> {
        self.record("cancelSession", id)
    }

    fn confirm_session(&self, id: &str) -> Result<()> {
        self.record("confirmSession", id)
    }

    fn fetch_sessions(&self) -> Result<Vec<SessionEvent>> {
        self.check()?;
        Ok(self.stored_sessions.clone())
    }

    fn fetch_trainers(&self) -> Result<Vec<Trainer>> {
        self.check()?;
        Ok(self.roster.clone())
    }
}
