//! Session mutations: create, book, cancel, confirm

use crate::domain::session::find_session;
use crate::domain::{announcement, Actor, NewSession, SessionEvent, ValidationError};
use crate::error::{BlockoutError, Result};
use crate::infrastructure::ScheduleGateway;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::warn;

/// Fields of the new-session form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDraft {
    pub start: NaiveDateTime,
    pub duration_minutes: u32,
    pub title: String,
    pub location: Option<String>,
    pub trainer_id: Option<String>,
    pub notes: Option<String>,
}

impl SessionDraft {
    pub fn new(start: NaiveDateTime) -> Self {
        SessionDraft {
            start,
            duration_minutes: 60,
            title: "Available Session".to_string(),
            location: None,
            trainer_id: None,
            notes: None,
        }
    }

    fn validate(&self, today: NaiveDate) -> Vec<ValidationError> {
        let mut issues = Vec::new();
        if self.title.trim().is_empty() {
            issues.push(ValidationError::MissingTitle);
        }
        if self.start.date() < today {
            issues.push(ValidationError::StartInPast {
                start: self.start.date(),
                today,
            });
        }
        if self.duration_minutes == 0 {
            issues.push(ValidationError::InvalidDuration(0));
        }
        issues
    }
}

/// Session mutations for one actor.
///
/// `sessions` is the current calendar view, used to phrase announcements.
/// Ids missing from it are still sent, just without an announcement.
pub struct SessionService<'a> {
    gateway: &'a dyn ScheduleGateway,
    actor: Actor,
    sessions: Vec<SessionEvent>,
}

impl<'a> SessionService<'a> {
    pub fn new(gateway: &'a dyn ScheduleGateway, actor: Actor, sessions: Vec<SessionEvent>) -> Self {
        SessionService {
            gateway,
            actor,
            sessions,
        }
    }

    fn require_staff(&self, action: &str) -> Result<()> {
        if self.actor.role.can_manage_schedule() {
            Ok(())
        } else {
            Err(BlockoutError::PermissionDenied(format!(
                "role '{}' cannot {}",
                self.actor.role, action
            )))
        }
    }

    fn start_of(&self, id: &str) -> Option<NaiveDateTime> {
        find_session(&self.sessions, id).map(|session| session.start)
    }

    pub fn create(&self, draft: &SessionDraft, today: NaiveDate) -> Result<String> {
        self.require_staff("create sessions")?;

        let issues = draft.validate(today);
        if !issues.is_empty() {
            return Err(BlockoutError::Validation(issues));
        }

        let session = NewSession {
            start: draft.start,
            end: draft.start + Duration::minutes(i64::from(draft.duration_minutes)),
            title: draft.title.trim().to_string(),
            location: draft.location.clone(),
            trainer_id: draft
                .trainer_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            notes: draft.notes.clone(),
            duration: draft.duration_minutes,
            status: "available".to_string(),
        };

        self.gateway.create_session(&session).inspect_err(|err| {
            warn!(error = %err, "createSession failed");
        })?;

        Ok(announcement::session_created(draft.start))
    }

    pub fn book(&self, id: &str) -> Result<Option<String>> {
        self.gateway.book_session(id).inspect_err(|err| {
            warn!(error = %err, id, "bookSession failed");
        })?;
        Ok(self.start_of(id).map(announcement::session_booked))
    }

    pub fn cancel(&self, id: &str) -> Result<Option<String>> {
        self.gateway.cancel_session(id).inspect_err(|err| {
            warn!(error = %err, id, "cancelSession failed");
        })?;
        Ok(self.start_of(id).map(announcement::session_cancelled))
    }

    pub fn confirm(&self, id: &str) -> Result<Option<String>> {
        self.require_staff("confirm sessions")?;
        self.gateway.confirm_session(id).inspect_err(|err| {
            warn!(error = %err, id, "confirmSession failed");
        })?;
        Ok(self.start_of(id).map(announcement::session_confirmed))
    }

    /// Remove a blocked slot, or the whole series it belongs to
    pub fn delete_block(&self, id: &str, remove_all: bool) -> Result<Option<String>> {
        self.require_staff("remove blocked time")?;
        self.gateway
            .delete_blocked_time(id, remove_all)
            .inspect_err(|err| {
                warn!(error = %err, id, remove_all, "deleteBlockedTime failed");
            })?;
        Ok(self
            .start_of(id)
            .map(|start| announcement::block_deleted(start, remove_all)))
    }
}
