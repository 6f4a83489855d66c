//! Block time use case

use crate::domain::{announcement, Actor, BlockForm, BlockSpec, BlockedTimeRequest, Trainer};
use crate::error::{BlockoutError, Result};
use crate::infrastructure::ScheduleGateway;
use chrono::{NaiveDate, NaiveDateTime};
use tracing::warn;

/// Outcome of a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCreated {
    pub request: BlockedTimeRequest,
    pub announcement: String,
}

/// Turns a filled form into exactly one `createBlockedTime` call
pub struct CreateBlockService<'a> {
    gateway: &'a dyn ScheduleGateway,
    actor: Actor,
    roster: Vec<Trainer>,
}

impl<'a> CreateBlockService<'a> {
    pub fn new(gateway: &'a dyn ScheduleGateway, actor: Actor, roster: Vec<Trainer>) -> Self {
        CreateBlockService {
            gateway,
            actor,
            roster,
        }
    }

    fn prepare(&self, form: &BlockForm, today: NaiveDate) -> Result<(BlockSpec, BlockedTimeRequest)> {
        if !self.actor.role.can_manage_schedule() {
            return Err(BlockoutError::PermissionDenied(format!(
                "role '{}' cannot block time",
                self.actor.role
            )));
        }

        let spec = BlockSpec::from_form(form, &self.actor, today)
            .map_err(BlockoutError::Validation)?
            .ok_or_else(|| {
                BlockoutError::PermissionDenied(format!(
                    "role '{}' cannot block time",
                    self.actor.role
                ))
            })?;
        let request = BlockedTimeRequest::new(&spec, &self.actor, &self.roster);

        Ok((spec, request))
    }

    /// Validate and build the request without sending it
    pub fn preview(&self, form: &BlockForm, today: NaiveDate) -> Result<BlockedTimeRequest> {
        self.prepare(form, today).map(|(_, request)| request)
    }

    /// Validate, send, and reset the form on success.
    ///
    /// A rejected or failed submit leaves the form as it was.
    pub fn submit(&self, form: &mut BlockForm, now: NaiveDateTime) -> Result<BlockCreated> {
        let (spec, request) = self.prepare(form, now.date())?;

        if let Err(err) = self.gateway.create_blocked_time(&request) {
            warn!(error = %err, "createBlockedTime failed");
            return Err(err);
        }

        let announcement = announcement::block_created(&spec, &self.actor, &self.roster);
        form.reset(&self.actor, now);

        Ok(BlockCreated {
            request,
            announcement,
        })
    }
}
