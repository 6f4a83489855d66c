//! Request bodies sent to the scheduling backend

use crate::domain::recurrence::Recurrence;
use crate::domain::session::local_datetime;
use crate::domain::{Actor, BlockSpec, BlockType, Role, Trainer};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPattern {
    #[serde(rename = "type")]
    pub kind: BlockType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<BTreeSet<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_weeks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates_of_month: Option<BTreeSet<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months_included: Option<BTreeSet<u8>>,
    pub until_date: NaiveDate,
}

impl RecurringPattern {
    fn from_recurrence(recurrence: &Recurrence, until_date: NaiveDate) -> Self {
        let mut pattern = RecurringPattern {
            kind: recurrence.block_type(),
            days_of_week: None,
            number_of_weeks: None,
            dates_of_month: None,
            number_of_months: None,
            months_included: None,
            until_date,
        };

        match recurrence {
            Recurrence::Single => {}
            Recurrence::Weekly(options) => {
                pattern.days_of_week = Some(options.days_of_week.clone());
                pattern.number_of_weeks = Some(options.number_of_weeks);
            }
            Recurrence::Monthly(options) => {
                pattern.dates_of_month = Some(options.dates_of_month.clone());
                pattern.number_of_months = Some(options.number_of_months);
            }
            Recurrence::Yearly(options) => {
                pattern.months_included = Some(options.months_included.clone());
            }
        }

        pattern
    }
}

/// Body of `createBlockedTime`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedTimeRequest {
    #[serde(with = "local_datetime")]
    pub start: NaiveDateTime,
    #[serde(with = "local_datetime")]
    pub end: NaiveDateTime,
    pub duration: u32,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<String>,
    pub status: String,
    pub block_type: BlockType,
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_pattern: Option<RecurringPattern>,
    pub created_by_user_id: String,
    pub created_by_role: Role,
    pub title: String,
}

impl BlockedTimeRequest {
    pub fn new(spec: &BlockSpec, actor: &Actor, roster: &[Trainer]) -> Self {
        let recurring_pattern = spec
            .until_date()
            .map(|until| RecurringPattern::from_recurrence(&spec.recurrence, until));

        BlockedTimeRequest {
            start: spec.start,
            end: spec.end(),
            duration: spec.duration.minutes(),
            reason: spec.reason.clone(),
            location: spec.location.clone(),
            trainer_id: spec.scope.trainer_id().map(str::to_string),
            status: "blocked".to_string(),
            block_type: spec.block_type(),
            is_recurring: spec.block_type().is_recurring(),
            recurring_pattern,
            created_by_user_id: actor.id.clone(),
            created_by_role: actor.role,
            title: spec.title(actor, roster),
        }
    }
}

/// Body of `createSession`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    #[serde(with = "local_datetime")]
    pub start: NaiveDateTime,
    #[serde(with = "local_datetime")]
    pub end: NaiveDateTime,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub duration: u32,
    pub status: String,
}
