//! Blocked time form state, validation and role-based trainer scoping

use crate::domain::recurrence::{MonthlyOptions, Recurrence, WeeklyOptions, YearlyOptions};
use crate::domain::role::trainer_first_name;
use crate::domain::{Actor, BlockDuration, BlockType, Role, Trainer};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// A reason a form cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingReason,
    MissingTitle,
    StartInPast { start: NaiveDate, today: NaiveDate },
    InvalidDuration(u32),
    NoDaysSelected,
    NoDatesSelected,
    NoMonthsSelected,
    DayOutOfRange(u8),
    DateOutOfRange(u8),
    MonthOutOfRange(u8),
    ZeroWeeks,
    ZeroMonths,
    UntilDateOutOfRange,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingReason => write!(f, "a reason for blocking is required"),
            ValidationError::MissingTitle => write!(f, "a session title is required"),
            ValidationError::StartInPast { start, today } => write!(
                f,
                "start date {} is before today ({})",
                start.format("%Y-%m-%d"),
                today.format("%Y-%m-%d")
            ),
            ValidationError::InvalidDuration(minutes) => {
                write!(f, "{} minutes is not an offered duration", minutes)
            }
            ValidationError::NoDaysSelected => {
                write!(f, "select at least one day of the week")
            }
            ValidationError::NoDatesSelected => {
                write!(f, "select at least one date of the month")
            }
            ValidationError::NoMonthsSelected => write!(f, "select at least one month"),
            ValidationError::DayOutOfRange(day) => {
                write!(f, "day of week {} is outside 0-6", day)
            }
            ValidationError::DateOutOfRange(date) => {
                write!(f, "date of month {} is outside 1-31", date)
            }
            ValidationError::MonthOutOfRange(month) => {
                write!(f, "month {} is outside 1-12", month)
            }
            ValidationError::ZeroWeeks => write!(f, "number of weeks must be at least 1"),
            ValidationError::ZeroMonths => write!(f, "number of months must be at least 1"),
            ValidationError::UntilDateOutOfRange => {
                write!(f, "the series would end past the last supported date")
            }
        }
    }
}

/// Who a block applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainerScope {
    /// Every trainer is unavailable
    Global,
    Trainer(String),
}

impl TrainerScope {
    pub fn trainer_id(&self) -> Option<&str> {
        match self {
            TrainerScope::Global => None,
            TrainerScope::Trainer(id) => Some(id),
        }
    }

    /// Apply the role policy to the trainer chosen on the form.
    ///
    /// Trainers always block their own schedule. Admins block the chosen
    /// trainer, or everyone when nothing is chosen. Clients never reach
    /// the form, so they get `None`.
    pub fn resolve(actor: &Actor, selected: Option<&str>) -> Option<TrainerScope> {
        match actor.role {
            Role::Trainer => Some(TrainerScope::Trainer(actor.id.clone())),
            Role::Admin => Some(
                selected
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(|id| TrainerScope::Trainer(id.to_string()))
                    .unwrap_or(TrainerScope::Global),
            ),
            Role::Client => None,
        }
    }
}

/// Editable state of the block form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockForm {
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: u32,
    pub reason: String,
    pub location: Option<String>,
    /// Trainer picked on the form; only admins can change it
    pub trainer_id: Option<String>,
    pub block_type: BlockType,
    pub weekly: WeeklyOptions,
    pub monthly: MonthlyOptions,
    pub yearly: YearlyOptions,
}

impl BlockForm {
    /// Fresh form for a clicked slot
    pub fn for_slot(actor: &Actor, slot_start: NaiveDateTime) -> Self {
        BlockForm {
            start_date: slot_start.date(),
            start_time: NaiveTime::from_hms_opt(slot_start.hour(), slot_start.minute(), 0)
                .unwrap_or(slot_start.time()),
            duration_minutes: BlockDuration::default().minutes(),
            reason: String::new(),
            location: None,
            trainer_id: match actor.role {
                Role::Trainer => Some(actor.id.clone()),
                _ => None,
            },
            block_type: BlockType::Single,
            weekly: WeeklyOptions::default(),
            monthly: MonthlyOptions::default(),
            yearly: YearlyOptions::default(),
        }
    }

    /// Restore defaults after a successful submit
    pub fn reset(&mut self, actor: &Actor, now: NaiveDateTime) {
        *self = BlockForm::for_slot(actor, now);
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start_date.and_time(self.start_time)
    }

    /// Every problem that prevents submitting this form
    pub fn validate(&self, today: NaiveDate) -> Vec<ValidationError> {
        let mut issues = Vec::new();

        if self.reason.trim().is_empty() {
            issues.push(ValidationError::MissingReason);
        }
        if self.start_date < today {
            issues.push(ValidationError::StartInPast {
                start: self.start_date,
                today,
            });
        }
        if BlockDuration::from_minutes(self.duration_minutes).is_none() {
            issues.push(ValidationError::InvalidDuration(self.duration_minutes));
        }

        match self.block_type {
            BlockType::Single => {}
            BlockType::Weekly => {
                if self.weekly.days_of_week.is_empty() {
                    issues.push(ValidationError::NoDaysSelected);
                }
                issues.extend(
                    self.weekly
                        .days_of_week
                        .iter()
                        .filter(|day| **day > 6)
                        .map(|day| ValidationError::DayOutOfRange(*day)),
                );
                if self.weekly.number_of_weeks == 0 {
                    issues.push(ValidationError::ZeroWeeks);
                }
            }
            BlockType::Monthly => {
                if self.monthly.dates_of_month.is_empty() {
                    issues.push(ValidationError::NoDatesSelected);
                }
                issues.extend(
                    self.monthly
                        .dates_of_month
                        .iter()
                        .filter(|date| !(1..=31).contains(*date))
                        .map(|date| ValidationError::DateOutOfRange(*date)),
                );
                if self.monthly.number_of_months == 0 {
                    issues.push(ValidationError::ZeroMonths);
                }
            }
            BlockType::Yearly => {
                if self.yearly.months_included.is_empty() {
                    issues.push(ValidationError::NoMonthsSelected);
                }
                issues.extend(
                    self.yearly
                        .months_included
                        .iter()
                        .filter(|month| !(1..=12).contains(*month))
                        .map(|month| ValidationError::MonthOutOfRange(*month)),
                );
            }
        }

        if self.block_type.is_recurring()
            && self.recurrence().until_date(self.start_date).is_none()
        {
            issues.push(ValidationError::UntilDateOutOfRange);
        }

        issues
    }

    /// The recurrence parameters for the selected block type
    pub fn recurrence(&self) -> Recurrence {
        match self.block_type {
            BlockType::Single => Recurrence::Single,
            BlockType::Weekly => Recurrence::Weekly(self.weekly.clone()),
            BlockType::Monthly => Recurrence::Monthly(self.monthly.clone()),
            BlockType::Yearly => Recurrence::Yearly(self.yearly.clone()),
        }
    }
}

/// A validated request to block time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    pub start: NaiveDateTime,
    pub duration: BlockDuration,
    pub recurrence: Recurrence,
    pub reason: String,
    pub location: Option<String>,
    pub scope: TrainerScope,
}

impl BlockSpec {
    /// Validate the form for this actor and apply the trainer policy.
    ///
    /// Returns `Ok(None)` when the actor's role cannot block time at all.
    pub fn from_form(
        form: &BlockForm,
        actor: &Actor,
        today: NaiveDate,
    ) -> Result<Option<BlockSpec>, Vec<ValidationError>> {
        let Some(scope) = TrainerScope::resolve(actor, form.trainer_id.as_deref()) else {
            return Ok(None);
        };

        let issues = form.validate(today);
        if !issues.is_empty() {
            return Err(issues);
        }

        let duration = BlockDuration::from_minutes(form.duration_minutes)
            .ok_or_else(|| vec![ValidationError::InvalidDuration(form.duration_minutes)])?;

        Ok(Some(BlockSpec {
            start: form.start(),
            duration,
            recurrence: form.recurrence(),
            reason: form.reason.trim().to_string(),
            location: form
                .location
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            scope,
        }))
    }

    pub fn block_type(&self) -> BlockType {
        self.recurrence.block_type()
    }

    pub fn end(&self) -> NaiveDateTime {
        self.start + self.duration.as_chrono()
    }

    pub fn until_date(&self) -> Option<NaiveDate> {
        self.recurrence.until_date(self.start.date())
    }

    /// `"{reason} - {who}"` where who is the trainer's first name or `All Trainers`
    pub fn title(&self, actor: &Actor, roster: &[Trainer]) -> String {
        let who = match &self.scope {
            TrainerScope::Global => "All Trainers",
            TrainerScope::Trainer(id) if *id == actor.id => {
                actor.first_name.as_deref().unwrap_or("Trainer")
            }
            TrainerScope::Trainer(id) => trainer_first_name(roster, id).unwrap_or("Trainer"),
        };
        format!("{} - {}", self.reason, who)
    }
}
