//! Screen-reader announcements for schedule changes

use crate::domain::role::trainer_first_name;
use crate::domain::{Actor, BlockSpec, Recurrence, Role, Trainer, TrainerScope};
use chrono::NaiveDateTime;

/// `Monday, January 6`
pub fn announce_date(at: NaiveDateTime) -> String {
    at.format("%A, %B %-d").to_string()
}

/// `9:00 AM`
pub fn announce_time(at: NaiveDateTime) -> String {
    at.format("%-I:%M %p").to_string()
}

/// Message read out after a block is created
pub fn block_created(spec: &BlockSpec, actor: &Actor, roster: &[Trainer]) -> String {
    let date = announce_date(spec.start);
    let time = announce_time(spec.start);

    let mut message = match &spec.recurrence {
        Recurrence::Weekly(options) => format!(
            "Weekly blocked time created for {} weeks starting from {} at {}",
            options.number_of_weeks, date, time
        ),
        Recurrence::Monthly(options) => format!(
            "Monthly blocked time created for {} months starting from {} at {}",
            options.number_of_months, date, time
        ),
        Recurrence::Yearly(_) => {
            format!("Yearly blocked time created starting from {} at {}", date, time)
        }
        Recurrence::Single => format!("Blocked time created for {} at {}", date, time),
    };

    match (actor.role, &spec.scope) {
        (Role::Trainer, _) => message.push_str(" for your personal schedule"),
        (Role::Admin, TrainerScope::Trainer(id)) => {
            let name = trainer_first_name(roster, id).unwrap_or("trainer");
            message.push_str(&format!(" for {}'s schedule", name));
        }
        (Role::Admin, TrainerScope::Global) => {
            message.push_str(" as a global block affecting all trainers")
        }
        (Role::Client, _) => {}
    }

    message.push('.');
    message
}

pub fn block_deleted(start: NaiveDateTime, remove_all: bool) -> String {
    if remove_all {
        format!(
            "Recurring blocked time series starting on {} has been deleted.",
            announce_date(start)
        )
    } else {
        format!(
            "Blocked time for {} at {} has been deleted.",
            announce_date(start),
            announce_time(start)
        )
    }
}

pub fn session_created(start: NaiveDateTime) -> String {
    format!(
        "New session created for {} at {}.",
        announce_date(start),
        announce_time(start)
    )
}

pub fn session_booked(start: NaiveDateTime) -> String {
    format!(
        "Session successfully booked for {} at {}.",
        announce_date(start),
        announce_time(start)
    )
}

pub fn session_cancelled(start: NaiveDateTime) -> String {
    format!(
        "Session for {} at {} has been cancelled.",
        announce_date(start),
        announce_time(start)
    )
}

pub fn session_confirmed(start: NaiveDateTime) -> String {
    format!(
        "Session for {} at {} has been confirmed.",
        announce_date(start),
        announce_time(start)
    )
}
