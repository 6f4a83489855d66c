//! Calendar and roster reads with demo fallback

use crate::domain::{SessionEvent, SessionStatus, Trainer};
use crate::infrastructure::ScheduleGateway;
use chrono::{Duration, NaiveDate, NaiveTime};
use tracing::warn;

/// Trainer roster; a failed fetch is logged and replaced by the demo roster
pub fn load_trainers(gateway: &dyn ScheduleGateway) -> Vec<Trainer> {
    match gateway.fetch_trainers() {
        Ok(trainers) => trainers,
        Err(err) => {
            warn!(error = %err, "fetchTrainers failed, using demo roster");
            demo_trainers()
        }
    }
}

/// Calendar entries; a failed fetch is logged and replaced by demo sessions around `today`
pub fn load_sessions(gateway: &dyn ScheduleGateway, today: NaiveDate) -> Vec<SessionEvent> {
    match gateway.fetch_sessions() {
        Ok(mut sessions) => {
            sessions.sort_by_key(|session| session.start);
            sessions
        }
        Err(err) => {
            warn!(error = %err, "fetchSessions failed, using demo sessions");
            demo_sessions(today)
        }
    }
}

pub fn demo_trainers() -> Vec<Trainer> {
    vec![
        Trainer::new("demo-trainer-1", "Jordan", "Blake"),
        Trainer::new("demo-trainer-2", "Riley", "Chen"),
        Trainer::new("demo-trainer-3", "Casey", "Morgan"),
    ]
}

pub fn demo_sessions(today: NaiveDate) -> Vec<SessionEvent> {
    let at = |days: i64, hour: u32| {
        (today + Duration::days(days)).and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default())
    };

    let session = |id: &str, start, status, trainer: Option<&str>| SessionEvent {
        id: id.to_string(),
        title: Some("Personal Training".to_string()),
        start,
        end: None,
        duration: Some(60),
        status,
        trainer_id: trainer.map(str::to_string),
        client_id: None,
        location: Some("Main Studio".to_string()),
        reason: None,
    };

    vec![
        session("demo-1", at(0, 9), SessionStatus::Available, Some("demo-trainer-1")),
        session("demo-2", at(0, 11), SessionStatus::Scheduled, Some("demo-trainer-2")),
        session("demo-3", at(1, 14), SessionStatus::Confirmed, Some("demo-trainer-1")),
        SessionEvent {
            title: Some("Equipment maintenance - All Trainers".to_string()),
            reason: Some("Equipment maintenance".to_string()),
            duration: Some(120),
            ..session("demo-4", at(2, 12), SessionStatus::Blocked, None)
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::RecordingGateway;
    use crate::domain::session::find_session;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    #[test]
    fn test_live_trainers_are_returned() {
        let gateway = RecordingGateway {
            roster: vec![Trainer::new("t1", "Sam", "Rivera")],
            ..Default::default()
        };
        assert_eq!(load_trainers(&gateway), vec![Trainer::new("t1", "Sam", "Rivera")]);
    }

    #[test]
    fn test_failed_fetch_falls_back_to_demo() {
        let gateway = RecordingGateway::failing();
        assert_eq!(load_trainers(&gateway), demo_trainers());
        assert_eq!(load_sessions(&gateway, today()), demo_sessions(today()));
    }

    #[test]
    fn test_live_sessions_are_sorted() {
        let mut sessions = demo_sessions(today());
        sessions.reverse();
        let gateway = RecordingGateway {
            stored_sessions: sessions,
            ..Default::default()
        };

        let loaded = load_sessions(&gateway, today());
        assert_eq!(loaded[0].id, "demo-1");
        assert_eq!(loaded[3].id, "demo-4");
    }

    #[test]
    fn test_demo_sessions_are_relative_to_today() {
        let sessions = demo_sessions(today());
        let blocked = find_session(&sessions, "demo-4").unwrap();
        assert!(blocked.is_blocked());
        assert_eq!(
            blocked.start,
            NaiveDate::from_ymd_opt(2025, 1, 8)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        );
        assert_eq!(sessions[0].start.date(), today());
    }
}
