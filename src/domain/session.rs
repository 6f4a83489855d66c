//! Session records mirrored from the scheduling backend

use chrono::{DateTime, Duration, Local, NaiveDateTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Available,
    Requested,
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    Blocked,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionStatus::Available => "available",
            SessionStatus::Requested => "requested",
            SessionStatus::Scheduled => "scheduled",
            SessionStatus::Confirmed => "confirmed",
            SessionStatus::Completed => "completed",
            SessionStatus::Cancelled => "cancelled",
            SessionStatus::Blocked => "blocked",
            SessionStatus::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One calendar entry: a bookable session or a blocked slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEvent {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(alias = "sessionDate", with = "local_datetime")]
    pub start: NaiveDateTime,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "local_datetime::option"
    )]
    pub end: Option<NaiveDateTime>,
    #[serde(default)]
    pub duration: Option<u32>,
    pub status: SessionStatus,
    #[serde(default, deserialize_with = "opt_id_from_string_or_number")]
    pub trainer_id: Option<String>,
    #[serde(default, deserialize_with = "opt_id_from_string_or_number")]
    pub client_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl SessionEvent {
    /// The backend's end when sent, otherwise start plus duration (60 minutes if unknown)
    pub fn end(&self) -> NaiveDateTime {
        self.end.unwrap_or_else(|| {
            self.start + Duration::minutes(i64::from(self.duration.unwrap_or(60)))
        })
    }

    pub fn is_blocked(&self) -> bool {
        self.status == SessionStatus::Blocked
    }
}

/// Find a session by id
pub fn find_session<'a>(sessions: &'a [SessionEvent], id: &str) -> Option<&'a SessionEvent> {
    sessions.iter().find(|session| session.id == id)
}

/// Local date-times on the wire.
///
/// Outgoing values carry no offset. Incoming values may be RFC 3339 with an
/// offset, which is converted to local time, or a bare local date-time.
pub mod local_datetime {
    use super::*;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(WIRE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date-time: '{}'", raw)))
    }

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
            return Some(with_offset.with_timezone(&Local).naive_local());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
            .ok()
    }

    pub mod option {
        use super::*;

        pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => parse(&raw)
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("invalid date-time: '{}'", raw))),
                None => Ok(None),
            }
        }
    }
}

/// Ids arrive as strings or integers depending on the endpoint
pub(crate) fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("expected an id, got {}", other))),
    }
}

pub(crate) fn opt_id_from_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!("expected an id, got {}", other))),
    }
}
