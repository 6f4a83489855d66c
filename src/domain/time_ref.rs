//! Date and time references for the start of a block or session

use crate::error::{BlockoutError, Result};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

/// A date that can be resolved against today
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    /// Current day
    Today,
    /// Next day
    Tomorrow,
    /// Today if it matches, otherwise the coming occurrence
    Weekday(Weekday),
    /// Occurrence strictly after today
    NextWeekday(Weekday),
    /// Specific date
    SpecificDate(NaiveDate),
}

impl DateReference {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "tomorrow" => Ok(DateReference::Tomorrow),
            _ if normalized.starts_with("next ") => parse_weekday(&normalized[5..])
                .map(DateReference::NextWeekday)
                .ok_or_else(|| BlockoutError::InvalidDate(input.to_string())),
            _ => {
                if let Some(weekday) = parse_weekday(&normalized) {
                    return Ok(DateReference::Weekday(weekday));
                }
                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .or_else(|_| NaiveDate::parse_from_str(&normalized, "%d-%m-%Y"))
                    .map(DateReference::SpecificDate)
                    .map_err(|_| BlockoutError::InvalidDate(input.to_string()))
            }
        }
    }

    /// Resolve this reference to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => base_date,
            DateReference::Tomorrow => base_date + Duration::days(1),
            DateReference::Weekday(target) => base_date + Duration::days(days_until(base_date, *target)),
            DateReference::NextWeekday(target) => {
                let days = match days_until(base_date, *target) {
                    0 => 7,
                    days => days,
                };
                base_date + Duration::days(days)
            }
            DateReference::SpecificDate(date) => *date,
        }
    }
}

fn days_until(base_date: NaiveDate, target: Weekday) -> i64 {
    let current = base_date.weekday().num_days_from_monday();
    i64::from((target.num_days_from_monday() + 7 - current) % 7)
}

fn parse_weekday(day_str: &str) -> Option<Weekday> {
    match day_str.trim() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse `14:30`, `9:05` or `2:30pm`
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let normalized = input.trim().to_uppercase().replace(' ', "");

    NaiveTime::parse_from_str(&normalized, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&normalized, "%I:%M%p"))
        .map_err(|_| {
            BlockoutError::Config(format!(
                "Invalid time: '{}'. Use HH:MM (e.g. 14:30) or h:mmAM/PM (e.g. 2:30PM)",
                input
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Friday, Jan 17, 2025
    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
    }

    #[test]
    fn test_parse_simple_refs() {
        assert_eq!(DateReference::parse("today").unwrap(), DateReference::Today);
        assert_eq!(DateReference::parse("NOW").unwrap(), DateReference::Today);
        assert_eq!(
            DateReference::parse("tomorrow").unwrap(),
            DateReference::Tomorrow
        );
    }

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(
            DateReference::parse("monday").unwrap(),
            DateReference::Weekday(Weekday::Mon)
        );
        assert_eq!(
            DateReference::parse("fri").unwrap(),
            DateReference::Weekday(Weekday::Fri)
        );
        assert_eq!(
            DateReference::parse("next monday").unwrap(),
            DateReference::NextWeekday(Weekday::Mon)
        );
    }

    #[test]
    fn test_parse_specific_dates() {
        let expected = DateReference::SpecificDate(base());
        assert_eq!(DateReference::parse("2025-01-17").unwrap(), expected);
        assert_eq!(DateReference::parse("17-01-2025").unwrap(), expected);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DateReference::parse("someday").is_err());
        assert!(DateReference::parse("2025-02-30").is_err());
        assert!(DateReference::parse("next funday").is_err());
        assert!(DateReference::parse("yesterday").is_err());

        match DateReference::parse("someday").unwrap_err() {
            BlockoutError::InvalidDate(input) => assert_eq!(input, "someday"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_relative_days() {
        assert_eq!(DateReference::Today.resolve(base()), base());
        assert_eq!(
            DateReference::Tomorrow.resolve(base()),
            NaiveDate::from_ymd_opt(2025, 1, 18).unwrap()
        );
    }

    #[test]
    fn test_resolve_weekday_same_day_is_today() {
        assert_eq!(DateReference::Weekday(Weekday::Fri).resolve(base()), base());
    }

    #[test]
    fn test_resolve_weekday_looks_forward() {
        assert_eq!(
            DateReference::Weekday(Weekday::Mon).resolve(base()),
            NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
        );
        assert_eq!(
            DateReference::Weekday(Weekday::Sat).resolve(base()),
            NaiveDate::from_ymd_opt(2025, 1, 18).unwrap()
        );
    }

    #[test]
    fn test_resolve_next_weekday_skips_today() {
        assert_eq!(
            DateReference::NextWeekday(Weekday::Fri).resolve(base()),
            NaiveDate::from_ymd_opt(2025, 1, 24).unwrap()
        );
        assert_eq!(
            DateReference::NextWeekday(Weekday::Tue).resolve(base()),
            NaiveDate::from_ymd_opt(2025, 1, 21).unwrap()
        );
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("14:30").unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("9:05").unwrap(),
            NaiveTime::from_hms_opt(9, 5, 0).unwrap()
        );
        assert_eq!(
            parse_time("2:30pm").unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("12:00 AM").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noon").is_err());
    }
}
