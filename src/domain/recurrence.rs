//! Recurrence parameters and until-date derivation

use crate::domain::BlockType;
use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Weekday numbers run 0 (Sunday) to 6 (Saturday)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyOptions {
    pub days_of_week: BTreeSet<u8>,
    pub number_of_weeks: u32,
}

impl Default for WeeklyOptions {
    fn default() -> Self {
        WeeklyOptions {
            days_of_week: (1..=5).collect(),
            number_of_weeks: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyOptions {
    pub dates_of_month: BTreeSet<u8>,
    pub number_of_months: u32,
}

impl Default for MonthlyOptions {
    fn default() -> Self {
        MonthlyOptions {
            dates_of_month: BTreeSet::from([1]),
            number_of_months: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyOptions {
    pub months_included: BTreeSet<u8>,
}

impl Default for YearlyOptions {
    fn default() -> Self {
        YearlyOptions {
            months_included: (1..=12).collect(),
        }
    }
}

/// The one parameter set that applies to a block type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recurrence {
    Single,
    Weekly(WeeklyOptions),
    Monthly(MonthlyOptions),
    Yearly(YearlyOptions),
}

impl Recurrence {
    pub fn block_type(&self) -> BlockType {
        match self {
            Recurrence::Single => BlockType::Single,
            Recurrence::Weekly(_) => BlockType::Weekly,
            Recurrence::Monthly(_) => BlockType::Monthly,
            Recurrence::Yearly(_) => BlockType::Yearly,
        }
    }

    /// Last date covered by the series, `None` for a single block.
    ///
    /// Month arithmetic clamps to the end of shorter months, so a monthly
    /// block starting Jan 31 for one month ends Feb 28 (or 29).
    pub fn until_date(&self, start: NaiveDate) -> Option<NaiveDate> {
        match self {
            Recurrence::Single => None,
            Recurrence::Weekly(options) => {
                start.checked_add_signed(Duration::weeks(i64::from(options.number_of_weeks)))
            }
            Recurrence::Monthly(options) => {
                start.checked_add_months(Months::new(options.number_of_months))
            }
            Recurrence::Yearly(_) => start.checked_add_months(Months::new(12)),
        }
    }
}

/// Parse a comma separated list of weekdays.
///
/// Accepts names (`mon`, `Tuesday`), numbers 0-6 with 0 as Sunday,
/// and the shortcuts `weekdays`, `weekends` and `all`.
pub fn parse_days_of_week(input: &str) -> Result<BTreeSet<u8>, String> {
    let mut days = BTreeSet::new();

    for raw in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let token = raw.to_lowercase();
        match token.as_str() {
            "weekdays" => days.extend(1..=5),
            "weekends" => days.extend([0, 6]),
            "all" | "everyday" => days.extend(0..=6),
            _ => {
                if let Ok(number) = token.parse::<u8>() {
                    if number > 6 {
                        return Err(format!(
                            "Invalid day of week: {}. Use 0 (Sunday) to 6 (Saturday)",
                            number
                        ));
                    }
                    days.insert(number);
                } else {
                    let index = lookup_name(&WEEKDAY_NAMES, &token)
                        .ok_or_else(|| format!("Invalid day of week: '{}'", raw))?;
                    days.insert(index as u8);
                }
            }
        }
    }

    Ok(days)
}

/// Parse a comma separated list of month dates (1-31). Ranges like `1-5` are allowed.
pub fn parse_dates_of_month(input: &str) -> Result<BTreeSet<u8>, String> {
    parse_numbers(input, 1, 31, "date of month")
}

/// Parse a comma separated list of months by number or name.
pub fn parse_months(input: &str) -> Result<BTreeSet<u8>, String> {
    let mut months = BTreeSet::new();

    for raw in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let token = raw.to_lowercase();
        if token == "all" {
            months.extend(1..=12);
        } else if let Some(index) = lookup_name(&MONTH_NAMES, &token) {
            months.insert(index as u8 + 1);
        } else {
            months.extend(parse_numbers(&token, 1, 12, "month")?);
        }
    }

    Ok(months)
}

/// Match a full name or a prefix of at least three letters
fn lookup_name(names: &[&str], token: &str) -> Option<usize> {
    if token.len() < 3 {
        return None;
    }
    names.iter().position(|name| name.starts_with(token))
}

fn parse_numbers(input: &str, min: u8, max: u8, what: &str) -> Result<BTreeSet<u8>, String> {
    let mut values = BTreeSet::new();

    for raw in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (low, high) = match raw.split_once('-') {
            Some((a, b)) => (a.trim(), b.trim()),
            None => (raw, raw),
        };
        let low: u8 = low
            .parse()
            .map_err(|_| format!("Invalid {}: '{}'", what, raw))?;
        let high: u8 = high
            .parse()
            .map_err(|_| format!("Invalid {}: '{}'", what, raw))?;

        if low < min || high > max || low > high {
            return Err(format!(
                "Invalid {}: '{}'. Use values from {} to {}",
                what, raw, min, max
            ));
        }
        values.extend(low..=high);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekly_until_date() {
        let recurrence = Recurrence::Weekly(WeeklyOptions {
            days_of_week: BTreeSet::from([1]),
            number_of_weeks: 2,
        });
        assert_eq!(
            recurrence.until_date(date(2025, 1, 6)),
            Some(date(2025, 1, 20))
        );
    }

    #[test]
    fn test_monthly_until_date() {
        let recurrence = Recurrence::Monthly(MonthlyOptions {
            dates_of_month: BTreeSet::from([6]),
            number_of_months: 3,
        });
        assert_eq!(
            recurrence.until_date(date(2025, 1, 6)),
            Some(date(2025, 4, 6))
        );
    }

    #[test]
    fn test_monthly_until_date_clamps_to_month_end() {
        let recurrence = Recurrence::Monthly(MonthlyOptions {
            dates_of_month: BTreeSet::from([31]),
            number_of_months: 1,
        });
        assert_eq!(
            recurrence.until_date(date(2025, 1, 31)),
            Some(date(2025, 2, 28))
        );
    }

    #[test]
    fn test_yearly_until_date() {
        let recurrence = Recurrence::Yearly(YearlyOptions::default());
        assert_eq!(
            recurrence.until_date(date(2025, 1, 6)),
            Some(date(2026, 1, 6))
        );
        // Leap day lands on Feb 28 the following year
        assert_eq!(
            recurrence.until_date(date(2024, 2, 29)),
            Some(date(2025, 2, 28))
        );
    }

    #[test]
    fn test_single_has_no_until_date() {
        assert_eq!(Recurrence::Single.until_date(date(2025, 1, 6)), None);
        assert_eq!(Recurrence::Single.block_type(), BlockType::Single);
    }

    #[test]
    fn test_defaults_match_form() {
        assert_eq!(
            WeeklyOptions::default().days_of_week,
            BTreeSet::from([1, 2, 3, 4, 5])
        );
        assert_eq!(WeeklyOptions::default().number_of_weeks, 1);
        assert_eq!(
            MonthlyOptions::default().dates_of_month,
            BTreeSet::from([1])
        );
        assert_eq!(YearlyOptions::default().months_included.len(), 12);
    }

    #[test]
    fn test_parse_days_by_name_and_number() {
        assert_eq!(
            parse_days_of_week("mon, wed,Friday").unwrap(),
            BTreeSet::from([1, 3, 5])
        );
        assert_eq!(parse_days_of_week("0,6").unwrap(), BTreeSet::from([0, 6]));
        assert_eq!(
            parse_days_of_week("weekdays").unwrap(),
            BTreeSet::from([1, 2, 3, 4, 5])
        );
        assert_eq!(
            parse_days_of_week("weekends,tue").unwrap(),
            BTreeSet::from([0, 2, 6])
        );
        assert!(parse_days_of_week("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_days_invalid() {
        assert!(parse_days_of_week("7").is_err());
        assert!(parse_days_of_week("funday").is_err());
        assert!(parse_days_of_week("mo").is_err());
    }

    #[test]
    fn test_parse_dates_of_month() {
        assert_eq!(
            parse_dates_of_month("1, 15,31").unwrap(),
            BTreeSet::from([1, 15, 31])
        );
        assert_eq!(
            parse_dates_of_month("1-3").unwrap(),
            BTreeSet::from([1, 2, 3])
        );
        assert!(parse_dates_of_month("0").is_err());
        assert!(parse_dates_of_month("32").is_err());
        assert!(parse_dates_of_month("5-2").is_err());
        assert!(parse_dates_of_month("first").is_err());
    }

    #[test]
    fn test_parse_months() {
        assert_eq!(
            parse_months("jan,Dec,6").unwrap(),
            BTreeSet::from([1, 6, 12])
        );
        assert_eq!(parse_months("6-8").unwrap(), BTreeSet::from([6, 7, 8]));
        assert_eq!(parse_months("all").unwrap().len(), 12);
        assert!(parse_months("13").is_err());
    }
}
