//! Block lengths offered by the schedule

use chrono::Duration;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Minutes a block may last, in the order they are offered
pub const DURATION_CHOICES: [u32; 10] = [15, 30, 45, 60, 90, 120, 180, 240, 480, 1440];

/// Matches `90`, `90m`, `1h`, `1.5h`, `1h30m`
fn duration_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^(?:(?P<hours>\d+(?:\.\d+)?)h)?(?:(?P<minutes>\d+)m?)?$").unwrap()
    })
}

/// A validated block length
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockDuration(u32);

impl BlockDuration {
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        DURATION_CHOICES
            .contains(&minutes)
            .then_some(BlockDuration(minutes))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn as_chrono(&self) -> Duration {
        Duration::minutes(i64::from(self.0))
    }

    /// Label shown next to the choice
    pub fn label(&self) -> &'static str {
        match self.0 {
            15 => "15 minutes",
            30 => "30 minutes",
            45 => "45 minutes",
            60 => "1 hour",
            90 => "1.5 hours",
            120 => "2 hours",
            180 => "3 hours",
            240 => "4 hours",
            480 => "8 hours (Half Day)",
            _ => "24 hours (Full Day)",
        }
    }

    /// Parse a duration string into minutes without checking the choices
    pub fn parse_minutes(input: &str) -> Option<u32> {
        let normalized = input.trim().to_lowercase().replace(' ', "");
        if normalized.is_empty() {
            return None;
        }

        let captures = duration_regex().captures(&normalized)?;
        let hours = match captures.name("hours") {
            Some(h) => h.as_str().parse::<f64>().ok()?,
            None => 0.0,
        };
        let minutes = match captures.name("minutes") {
            Some(m) => m.as_str().parse::<u32>().ok()?,
            None => 0,
        };

        let from_hours = hours * 60.0;
        if from_hours.fract() != 0.0 || from_hours > f64::from(u32::MAX) {
            return None;
        }
        (from_hours as u32).checked_add(minutes)
    }
}

impl Default for BlockDuration {
    fn default() -> Self {
        BlockDuration(60)
    }
}

impl fmt::Display for BlockDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
