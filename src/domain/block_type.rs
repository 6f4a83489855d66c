//! Recurrence kinds for blocked time

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a blocked time repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// One occurrence only
    #[default]
    Single,
    /// Selected weekdays for a number of weeks
    Weekly,
    /// Selected dates of the month for a number of months
    Monthly,
    /// Selected months for one year
    Yearly,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Single => "single",
            BlockType::Weekly => "weekly",
            BlockType::Monthly => "monthly",
            BlockType::Yearly => "yearly",
        }
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, BlockType::Single)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" | "once" => Ok(BlockType::Single),
            "weekly" => Ok(BlockType::Weekly),
            "monthly" => Ok(BlockType::Monthly),
            "yearly" => Ok(BlockType::Yearly),
            _ => Err(format!(
                "Invalid block type: '{}'. Valid types are: single, weekly, monthly, yearly",
                s
            )),
        }
    }
}
