// Day selector model
// Which of the three schedule cards a view is rendering

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Relative day shown by a schedule card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DaySelector {
    Today,
    Tomorrow,
    DayAfterTomorrow,
}

impl DaySelector {
    pub const ALL: [DaySelector; 3] = [
        DaySelector::Today,
        DaySelector::Tomorrow,
        DaySelector::DayAfterTomorrow,
    ];

    /// Number of days added to the base date.
    pub fn offset_days(self) -> i64 {
        match self {
            DaySelector::Today => 0,
            DaySelector::Tomorrow => 1,
            DaySelector::DayAfterTomorrow => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DaySelector::Today => "Today",
            DaySelector::Tomorrow => "Tomorrow",
            DaySelector::DayAfterTomorrow => "Day after tomorrow",
        }
    }
}

impl Default for DaySelector {
    fn default() -> Self {
        Self::Today
    }
}

impl fmt::Display for DaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DaySelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "today" => Ok(Self::Today),
            "tomorrow" => Ok(Self::Tomorrow),
            "dayAfterTomorrow" | "day-after-tomorrow" => Ok(Self::DayAfterTomorrow),
            other => Err(format!("Unknown day selector: {}", other)),
        }
    }
}
