use crate::config::ParameterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//compounding/deposit interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "D", alias = "Daily")]
    Daily,
    #[serde(rename = "W", alias = "Weekly")]
    Weekly,
    #[serde(rename = "M", alias = "Monthly")]
    Monthly,
    #[serde(rename = "Y", alias = "Yearly")]
    Yearly,
}

impl Interval {
    //menu order used by the interactive prompt
    pub const ALL: [Interval; 4] = [
        Interval::Daily,
        Interval::Weekly,
        Interval::Monthly,
        Interval::Yearly,
    ];

    //number of compounding periods (and deposits) per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Interval::Daily => 365,
            Interval::Weekly => 52,
            Interval::Monthly => 12,
            Interval::Yearly => 1,
        }
    }

    //single-letter code (D, W, M, Y)
    pub fn code(&self) -> char {
        match self {
            Interval::Daily => 'D',
            Interval::Weekly => 'W',
            Interval::Monthly => 'M',
            Interval::Yearly => 'Y',
        }
    }

    //human label
    pub fn name(&self) -> &'static str {
        match self {
            Interval::Daily => "Daily",
            Interval::Weekly => "Weekly",
            Interval::Monthly => "Monthly",
            Interval::Yearly => "Yearly",
        }
    }

    //parse interval from a code or a label, case-insensitive
    pub fn parse(s: &str) -> Result<Self, ParameterError> {
        match s.trim().to_lowercase().as_str() {
            "d" | "daily" => Ok(Interval::Daily),
            "w" | "weekly" => Ok(Interval::Weekly),
            "m" | "monthly" => Ok(Interval::Monthly),
            "y" | "yearly" => Ok(Interval::Yearly),
            _ => Err(ParameterError::UnknownInterval(s.to_string())),
        }
    }

    //maps a 1-based menu choice to an interval
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Interval::ALL.get(index))
            .copied()
    }
}

impl FromStr for Interval {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::parse(s)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
