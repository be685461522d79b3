//! Self-reported recall quality for a single review.
use crate::error::SchedulerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    /// Not recalled, or recalled with real effort.
    Difficult,
    Ok,
    /// "I already know this."
    Easy,
}

impl Grade {
    pub const ALL: [Grade; 3] = [Grade::Difficult, Grade::Ok, Grade::Easy];

    /// Whether the review counts towards `times_correct`.
    pub fn is_correct(self) -> bool {
        !matches!(self, Grade::Difficult)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::Difficult => "difficult",
            Grade::Ok => "ok",
            Grade::Easy => "easy",
        }
    }
}

impl FromStr for Grade {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "difficult" => Ok(Grade::Difficult),
            "ok" => Ok(Grade::Ok),
            "easy" => Ok(Grade::Easy),
            _ => Err(SchedulerError::InvalidGrade(s.to_string())),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
