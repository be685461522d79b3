//! Mastery level (0-5) and the status label derived from it.
use crate::error::SchedulerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How well an item is learned: 0 = untouched, 5 = mastered.
///
/// Always within `0..=5`. Values read back from storage go through
/// [`MasteryLevel::clamped`]; internal construction paths use
/// [`MasteryLevel::new`] and reject anything out of range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct MasteryLevel(u8);

impl MasteryLevel {
    pub const MIN: MasteryLevel = MasteryLevel(0);
    pub const MAX: MasteryLevel = MasteryLevel(5);

    pub fn new(level: i64) -> Result<Self, SchedulerError> {
        if (0..=5).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(SchedulerError::InvalidMasteryLevel(level))
        }
    }

    /// Pins an untrusted value into range.
    pub fn clamped(level: i64) -> Self {
        Self(level.clamp(0, 5) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_mastered(self) -> bool {
        self == Self::MAX
    }

    pub fn status(self) -> WordStatus {
        match self.0 {
            0 => WordStatus::New,
            5 => WordStatus::Mastered,
            _ => WordStatus::Learning,
        }
    }

    pub(crate) fn raised(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX.0))
    }

    pub(crate) fn lowered(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl From<i64> for MasteryLevel {
    fn from(level: i64) -> Self {
        Self::clamped(level)
    }
}

impl From<MasteryLevel> for u8 {
    fn from(level: MasteryLevel) -> Self {
        level.0
    }
}

impl fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Learning stage label, fully determined by the mastery level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    New,
    Learning,
    Mastered,
}

impl WordStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WordStatus::New => "new",
            WordStatus::Learning => "learning",
            WordStatus::Mastered => "mastered",
        }
    }
}

impl fmt::Display for WordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(MasteryLevel::new(-1).is_err());
        assert!(MasteryLevel::new(6).is_err());
        assert_eq!(MasteryLevel::new(3).unwrap().value(), 3);
    }

    #[test]
    fn test_clamped_pins_to_range() {
        assert_eq!(MasteryLevel::clamped(-4), MasteryLevel::MIN);
        assert_eq!(MasteryLevel::clamped(42), MasteryLevel::MAX);
        assert_eq!(MasteryLevel::clamped(2).value(), 2);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(MasteryLevel::clamped(0).status(), WordStatus::New);
        for level in 1..=4 {
            assert_eq!(MasteryLevel::clamped(level).status(), WordStatus::Learning);
        }
        assert_eq!(MasteryLevel::clamped(5).status(), WordStatus::Mastered);
    }

    #[test]
    fn test_deserialize_clamps() {
        let level: MasteryLevel = serde_json::from_str("9").unwrap();
        assert_eq!(level, MasteryLevel::MAX);
        assert_eq!(serde_json::to_string(&MasteryLevel::clamped(3)).unwrap(), "3");
    }
}
