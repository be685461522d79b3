//! Scheduler settings, loadable from JSON. Every field has a default.
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MAX_SESSION_SIZE: usize = 12;
pub const DEFAULT_QUIZ_LENGTH: usize = 10;
pub const DEFAULT_QUIZ_CHOICES: usize = 4;

/// What to do when an explicit selection yields fewer cards than the cap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// The surviving selection is the whole session.
    #[default]
    Exact,
    /// Fill the remaining slots from the prioritized pool.
    TopUp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub max_session_size: usize,
    pub selection_mode: SelectionMode,
    /// Leave not-yet-due items out of prioritized sessions.
    pub due_only: bool,
    pub quiz_length: usize,
    /// Answer options per quiz question, the correct one included.
    pub quiz_choices: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_session_size: DEFAULT_MAX_SESSION_SIZE,
            selection_mode: SelectionMode::default(),
            due_only: false,
            quiz_length: DEFAULT_QUIZ_LENGTH,
            quiz_choices: DEFAULT_QUIZ_CHOICES,
        }
    }
}

impl SchedulerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_session_size == 0 {
            return Err(ConfigError::Invalid(
                "max_session_size must be at least 1".to_string(),
            ));
        }
        if self.quiz_choices < 2 {
            return Err(ConfigError::Invalid(
                "quiz_choices must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}
