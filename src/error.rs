//! Error types for scheduling, storage and configuration.

use crate::models::ItemId;

/// Errors surfaced by the scheduler and the study workflow.
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    /// The user's word pool is empty before any filtering.
    #[error("No flashcards available. Add some words to get started.")]
    NoItems,

    #[error("invalid performance grade {0:?}, expected difficult, ok or easy")]
    InvalidGrade(String),

    #[error("mastery level {0} is outside 0..=5")]
    InvalidMasteryLevel(i64),

    #[error("need at least {required} studied words for a quiz, found {found}")]
    NotEnoughWords { required: usize, found: usize },

    #[error("the session has no current card")]
    NoCurrentItem,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures reported by a word store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("word {0} not found")]
    NotFound(ItemId),

    #[error("store lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
