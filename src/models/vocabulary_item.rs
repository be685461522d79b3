//! A vocabulary item is a word with its meaning plus the review state the scheduler reads.
use super::{MasteryLevel, WordStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a vocabulary item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Word content supplied by the add-word workflow.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWord {
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub example: String,
}

/// The status label is not stored here: [`VocabularyItem::status`] derives it
/// from `mastery_level` so the two can never disagree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub id: ItemId,
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub mastery_level: MasteryLevel,
    #[serde(default)]
    pub last_reviewed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_review_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub times_reviewed: u32,
    #[serde(default)]
    pub times_correct: u32,
}

impl VocabularyItem {
    /// A freshly added word: level 0, never reviewed.
    pub fn new(word: NewWord) -> Self {
        Self::with_id(ItemId::new(), word)
    }

    pub fn with_id(id: ItemId, word: NewWord) -> Self {
        Self {
            id,
            word: word.word,
            meaning: word.meaning,
            part_of_speech: word.part_of_speech,
            pronunciation: word.pronunciation,
            category: word.category,
            example: word.example,
            mastery_level: MasteryLevel::MIN,
            last_reviewed: None,
            next_review_date: None,
            times_reviewed: 0,
            times_correct: 0,
        }
    }

    pub fn status(&self) -> WordStatus {
        self.mastery_level.status()
    }
}
