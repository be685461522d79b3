use super::{ItemId, MasteryLevel, VocabularyItem, WordStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields a single review writes back to the word store.
///
/// Always applied as one unit; a store must never persist part of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
    pub item_id: ItemId,
    pub mastery_level: MasteryLevel,
    pub status: WordStatus,
    pub last_reviewed: DateTime<Utc>,
    pub next_review_date: DateTime<Utc>,
    pub times_reviewed: u32,
    pub times_correct: u32,
}

impl ReviewUpdate {
    /// Copies the update onto an in-memory item.
    pub fn apply_to(&self, item: &mut VocabularyItem) {
        item.mastery_level = self.mastery_level;
        item.last_reviewed = Some(self.last_reviewed);
        item.next_review_date = Some(self.next_review_date);
        item.times_reviewed = self.times_reviewed;
        item.times_correct = self.times_correct;
    }
}
