//! Combines the transition and interval model into the patch a review persists.

use super::interval::next_review_date;
use super::transition::transition;
use crate::database::WordStore;
use crate::error::StoreError;
use crate::models::{Grade, ReviewUpdate, VocabularyItem};
use chrono::{DateTime, Utc};

/// Computes every field one review changes. The next review date is derived
/// from the *new* mastery level.
pub fn apply_review(item: &VocabularyItem, grade: Grade, now: DateTime<Utc>) -> ReviewUpdate {
    let next = transition(item.mastery_level, grade);
    let times_correct = if grade.is_correct() {
        item.times_correct.saturating_add(1)
    } else {
        item.times_correct
    };

    ReviewUpdate {
        item_id: item.id,
        mastery_level: next.mastery_level,
        status: next.status,
        last_reviewed: now,
        next_review_date: next_review_date(next.mastery_level.value(), grade, now),
        times_reviewed: item.times_reviewed.saturating_add(1),
        times_correct,
    }
}

/// Persists a review and mirrors it onto `item` once the store accepted it.
///
/// Reviews of the same item must be serialized by the caller: the transition
/// reads the previously persisted level.
pub fn record_review<S: WordStore + ?Sized>(
    store: &S,
    item: &mut VocabularyItem,
    grade: Grade,
    now: DateTime<Utc>,
) -> Result<ReviewUpdate, StoreError> {
    let update = apply_review(item, grade, now);
    store.persist_review(item.id, &update)?;
    update.apply_to(item);

    tracing::info!(
        item = %item.id,
        grade = %grade,
        level = %update.mastery_level,
        next_review = %update.next_review_date,
        "review recorded"
    );
    Ok(update)
}
