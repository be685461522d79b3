//! Review prioritizer.
//!
//! Orders a pool of items so the most valuable reviews come first:
//! - Mastered items are dropped unless they are due again
//! - Due items come before not-due items
//! - Within that, lower mastery levels come first
//! - Then the least recently reviewed, with never-reviewed items first
//!
//! The sort is stable, so fully tied items keep their input order. Shuffling is
//! a separate step ([`shuffle_items`]) and is never mixed into the ordering.

use super::interval::is_due;
use crate::models::VocabularyItem;
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

/// Mastered items only come back once they are due.
pub fn is_studyable(item: &VocabularyItem, now: DateTime<Utc>) -> bool {
    !item.mastery_level.is_mastered() || is_due(item, now)
}

pub fn prioritize(items: &[VocabularyItem], now: DateTime<Utc>) -> Vec<&VocabularyItem> {
    let mut ranked: Vec<(bool, &VocabularyItem)> = items
        .iter()
        .map(|item| (is_due(item, now), item))
        .filter(|(due, item)| *due || !item.mastery_level.is_mastered())
        .collect();

    // `None < Some(_)`, so never-reviewed items lead their mastery tier.
    ranked.sort_by_key(|(due, item)| (!*due, item.mastery_level, item.last_reviewed));

    tracing::debug!(
        pool = items.len(),
        kept = ranked.len(),
        due = ranked.iter().filter(|(due, _)| *due).count(),
        "prioritized review pool"
    );

    ranked.into_iter().map(|(_, item)| item).collect()
}

/// Random reorder, applied explicitly to an already prioritized list.
pub fn shuffle_items<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
