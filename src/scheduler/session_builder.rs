//! Session builder.
//!
//! Decides the capped list of items for one study sitting. An explicit
//! selection is honoured first (mastered-and-not-due items are still left
//! out); otherwise, or to fill remaining slots in [`SelectionMode::TopUp`], the
//! prioritized pool is used with `learning` items ahead of everything else.

use super::interval::is_due;
use super::prioritizer::{is_studyable, prioritize};
use crate::config::{DEFAULT_MAX_SESSION_SIZE, SchedulerConfig, SelectionMode};
use crate::error::{Result, SchedulerError};
use crate::models::{ItemId, VocabularyItem, WordStatus};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

pub struct SessionBuilder<'a> {
    pool: &'a [VocabularyItem],
    selection: &'a [ItemId],
    max_session_size: usize,
    selection_mode: SelectionMode,
    due_only: bool,
}

impl<'a> SessionBuilder<'a> {
    #[must_use]
    pub fn new(pool: &'a [VocabularyItem]) -> Self {
        Self {
            pool,
            selection: &[],
            max_session_size: DEFAULT_MAX_SESSION_SIZE,
            selection_mode: SelectionMode::default(),
            due_only: false,
        }
    }

    #[must_use]
    pub fn from_config(pool: &'a [VocabularyItem], config: &SchedulerConfig) -> Self {
        Self::new(pool)
            .with_max_session_size(config.max_session_size)
            .with_selection_mode(config.selection_mode)
            .with_due_only(config.due_only)
    }

    /// Ids the user picked explicitly, in the order they should be studied.
    #[must_use]
    pub fn with_selection(mut self, selection: &'a [ItemId]) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub fn with_max_session_size(mut self, max_session_size: usize) -> Self {
        self.max_session_size = max_session_size;
        self
    }

    #[must_use]
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    #[must_use]
    pub fn with_due_only(mut self, due_only: bool) -> Self {
        self.due_only = due_only;
        self
    }

    /// Fails only when the pool itself is empty. Nothing to study right now
    /// is an empty `Ok`.
    pub fn build(self, now: DateTime<Utc>) -> Result<Vec<VocabularyItem>> {
        if self.pool.is_empty() {
            return Err(SchedulerError::NoItems);
        }

        let cap = self.max_session_size;
        let mut chosen = self.selected(now);
        chosen.truncate(cap);

        let exact = self.selection_mode == SelectionMode::Exact;
        if !(exact && !chosen.is_empty()) && chosen.len() < cap {
            let taken: HashSet<ItemId> = chosen.iter().map(|item| item.id).collect();
            let (learning, others): (Vec<_>, Vec<_>) = prioritize(self.pool, now)
                .into_iter()
                .filter(|item| !taken.contains(&item.id))
                .filter(|item| !self.due_only || is_due(item, now))
                .partition(|item| item.status() == WordStatus::Learning);

            let room = cap - chosen.len();
            chosen.extend(learning.into_iter().chain(others).take(room));
        }

        tracing::info!(
            pool = self.pool.len(),
            selected = self.selection.len(),
            size = chosen.len(),
            cap,
            "built study session"
        );

        Ok(chosen.into_iter().cloned().collect())
    }

    /// Selected items in selection order, minus duplicates and items that do
    /// not need study.
    fn selected(&self, now: DateTime<Utc>) -> Vec<&'a VocabularyItem> {
        if self.selection.is_empty() {
            return Vec::new();
        }

        let by_id: HashMap<ItemId, &'a VocabularyItem> =
            self.pool.iter().map(|item| (item.id, item)).collect();
        let mut seen = HashSet::new();
        let mut missing = 0usize;
        let mut chosen = Vec::new();

        for id in self.selection {
            if !seen.insert(*id) {
                continue;
            }
            match by_id.get(id) {
                Some(item) if is_studyable(item, now) => chosen.push(*item),
                Some(_) => {}
                None => missing += 1,
            }
        }

        if missing > 0 {
            tracing::warn!(missing, "selection names words that are not in the pool");
        }
        chosen
    }
}

/// Builds a session with the default selection mode.
pub fn build_session(
    pool: &[VocabularyItem],
    selection: Option<&[ItemId]>,
    now: DateTime<Utc>,
    max_session_size: usize,
) -> Result<Vec<VocabularyItem>> {
    SessionBuilder::new(pool)
        .with_selection(selection.unwrap_or_default())
        .with_max_session_size(max_session_size)
        .build(now)
}
