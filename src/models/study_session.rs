//! In-memory study session: an ordered list of cards plus a cursor.
//! Grading goes through the word store; nothing about the session itself is persisted.

use super::{Grade, ItemId, ReviewUpdate, VocabularyItem};
use crate::clock::Clock;
use crate::config::SchedulerConfig;
use crate::database::WordStore;
use crate::error::{Result, SchedulerError};
use crate::scheduler::{SessionBuilder, record_review, shuffle_items};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// The cursor points at a card.
    Ready,
    /// The cursor is past the last card.
    Completed,
}

/// Count of grades given during the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub difficult: usize,
    pub ok: usize,
    pub easy: usize,
}

impl SessionTally {
    fn record(&mut self, grade: Grade) {
        match grade {
            Grade::Difficult => self.difficult += 1,
            Grade::Ok => self.ok += 1,
            Grade::Easy => self.easy += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.difficult + self.ok + self.easy
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GradeOutcome {
    pub update: ReviewUpdate,
    /// The card left the session (graded easy) instead of the cursor moving on.
    pub removed: bool,
}

/// `cursor == items.len()` is the end-of-list sentinel.
#[derive(Clone, Debug, Default)]
pub struct StudySession {
    items: Vec<VocabularyItem>,
    cursor: usize,
    tally: SessionTally,
}

impl StudySession {
    pub fn new(items: Vec<VocabularyItem>) -> Self {
        Self {
            items,
            cursor: 0,
            tally: SessionTally::default(),
        }
    }

    /// Lists the user's words and builds a session from them.
    pub fn load<S, C>(
        store: &S,
        clock: &C,
        user_id: &str,
        selection: &[ItemId],
        config: &SchedulerConfig,
    ) -> Result<Self>
    where
        S: WordStore + ?Sized,
        C: Clock + ?Sized,
    {
        let pool = store.list_items(user_id)?;
        let items = SessionBuilder::from_config(&pool, config)
            .with_selection(selection)
            .build(clock.now())?;
        Ok(Self::new(items))
    }

    /// Throws the session away and builds a fresh one.
    pub fn reset<S, C>(
        &mut self,
        store: &S,
        clock: &C,
        user_id: &str,
        selection: &[ItemId],
        config: &SchedulerConfig,
    ) -> Result<()>
    where
        S: WordStore + ?Sized,
        C: Clock + ?Sized,
    {
        *self = Self::load(store, clock, user_id, selection, config)?;
        Ok(())
    }

    pub fn items(&self) -> &[VocabularyItem] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&VocabularyItem> {
        self.items.get(self.cursor)
    }

    pub fn tally(&self) -> SessionTally {
        self.tally
    }

    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.cursor)
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_completed() {
            SessionPhase::Completed
        } else {
            SessionPhase::Ready
        }
    }

    pub fn is_completed(&self) -> bool {
        self.cursor >= self.items.len()
    }

    pub fn advance(&mut self) {
        if self.cursor < self.items.len() {
            self.cursor += 1;
        }
    }

    pub fn retreat(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Drops the current card. The cursor keeps its index, so it lands on the
    /// card that followed, or on the end sentinel when none did.
    pub fn remove_current(&mut self) -> Option<VocabularyItem> {
        if self.cursor < self.items.len() {
            Some(self.items.remove(self.cursor))
        } else {
            None
        }
    }

    /// Records a grade for the current card and moves on.
    ///
    /// An easy grade masters the card and removes it from the session; other
    /// grades advance the cursor. Nothing changes if the store rejects the
    /// update.
    pub fn grade_current<S, C>(
        &mut self,
        store: &S,
        clock: &C,
        grade: Grade,
    ) -> Result<GradeOutcome>
    where
        S: WordStore + ?Sized,
        C: Clock + ?Sized,
    {
        let item = self
            .items
            .get_mut(self.cursor)
            .ok_or(SchedulerError::NoCurrentItem)?;

        let update = record_review(store, item, grade, clock.now())?;
        self.tally.record(grade);

        let removed = grade == Grade::Easy;
        if removed {
            self.remove_current();
        } else {
            self.advance();
        }

        Ok(GradeOutcome { update, removed })
    }

    /// Randomly reorders the cards not yet reached. Cards already graded
    /// stay behind the cursor, so none of them comes up twice.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(rest) = self.items.get_mut(self.cursor..) {
            shuffle_items(rest, rng);
        }
    }
}
