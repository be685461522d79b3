//! SQLite-backed word store
//!
//! Handles database initialization, adding words for a user, listing a user's
//! pool, and persisting review results. Timestamps are stored as Unix
//! milliseconds; mastery levels are clamped into range when read back.

use super::WordStore;
use crate::error::StoreError;
use crate::models::{ItemId, MasteryLevel, NewWord, ReviewUpdate, VocabularyItem, WordStatus};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

const SELECT_WORDS: &str = "SELECT id, word, meaning, part_of_speech, pronunciation,
        category, example, mastery_level, last_reviewed, next_review_date,
        times_reviewed, times_correct
     FROM words";

pub struct SqliteWordStore {
    conn: Mutex<Connection>,
}

impl SqliteWordStore {
    /// Opens (or creates) the database file and ensures the schema exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        // status is kept alongside mastery_level for status queries; it is
        // only ever written from the level.
        conn.execute(
            "CREATE TABLE IF NOT EXISTS words (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                word TEXT NOT NULL,
                meaning TEXT NOT NULL,
                part_of_speech TEXT NOT NULL DEFAULT '',
                pronunciation TEXT,
                category TEXT NOT NULL DEFAULT '',
                example TEXT NOT NULL DEFAULT '',
                mastery_level INTEGER NOT NULL DEFAULT 0,
                status TEXT NOT NULL DEFAULT 'new',
                last_reviewed INTEGER,
                next_review_date INTEGER,
                times_reviewed INTEGER NOT NULL DEFAULT 0,
                times_correct INTEGER NOT NULL DEFAULT 0
            )",
            (),
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_words_user ON words(user_id)",
            (),
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Adds a word for a user at level 0 with no review history
    pub fn add_word(&self, user_id: &str, word: NewWord) -> Result<VocabularyItem, StoreError> {
        let item = VocabularyItem::new(word);
        self.insert(user_id, &item)?;
        Ok(item)
    }

    /// Inserts an item as-is, review state included
    pub fn insert(&self, user_id: &str, item: &VocabularyItem) -> Result<(), StoreError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO words (id, user_id, word, meaning, part_of_speech, pronunciation, category,
                example, mastery_level, status, last_reviewed, next_review_date, times_reviewed,
                times_correct)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                item.id.to_string(),
                user_id,
                item.word,
                item.meaning,
                item.part_of_speech,
                item.pronunciation,
                item.category,
                item.example,
                item.mastery_level.value(),
                item.status().as_str(),
                item.last_reviewed.map(|t| t.timestamp_millis()),
                item.next_review_date.map(|t| t.timestamp_millis()),
                item.times_reviewed,
                item.times_correct,
            ],
        )?;
        Ok(())
    }

    /// Retrieves one word by id
    pub fn get(&self, item_id: ItemId) -> Result<VocabularyItem, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_WORDS} WHERE id = ?1"))?;
        stmt.query_row(params![item_id.to_string()], item_from_row)
            .optional()?
            .ok_or(StoreError::NotFound(item_id))
    }

    /// Retrieves a user's words currently labelled with `status`
    pub fn words_by_status(
        &self,
        user_id: &str,
        status: WordStatus,
    ) -> Result<Vec<VocabularyItem>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_WORDS} WHERE user_id = ?1 AND status = ?2 ORDER BY rowid"
        ))?;

        let items = stmt
            .query_map(params![user_id, status.as_str()], item_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }
}

impl WordStore for SqliteWordStore {
    /// Returns the user's words in insertion order
    fn list_items(&self, user_id: &str) -> Result<Vec<VocabularyItem>, StoreError> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare(&format!("{SELECT_WORDS} WHERE user_id = ?1 ORDER BY rowid"))?;

        let items = stmt
            .query_map(params![user_id], item_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(user_id, count = items.len(), "listed words");
        Ok(items)
    }

    /// Single UPDATE so the review fields always change together
    fn persist_review(&self, item_id: ItemId, update: &ReviewUpdate) -> Result<(), StoreError> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE words
             SET mastery_level = ?1, status = ?2, last_reviewed = ?3, next_review_date = ?4,
                 times_reviewed = ?5, times_correct = ?6
             WHERE id = ?7",
            params![
                update.mastery_level.value(),
                update.status.as_str(),
                update.last_reviewed.timestamp_millis(),
                update.next_review_date.timestamp_millis(),
                update.times_reviewed,
                update.times_correct,
                item_id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(item_id));
        }
        Ok(())
    }
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<VocabularyItem> {
    let id: String = row.get(0)?;
    let id = Uuid::parse_str(&id).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let raw_level: i64 = row.get(7)?;
    let mastery_level = MasteryLevel::clamped(raw_level);
    if i64::from(mastery_level.value()) != raw_level {
        tracing::warn!(item = %id, raw_level, "stored mastery level out of range, clamped");
    }

    Ok(VocabularyItem {
        id: ItemId::from_uuid(id),
        word: row.get(1)?,
        meaning: row.get(2)?,
        part_of_speech: row.get(3)?,
        pronunciation: row.get(4)?,
        category: row.get(5)?,
        example: row.get(6)?,
        mastery_level,
        last_reviewed: millis_to_datetime(&id, "last_reviewed", row.get(8)?),
        next_review_date: millis_to_datetime(&id, "next_review_date", row.get(9)?),
        times_reviewed: row.get(10)?,
        times_correct: row.get(11)?,
    })
}

/// Unrepresentable timestamps read back as never set.
fn millis_to_datetime(id: &Uuid, column: &str, millis: Option<i64>) -> Option<DateTime<Utc>> {
    let millis = millis?;
    let converted = DateTime::from_timestamp_millis(millis);
    if converted.is_none() {
        tracing::warn!(item = %id, column, millis, "stored timestamp out of range, ignored");
    }
    converted
}
