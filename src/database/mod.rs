//! Word store collaborators.
//!
//! The scheduler never touches storage directly; it reads a user's pool
//! through [`WordStore::list_items`] and hands each review's patch to
//! [`WordStore::persist_review`].

pub mod db;
pub mod memory;

pub use db::SqliteWordStore;
pub use memory::InMemoryWordStore;

use crate::error::StoreError;
use crate::models::{ItemId, ReviewUpdate, VocabularyItem};

pub trait WordStore {
    fn list_items(&self, user_id: &str) -> Result<Vec<VocabularyItem>, StoreError>;

    /// Writes every field of `update` in one step, or nothing.
    fn persist_review(&self, item_id: ItemId, update: &ReviewUpdate) -> Result<(), StoreError>;
}
