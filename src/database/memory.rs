//! Mutex-guarded in-process word store.
use super::WordStore;
use crate::error::StoreError;
use crate::models::{ItemId, NewWord, ReviewUpdate, VocabularyItem};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryWordStore {
    users: Mutex<HashMap<String, Vec<VocabularyItem>>>,
}

impl InMemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an existing item to a user's pool and returns a copy of it.
    pub fn insert(
        &self,
        user_id: &str,
        item: VocabularyItem,
    ) -> Result<VocabularyItem, StoreError> {
        let mut users = self.users.lock().map_err(|_| StoreError::LockPoisoned)?;
        users
            .entry(user_id.to_string())
            .or_default()
            .push(item.clone());
        Ok(item)
    }

    pub fn add_word(&self, user_id: &str, word: NewWord) -> Result<VocabularyItem, StoreError> {
        self.insert(user_id, VocabularyItem::new(word))
    }
}

impl WordStore for InMemoryWordStore {
    fn list_items(&self, user_id: &str) -> Result<Vec<VocabularyItem>, StoreError> {
        let users = self.users.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users.get(user_id).cloned().unwrap_or_default())
    }

    fn persist_review(&self, item_id: ItemId, update: &ReviewUpdate) -> Result<(), StoreError> {
        let mut users = self.users.lock().map_err(|_| StoreError::LockPoisoned)?;
        let item = users
            .values_mut()
            .flat_map(|items| items.iter_mut())
            .find(|item| item.id == item_id)
            .ok_or(StoreError::NotFound(item_id))?;

        update.apply_to(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;
    use crate::scheduler::apply_review;
    use std::sync::Arc;

    fn word(text: &str) -> NewWord {
        NewWord {
            word: text.to_string(),
            meaning: format!("meaning of {text}"),
            ..Default::default()
        }
    }

    #[test]
    fn test_pools_are_per_user() {
        let store = InMemoryWordStore::new();
        store.add_word("alice", word("sign")).unwrap();
        store.add_word("alice", word("resolve")).unwrap();
        store.add_word("bob", word("binding")).unwrap();

        assert_eq!(store.list_items("alice").unwrap().len(), 2);
        assert_eq!(store.list_items("bob").unwrap().len(), 1);
        assert!(store.list_items("carol").unwrap().is_empty());
    }

    #[test]
    fn test_poisoned_lock_is_reported_everywhere() {
        let store = Arc::new(InMemoryWordStore::new());
        let added = store.add_word("alice", word("sign")).unwrap();

        let poisoner = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.users.lock().unwrap();
            panic!("poison the store lock");
        })
        .join();

        assert!(matches!(
            store.add_word("alice", word("resolve")),
            Err(StoreError::LockPoisoned)
        ));
        assert!(matches!(store.list_items("alice"), Err(StoreError::LockPoisoned)));

        let update = apply_review(&added, Grade::Ok, chrono::Utc::now());
        assert!(matches!(
            store.persist_review(added.id, &update),
            Err(StoreError::LockPoisoned)
        ));
    }
}
