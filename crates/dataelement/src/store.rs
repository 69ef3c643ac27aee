use crate::PersistenceError;

use indexmap::IndexMap;
use std::sync::{Mutex, MutexGuard};

/// A keyed document store, the persistence backend generated handlers run
/// against.
///
/// Documents live in named collections under a caller-chosen key. Scanning
/// yields documents lazily; a store that reads from an external system can
/// surface per-document failures through the iterator items.
pub trait DocumentStore {
    type Iter: Iterator<Item = Result<serde_json::Value, PersistenceError>>;

    /// Inserts a document, replacing any existing document under the same
    /// key.
    fn upsert(
        &self,
        collection: &str,
        key: &str,
        document: serde_json::Value,
    ) -> Result<(), PersistenceError>;

    /// Removes every document in the collection.
    fn clear(&self, collection: &str) -> Result<(), PersistenceError>;

    /// Streams every document in the collection. An unknown collection is
    /// an empty stream, not an error.
    fn scan(&self, collection: &str) -> Result<Self::Iter, PersistenceError>;
}

impl<S: DocumentStore> DocumentStore for &S {
    type Iter = S::Iter;

    fn upsert(
        &self,
        collection: &str,
        key: &str,
        document: serde_json::Value,
    ) -> Result<(), PersistenceError> {
        (**self).upsert(collection, key, document)
    }

    fn clear(&self, collection: &str) -> Result<(), PersistenceError> {
        (**self).clear(collection)
    }

    fn scan(&self, collection: &str) -> Result<Self::Iter, PersistenceError> {
        (**self).scan(collection)
    }
}

type Collections = IndexMap<String, IndexMap<String, serde_json::Value>>;

/// In-memory document store.
///
/// Collections are insertion-ordered maps held under one lock, so scans
/// replay documents in the order they were first saved. Scans snapshot the
/// collection, so the iterator never holds the lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, PersistenceError> {
        self.collections
            .lock()
            .map_err(|_| PersistenceError::Connection("store lock poisoned".to_string()))
    }
}

impl DocumentStore for MemoryStore {
    type Iter = std::vec::IntoIter<Result<serde_json::Value, PersistenceError>>;

    fn upsert(
        &self,
        collection: &str,
        key: &str,
        document: serde_json::Value,
    ) -> Result<(), PersistenceError> {
        self.lock()?
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), document);

        Ok(())
    }

    fn clear(&self, collection: &str) -> Result<(), PersistenceError> {
        if let Some(documents) = self.lock()?.get_mut(collection) {
            documents.clear();
        }

        Ok(())
    }

    fn scan(&self, collection: &str) -> Result<Self::Iter, PersistenceError> {
        let documents: Vec<_> = self
            .lock()?
            .get(collection)
            .map(|documents| documents.values().cloned().map(Ok).collect())
            .unwrap_or_default();

        Ok(documents.into_iter())
    }
}
