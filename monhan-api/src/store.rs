//! Read-only record stores
//!
//! Each collection is loaded once before serving begins and never mutated
//! afterwards, so stores need no locking and iteration order is always the
//! load order — the property deterministic pagination relies on.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Immutable, ordered collection of records.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> RecordStore<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    /// All records in load order.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record satisfying the predicate, in load order.
    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&&T) -> bool,
    {
        self.records.iter().find(predicate)
    }
}

impl<T: Clone> RecordStore<T> {
    /// All records satisfying the predicate, preserving load order.
    pub fn select<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Read and deserialize one dataset file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .map_err(|e| Error::Dataset(format!("failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| Error::Dataset(format!("failed to parse {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_preserves_insertion_order() {
        let store = RecordStore::new(vec!["b", "a", "c"]);
        assert_eq!(store.all(), &["b", "a", "c"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn select_preserves_relative_order() {
        let store = RecordStore::new(vec![3, 1, 4, 1, 5]);
        assert_eq!(store.select(|n| *n <= 3), vec![3, 1, 1]);
    }

    #[test]
    fn find_returns_first_match() {
        let store = RecordStore::new(vec![("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(store.find(|(k, _)| *k == "a"), Some(&("a", 1)));
    }

    #[test]
    fn empty_store_is_a_valid_state() {
        let store: RecordStore<u8> = RecordStore::default();
        assert!(store.is_empty());
        assert!(store.find(|_| true).is_none());
        assert!(store.select(|_| true).is_empty());
    }

    #[test]
    fn load_json_reports_missing_file() {
        let err = load_json::<serde_json::Value>(Path::new("/nonexistent/monsters.json"))
            .unwrap_err();
        assert!(err.to_string().contains("monsters.json"));
    }
}
