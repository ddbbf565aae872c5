use std::collections::BTreeSet;

use super::storage::KeyValueStore;

/// Storage key holding the shortlisted ids as a JSON array
pub const STORAGE_KEY: &str = "wedding.shortlist.v1";

/// The set of studios the user has picked.
///
/// The in-memory set is authoritative for the session. Persistence is best
/// effort: read and write failures are logged and otherwise ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shortlist {
    ids: BTreeSet<String>,
}

impl Shortlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted shortlist. Never fails: anything unexpected
    /// in storage yields an empty set.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let raw = match store.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(err) => {
                tracing::warn!("⚠️  Could not read shortlist: {}", err);
                return Self::new();
            }
        };

        let shortlist = Self::from_json(&raw);
        tracing::debug!("Loaded shortlist with {} studios", shortlist.len());
        shortlist
    }

    /// Parse a stored value. Non-arrays are discarded; non-string entries
    /// are dropped.
    fn from_json(raw: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("⚠️  Ignoring corrupt shortlist: {}", err);
                return Self::new();
            }
        };

        let Some(items) = value.as_array() else {
            tracing::warn!("⚠️  Ignoring shortlist that is not a list");
            return Self::new();
        };

        let ids = items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::to_string)
            .collect();

        Self { ids }
    }

    /// Persist the whole set, replacing whatever was stored before
    pub fn save(&self, store: &dyn KeyValueStore) {
        let ids: Vec<&str> = self.ids.iter().map(String::as_str).collect();

        let json = match serde_json::to_string(&ids) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!("⚠️  Could not encode shortlist: {}", err);
                return;
            }
        };

        if let Err(err) = store.set_item(STORAGE_KEY, &json) {
            tracing::warn!("⚠️  Could not save shortlist: {}", err);
        }
    }

    /// Add `id` if absent, remove it if present, then save.
    /// Returns whether `id` is shortlisted afterwards.
    pub fn toggle(&mut self, id: &str, store: &dyn KeyValueStore) -> bool {
        let picked = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };

        self.save(store);
        picked
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Shortlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::state::storage::Storage;
    use tempfile::tempdir;

    /// Store whose every operation fails
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::NoDataDir)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::NoDataDir)
        }
    }

    #[test]
    fn test_save_then_load_in_fresh_instance() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("shortlist.db");
        let original: Shortlist = ["mimosa", "aurora", "lotus"].into_iter().collect();

        {
            let storage = Storage::open(&db_path).unwrap();
            original.save(&storage);
        }

        let storage = Storage::open(&db_path).unwrap();
        let loaded = Shortlist::load(&storage);
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let storage = Storage::open_in_memory().unwrap();
        assert!(Shortlist::load(&storage).is_empty());
    }

    #[test]
    fn test_corrupt_json_loads_empty() {
        let storage = Storage::open_in_memory().unwrap();
        storage.set_item(STORAGE_KEY, "[\"aurora\",").unwrap();
        assert!(Shortlist::load(&storage).is_empty());
    }

    #[test]
    fn test_non_list_loads_empty() {
        let storage = Storage::open_in_memory().unwrap();
        storage.set_item(STORAGE_KEY, r#"{"aurora": true}"#).unwrap();
        assert!(Shortlist::load(&storage).is_empty());
    }

    #[test]
    fn test_non_string_entries_are_dropped() {
        let storage = Storage::open_in_memory().unwrap();
        storage.set_item(STORAGE_KEY, r#"["aurora", 42, null, "lotus"]"#).unwrap();

        let loaded = Shortlist::load(&storage);
        assert_eq!(loaded.iter().collect::<Vec<_>>(), vec!["aurora", "lotus"]);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let storage = Storage::open_in_memory().unwrap();
        storage.set_item(STORAGE_KEY, r#"["old"]"#).unwrap();

        let shortlist: Shortlist = ["new"].into_iter().collect();
        shortlist.save(&storage);

        assert_eq!(storage.get_item(STORAGE_KEY).unwrap().as_deref(), Some(r#"["new"]"#));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let storage = Storage::open_in_memory().unwrap();
        let mut shortlist: Shortlist = ["aurora"].into_iter().collect();
        let original = shortlist.clone();

        assert!(shortlist.toggle("lotus", &storage));
        assert!(shortlist.contains("lotus"));
        assert!(!shortlist.toggle("lotus", &storage));
        assert_eq!(shortlist, original);

        assert!(!shortlist.toggle("aurora", &storage));
        assert!(shortlist.toggle("aurora", &storage));
        assert_eq!(shortlist, original);
    }

    #[test]
    fn test_toggle_persists() {
        let storage = Storage::open_in_memory().unwrap();
        let mut shortlist = Shortlist::new();
        shortlist.toggle("aurora", &storage);

        assert!(Shortlist::load(&storage).contains("aurora"));
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        assert!(Shortlist::load(&BrokenStore).is_empty());

        let mut shortlist = Shortlist::new();
        assert!(shortlist.toggle("aurora", &BrokenStore));
        assert!(shortlist.contains("aurora"));
    }
}
