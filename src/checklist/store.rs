//! File-backed checklist store.
//!
//! Holds the full map of checklist definitions in memory behind an `RwLock`
//! and rewrites the backing JSON file wholesale on every successful
//! `define`. Write volume is administrative, so a tmp-file-plus-rename
//! rewrite is durable enough: a successful `define` is visible on disk
//! before the call returns.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::category::Category;

use super::types::Checklist;
use super::ChecklistError;

/// Prefix for generated storage keys. Keys are distinct from display names:
/// the form round-trips keys, names are for humans and uniqueness checks.
const KEY_PREFIX: &str = "custom_key_";

#[derive(Debug)]
pub struct ChecklistStore {
    path: PathBuf,
    inner: RwLock<BTreeMap<String, Checklist>>,
}

impl ChecklistStore {
    /// Open the store at `path`, loading existing definitions if the file
    /// exists. Parent directories are created; a malformed file is an error
    /// rather than a silent reset.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ChecklistError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let definitions: BTreeMap<String, Checklist> = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(
            path = %path.display(),
            checklists = definitions.len(),
            "checklist store opened"
        );

        Ok(Self {
            path,
            inner: RwLock::new(definitions),
        })
    }

    /// Look up a checklist by its storage key.
    pub fn lookup(&self, key: &str) -> Result<Checklist, ChecklistError> {
        let map = self.inner.read().map_err(|_| ChecklistError::LockPoisoned)?;
        map.get(key)
            .cloned()
            .ok_or_else(|| ChecklistError::NotFound(key.to_string()))
    }

    /// Snapshot of the full store, for the selection form.
    pub fn all(&self) -> Result<BTreeMap<String, Checklist>, ChecklistError> {
        let map = self.inner.read().map_err(|_| ChecklistError::LockPoisoned)?;
        Ok(map.clone())
    }

    /// Define a new checklist. Fails with `EmptyChecklist` for an empty
    /// category list, `SentinelRequired` if `no_class` is among the
    /// requirements, and `DuplicateName` if the display name exactly matches
    /// an existing checklist (case-sensitive). On success the definition is
    /// written to disk before this returns.
    ///
    /// The whole check-insert-persist sequence runs under the write lock:
    /// concurrent defines must not race the duplicate-name check, and a
    /// failed persist must not leave an in-memory entry the disk never saw.
    pub fn define(
        &self,
        name: &str,
        categories: &[Category],
    ) -> Result<(String, Checklist), ChecklistError> {
        if categories.is_empty() {
            return Err(ChecklistError::EmptyChecklist);
        }
        if categories.contains(&Category::NoClass) {
            return Err(ChecklistError::SentinelRequired);
        }

        let mut map = self.inner.write().map_err(|_| ChecklistError::LockPoisoned)?;

        if map.values().any(|existing| existing.name == name) {
            return Err(ChecklistError::DuplicateName(name.to_string()));
        }

        let key = next_free_key(&map);
        let checklist = Checklist::new(name, categories.to_vec());
        map.insert(key.clone(), checklist.clone());

        if let Err(e) = persist(&self.path, &map) {
            // Roll back so memory never claims a definition the disk lost.
            map.remove(&key);
            return Err(e);
        }

        tracing::info!(key, name, docs = checklist.docs_number, "checklist defined");
        Ok((key, checklist))
    }
}

/// Lowest free `custom_key_<n>` for the current map.
fn next_free_key(map: &BTreeMap<String, Checklist>) -> String {
    let mut n = 0usize;
    loop {
        let key = format!("{KEY_PREFIX}{n}");
        if !map.contains_key(&key) {
            return key;
        }
        n += 1;
    }
}

/// Rewrite the backing file atomically: write a sibling tmp file, then
/// rename over the target so readers never observe a partial write.
fn persist(path: &Path, map: &BTreeMap<String, Checklist>) -> Result<(), ChecklistError> {
    let raw = serde_json::to_string_pretty(map)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, raw)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (ChecklistStore, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let store = ChecklistStore::open(tmp.path().join("checklists.json")).unwrap();
        (store, tmp)
    }

    #[test]
    fn open_on_missing_file_starts_empty() {
        let (store, _tmp) = temp_store();
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn define_assigns_sequential_keys() {
        let (store, _tmp) = temp_store();
        let (key_a, _) = store.define("A", &[Category::Act]).unwrap();
        let (key_b, _) = store.define("B", &[Category::Bill]).unwrap();
        assert_eq!(key_a, "custom_key_0");
        assert_eq!(key_b, "custom_key_1");
    }

    #[test]
    fn define_is_visible_to_lookup() {
        let (store, _tmp) = temp_store();
        let (key, _) = store
            .define("Комплект", &[Category::Arrangement, Category::Bill])
            .unwrap();

        let found = store.lookup(&key).unwrap();
        assert_eq!(found.name, "Комплект");
        assert_eq!(found.docs_number, 2);
    }

    #[test]
    fn define_survives_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("checklists.json");

        let key = {
            let store = ChecklistStore::open(&path).unwrap();
            store.define("Durable", &[Category::Order]).unwrap().0
        };

        let reopened = ChecklistStore::open(&path).unwrap();
        let found = reopened.lookup(&key).unwrap();
        assert_eq!(found.name, "Durable");
        assert_eq!(found.categories, vec![Category::Order]);
    }

    #[test]
    fn empty_categories_rejected_without_mutation() {
        let (store, _tmp) = temp_store();
        let err = store.define("kitA", &[]).unwrap_err();
        assert!(matches!(err, ChecklistError::EmptyChecklist));
        assert!(err.is_soft());
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn sentinel_rejected_as_requirement() {
        let (store, _tmp) = temp_store();
        let err = store
            .define("kitA", &[Category::Act, Category::NoClass])
            .unwrap_err();
        assert!(matches!(err, ChecklistError::SentinelRequired));
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn duplicate_name_rejected_and_first_definition_kept() {
        let (store, _tmp) = temp_store();
        let (key, _) = store.define("kitA", &[Category::Act]).unwrap();

        let err = store.define("kitA", &[Category::Bill]).unwrap_err();
        assert!(matches!(err, ChecklistError::DuplicateName(_)));
        assert!(err.is_soft());

        let kept = store.lookup(&key).unwrap();
        assert_eq!(kept.categories, vec![Category::Act]);
        assert_eq!(store.all().unwrap().len(), 1);
    }

    #[test]
    fn failed_persist_rolls_back_the_definition() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("store");
        let store = ChecklistStore::open(dir.join("checklists.json")).unwrap();

        // Pull the directory out from under the store so the rewrite fails.
        std::fs::remove_dir_all(&dir).unwrap();

        let err = store.define("kitA", &[Category::Act]).unwrap_err();
        assert!(matches!(err, ChecklistError::Io(_)));

        // Memory never claims a definition the disk lost.
        assert!(store.all().unwrap().is_empty());
        assert!(matches!(
            store.lookup("custom_key_0").unwrap_err(),
            ChecklistError::NotFound(_)
        ));
        assert!(!dir.join("checklists.json.tmp").exists());
    }

    #[test]
    fn duplicate_name_check_is_case_sensitive() {
        let (store, _tmp) = temp_store();
        store.define("kitA", &[Category::Act]).unwrap();
        // Different case is a different name.
        store.define("kita", &[Category::Bill]).unwrap();
        assert_eq!(store.all().unwrap().len(), 2);
    }

    #[test]
    fn lookup_unknown_key_is_not_found() {
        let (store, _tmp) = temp_store();
        let err = store.lookup("custom_key_9").unwrap_err();
        assert!(matches!(err, ChecklistError::NotFound(_)));
    }

    #[test]
    fn define_deduplicates_categories() {
        let (store, _tmp) = temp_store();
        let (_, checklist) = store
            .define("kit", &[Category::Act, Category::Act, Category::Bill])
            .unwrap();
        assert_eq!(checklist.categories, vec![Category::Act, Category::Bill]);
        assert_eq!(checklist.docs_number, 2);
    }

    #[test]
    fn malformed_store_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("checklists.json");
        std::fs::write(&path, "not json").unwrap();

        let err = ChecklistStore::open(&path).unwrap_err();
        assert!(matches!(err, ChecklistError::Corrupt(_)));
    }

    #[test]
    fn persisted_file_round_trips_through_serde() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("checklists.json");
        let store = ChecklistStore::open(&path).unwrap();
        store
            .define("Комплект 1", &[Category::Arrangement, Category::Bill])
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, Checklist> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["custom_key_0"].name, "Комплект 1");
        assert_eq!(parsed["custom_key_0"].docs_number, 2);
    }
}
