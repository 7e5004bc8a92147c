//! Key-Value Store Adapter
//!
//! Whole-collection JSON persistence on top of a string key-value store.
//! In the browser that store is `window.localStorage`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// Key holding the daily checklist
pub const CHECKLIST_KEY: &str = "healthChecklist";
/// Key holding the medicine reminders
pub const REMINDERS_KEY: &str = "medicineReminders";
/// Key holding optional configuration overrides
pub const CONFIG_KEY: &str = "healthUtilConfig";

/// Synchronous string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Browser `localStorage`. Looked up on every call so the handle stays `Copy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }
}

/// Read a whole collection. Absent or unparsable values read as empty.
pub fn read_collection<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Vec<T> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("[STORE] Ignoring malformed value under '{}': {}", key, e);
            Vec::new()
        }
    }
}

/// Serialize the full collection, replacing whatever was stored under `key`
pub fn write_collection<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(items)?;
    store.set(key, &raw)
}

/// Remove a collection; it reads as empty afterwards
pub fn clear_collection(store: &impl KeyValueStore, key: &str) -> Result<(), StorageError> {
    store.remove(key)
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use crate::models::{ChecklistItem, MedicineReminder};

    #[test]
    fn test_absent_key_reads_empty() {
        let store = MemoryStore::new();
        let items: Vec<ChecklistItem> = read_collection(&store, CHECKLIST_KEY);
        assert!(items.is_empty());
    }

    #[test]
    fn test_malformed_value_reads_empty() {
        let store = MemoryStore::with_value(REMINDERS_KEY, "{not json");
        let reminders: Vec<MedicineReminder> = read_collection(&store, REMINDERS_KEY);
        assert!(reminders.is_empty());

        let store = MemoryStore::with_value(REMINDERS_KEY, "null");
        let reminders: Vec<MedicineReminder> = read_collection(&store, REMINDERS_KEY);
        assert!(reminders.is_empty());
    }

    #[test]
    fn test_write_then_read_returns_same_collection() {
        let store = MemoryStore::new();
        let mut done = ChecklistItem::new("Stretch");
        done.completed = true;
        let items = vec![ChecklistItem::new("Drink water"), done, ChecklistItem::new("Drink water")];

        write_collection(&store, CHECKLIST_KEY, &items).unwrap();
        let loaded: Vec<ChecklistItem> = read_collection(&store, CHECKLIST_KEY);
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_write_replaces_previous_value() {
        let store = MemoryStore::new();
        write_collection(&store, REMINDERS_KEY, &[MedicineReminder::new("A", "08:00")]).unwrap();
        write_collection(&store, REMINDERS_KEY, &[MedicineReminder::new("B", "09:00")]).unwrap();

        assert_eq!(store.raw(REMINDERS_KEY).unwrap(), r#"[{"name":"B","time":"09:00"}]"#);
    }

    #[test]
    fn test_clear_removes_key() {
        let store = MemoryStore::new();
        write_collection(&store, CHECKLIST_KEY, &[ChecklistItem::new("Walk")]).unwrap();
        clear_collection(&store, CHECKLIST_KEY).unwrap();

        assert!(store.raw(CHECKLIST_KEY).is_none());
        let items: Vec<ChecklistItem> = read_collection(&store, CHECKLIST_KEY);
        assert!(items.is_empty());
    }

    #[test]
    fn test_rejected_write_is_reported() {
        let store = MemoryStore::read_only();
        let result = write_collection(&store, CHECKLIST_KEY, &[ChecklistItem::new("Walk")]);
        assert!(matches!(result, Err(StorageError::Rejected(_))));
    }

    #[test]
    fn test_rejected_clear_is_reported() {
        let store = MemoryStore::read_only();
        let result = clear_collection(&store, REMINDERS_KEY);
        assert!(matches!(result, Err(StorageError::Rejected(_))));
    }
}
