//! Reminder Manager
//!
//! CRUD over medicine reminders. Times are stored as entered; a malformed
//! time never matches in the poller.

use crate::error::{AppError, AppResult};
use crate::models::MedicineReminder;
use crate::storage::{clear_collection, read_collection, write_collection, KeyValueStore, REMINDERS_KEY};

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both medicine name and time.";

pub struct ReminderManager<S> {
    store: S,
}

impl<S: KeyValueStore> ReminderManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<MedicineReminder> {
        read_collection(&self.store, REMINDERS_KEY)
    }

    /// Append a reminder. Both fields are required.
    pub fn add(&self, name: &str, time: &str) -> AppResult<MedicineReminder> {
        let name = name.trim();
        if name.is_empty() || time.trim().is_empty() {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        let reminder = MedicineReminder::new(name, time);
        let mut reminders = self.list();
        reminders.push(reminder.clone());
        self.save(&reminders);
        log::info!("[REMINDER] Set '{}' at {}", reminder.name, reminder.time);
        Ok(reminder)
    }

    /// Remove the reminder at `index`. Returns false for a stale index.
    pub fn delete(&self, index: usize) -> bool {
        let mut reminders = self.list();
        if index >= reminders.len() {
            log::warn!("[REMINDER] Delete ignored, index {} out of range", index);
            return false;
        }
        let removed = reminders.remove(index);
        self.save(&reminders);
        log::info!("[REMINDER] Removed '{}' at {}", removed.name, removed.time);
        true
    }

    pub fn clear(&self) {
        if let Err(e) = clear_collection(&self.store, REMINDERS_KEY) {
            log::error!("[REMINDER] Failed to clear reminders: {}", e);
        }
    }

    fn save(&self, reminders: &[MedicineReminder]) {
        if let Err(e) = write_collection(&self.store, REMINDERS_KEY, reminders) {
            log::error!("[REMINDER] Failed to persist reminders: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[test]
    fn test_add_and_list() {
        let store = MemoryStore::new();
        let reminders = ReminderManager::new(&store);

        let added = reminders.add(" Aspirin ", "08:00").unwrap();

        assert_eq!(added, MedicineReminder::new("Aspirin", "08:00"));
        assert_eq!(reminders.list(), vec![MedicineReminder::new("Aspirin", "08:00")]);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let store = MemoryStore::new();
        let reminders = ReminderManager::new(&store);

        for (name, time) in [("", "08:00"), ("  ", "08:00"), ("Aspirin", ""), ("Aspirin", "  ")] {
            let err = reminders.add(name, time).unwrap_err();
            assert_eq!(err.to_string(), MISSING_FIELDS_MESSAGE);
        }
        assert!(store.raw(REMINDERS_KEY).is_none());
    }

    #[test]
    fn test_duplicates_allowed_and_order_kept() {
        let store = MemoryStore::new();
        let reminders = ReminderManager::new(&store);
        reminders.add("Aspirin", "08:00").unwrap();
        reminders.add("Vitamin D", "12:30").unwrap();
        reminders.add("Aspirin", "08:00").unwrap();

        let names: Vec<_> = reminders.list().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Aspirin", "Vitamin D", "Aspirin"]);
    }

    #[test]
    fn test_delete_shifts_later_items() {
        let store = MemoryStore::new();
        let reminders = ReminderManager::new(&store);
        reminders.add("A", "07:00").unwrap();
        reminders.add("B", "08:00").unwrap();
        reminders.add("C", "09:00").unwrap();

        assert!(reminders.delete(0));
        assert_eq!(
            reminders.list(),
            vec![MedicineReminder::new("B", "08:00"), MedicineReminder::new("C", "09:00")]
        );
        assert!(!reminders.delete(2));
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        let reminders = ReminderManager::new(&store);
        reminders.add("A", "07:00").unwrap();
        reminders.clear();
        assert!(reminders.list().is_empty());
    }
}
