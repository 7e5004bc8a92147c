//! Checklist Manager
//!
//! CRUD over the daily health checklist. Items are identified by their
//! position, so an index is only meaningful until the next write.

use crate::error::{AppError, AppResult};
use crate::models::ChecklistItem;
use crate::storage::{clear_collection, read_collection, write_collection, KeyValueStore, CHECKLIST_KEY};

pub struct ChecklistManager<S> {
    store: S,
}

impl<S: KeyValueStore> ChecklistManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All items in display order, read fresh from the store
    pub fn list(&self) -> Vec<ChecklistItem> {
        read_collection(&self.store, CHECKLIST_KEY)
    }

    /// Append a new incomplete item. Blank text is rejected without writing.
    pub fn add(&self, text: &str) -> AppResult<ChecklistItem> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation("Please enter a checklist item.".to_string()));
        }

        let item = ChecklistItem::new(text);
        let mut items = self.list();
        items.push(item.clone());
        self.save(&items);
        log::debug!("[CHECKLIST] Added '{}' ({} items)", item.text, items.len());
        Ok(item)
    }

    /// Flip `completed` on the item at `index`. Returns false for a stale index.
    pub fn toggle(&self, index: usize) -> bool {
        let mut items = self.list();
        let Some(item) = items.get_mut(index) else {
            log::warn!("[CHECKLIST] Toggle ignored, index {} out of range", index);
            return false;
        };
        item.completed = !item.completed;
        self.save(&items);
        true
    }

    /// Remove the item at `index`; later items shift down by one
    pub fn delete(&self, index: usize) -> bool {
        let mut items = self.list();
        if index >= items.len() {
            log::warn!("[CHECKLIST] Delete ignored, index {} out of range", index);
            return false;
        }
        items.remove(index);
        self.save(&items);
        true
    }

    /// Mark every item incomplete for a new day. Returns how many were reset.
    pub fn reset_completed(&self) -> usize {
        let mut items = self.list();
        let mut reset = 0;
        for item in items.iter_mut().filter(|item| item.completed) {
            item.completed = false;
            reset += 1;
        }
        if reset > 0 {
            self.save(&items);
        }
        reset
    }

    pub fn clear(&self) {
        if let Err(e) = clear_collection(&self.store, CHECKLIST_KEY) {
            log::error!("[CHECKLIST] Failed to clear checklist: {}", e);
        }
    }

    fn save(&self, items: &[ChecklistItem]) {
        if let Err(e) = write_collection(&self.store, CHECKLIST_KEY, items) {
            log::error!("[CHECKLIST] Failed to persist checklist: {}", e);
        }
    }
}

/// (completed, total) for the progress line
pub fn progress(items: &[ChecklistItem]) -> (usize, usize) {
    let done = items.iter().filter(|item| item.completed).count();
    (done, items.len())
}
