//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The lists here
//! are only ever replaced by a fresh read from local storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Tab;
use crate::models::{ChecklistItem, MedicineReminder};

/// Rendered application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct HealthState {
    /// Checklist as last read from storage
    pub checklist: Vec<ChecklistItem>,
    /// Reminders as last read from storage
    pub reminders: Vec<MedicineReminder>,
    /// Visible panel
    pub active_tab: Tab,
}

/// Type alias for the store
pub type HealthStore = Store<HealthState>;

/// Get the health store from context
pub fn use_health_store() -> HealthStore {
    expect_context::<HealthStore>()
}
