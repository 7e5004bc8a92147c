//! Frontend Models
//!
//! Records persisted in browser local storage.

use serde::{Deserialize, Serialize};

/// A daily health habit with a completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// A medicine paired with a daily `HH:MM` trigger time (local timezone)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineReminder {
    pub name: String,
    pub time: String,
}

impl MedicineReminder {
    pub fn new(name: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
        }
    }
}
