//! Application Context
//!
//! Explicit context object handed to every panel via the Leptos Context API.
//! It owns the storage handle and configuration and keeps the reminder
//! poller alive for the session.

use leptos::prelude::*;

use crate::checklist::ChecklistManager;
use crate::config::AppConfig;
use crate::poller::{self, AlertNotifier, Notifier, PollerHandle};
use crate::reminders::ReminderManager;
use crate::storage::LocalStore;
use crate::store::{HealthStateStoreFields, HealthStore};

#[derive(Clone, Copy)]
pub struct HealthContext {
    store: LocalStore,
    state: HealthStore,
    config: StoredValue<AppConfig>,
    poller: StoredValue<Option<PollerHandle>, LocalStorage>,
}

impl HealthContext {
    pub fn new(state: HealthStore, config: AppConfig) -> Self {
        Self {
            store: LocalStore,
            state,
            config: StoredValue::new(config),
            poller: StoredValue::new_local(None),
        }
    }

    pub fn checklist(&self) -> ChecklistManager<LocalStore> {
        ChecklistManager::new(self.store)
    }

    pub fn reminders(&self) -> ReminderManager<LocalStore> {
        ReminderManager::new(self.store)
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Re-read the checklist so the view matches what storage actually holds
    pub fn refresh_checklist(&self) {
        self.state.checklist().set(self.checklist().list());
    }

    pub fn refresh_reminders(&self) {
        self.state.reminders().set(self.reminders().list());
    }

    pub fn alert(&self, message: &str) {
        AlertNotifier.notify(message);
    }

    /// Start the reminder poller unless it is already running
    pub fn start_poller(&self) {
        if self.poller.with_value(|handle| handle.as_ref().is_some_and(PollerHandle::is_running)) {
            return;
        }
        let handle = poller::start(self.reminders(), AlertNotifier);
        self.poller.set_value(Some(handle));
    }

    pub fn stop_poller(&self) {
        self.poller.update_value(|handle| {
            if let Some(handle) = handle.as_mut() {
                handle.stop();
            }
        });
    }
}
