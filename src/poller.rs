//! Reminder Poller
//!
//! Checks the stored reminders against the local wall clock once per period
//! and alerts for every reminder due in the current minute. There is no
//! deduplication and no catch-up: a throttled or skipped tick misses its
//! minute, and duplicate reminders each raise their own alert.

use chrono::{Local, NaiveTime};

use crate::models::MedicineReminder;
use crate::reminders::ReminderManager;
use crate::storage::KeyValueStore;
use crate::timer::Interval;

/// Fixed polling period; one tick per wall-clock minute
pub const POLL_INTERVAL_MS: u32 = 60_000;

/// Sink for user-facing alerts
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Blocking `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let shown = web_sys::window()
            .map(|window| window.alert_with_message(message).is_ok())
            .unwrap_or(false);
        if !shown {
            log::warn!("[ALERT] Could not show alert: {}", message);
        }
    }
}

/// `HH:MM` for the minute containing `now`
pub fn current_minute(now: NaiveTime) -> String {
    now.format("%H:%M").to_string()
}

/// Reminders whose time string equals `minute` exactly, in list order
pub fn due_reminders<'a>(
    reminders: &'a [MedicineReminder],
    minute: &'a str,
) -> impl Iterator<Item = &'a MedicineReminder> + 'a {
    reminders.iter().filter(move |reminder| reminder.time == minute)
}

pub fn reminder_message(name: &str) -> String {
    format!("⏰ Medicine Reminder: It's time to take {}!", name)
}

/// One poll: read reminders fresh and alert for each one due. Returns the alert count.
pub fn tick<S: KeyValueStore, N: Notifier>(
    reminders: &ReminderManager<S>,
    notifier: &N,
    now: NaiveTime,
) -> usize {
    let minute = current_minute(now);
    let all = reminders.list();
    let mut fired = 0;
    for reminder in due_reminders(&all, &minute) {
        log::info!("[POLLER] {} due at {}", reminder.name, minute);
        notifier.notify(&reminder_message(&reminder.name));
        fired += 1;
    }
    fired
}

/// Lifecycle of a running poller. Dropping the handle stops polling.
pub struct PollerHandle {
    interval: Option<Interval>,
}

impl PollerHandle {
    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
            log::info!("[POLLER] Stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

/// Start polling every [`POLL_INTERVAL_MS`] against the browser's local clock
pub fn start<S, N>(reminders: ReminderManager<S>, notifier: N) -> PollerHandle
where
    S: KeyValueStore + 'static,
    N: Notifier + 'static,
{
    log::info!("[POLLER] Checking reminders every {} ms", POLL_INTERVAL_MS);
    let interval = Interval::new(POLL_INTERVAL_MS, move || {
        tick(&reminders, &notifier, Local::now().time());
    });
    PollerHandle {
        interval: Some(interval),
    }
}
