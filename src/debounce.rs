//! Debounce Utilities
//!
//! Runs only the last of a burst of calls once input has been quiet for the
//! configured delay. A newer call cancels the pending one; nothing is queued.

use crate::timer::Timeout;

pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Schedules a one-shot task. Dropping the returned handle cancels it.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout` via gloo-timers
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    /// Schedule `task`, superseding any call still waiting
    pub fn call(&mut self, task: impl FnOnce() + 'static) {
        self.pending.take();
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    pub fn cancel(&mut self) {
        self.pending.take();
    }
}

/// Generation counter for async results. Only the response to the most
/// recently started request may be applied.
#[derive(Debug, Default)]
pub struct LatestQuery {
    generation: u64,
}

impl LatestQuery {
    /// Start a request and get its ticket; invalidates older tickets
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.generation
    }

    /// Pass `value` through only if `ticket` is still current
    pub fn settle<T>(&self, ticket: u64, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            log::debug!("[QUERY] Dropping stale response #{} (latest #{})", ticket, self.generation);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Slot {
        delay_ms: u32,
        task: Box<dyn FnOnce()>,
        cancelled: Rc<Cell<bool>>,
    }

    /// Scheduler whose tasks only run when the test fires them
    #[derive(Clone, Default)]
    struct ManualScheduler {
        slots: Rc<RefCell<Vec<Slot>>>,
    }

    struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.slots.borrow_mut().push(Slot {
                delay_ms,
                task,
                cancelled: cancelled.clone(),
            });
            ManualHandle { cancelled }
        }
    }

    impl ManualScheduler {
        /// Run every task that was not cancelled, as if the delay elapsed
        fn fire_all(&self) -> usize {
            let ready: Vec<_> = self
                .slots
                .borrow_mut()
                .drain(..)
                .filter(|slot| !slot.cancelled.get())
                .collect();
            let count = ready.len();
            for slot in ready {
                (slot.task)();
            }
            count
        }

        fn delays(&self) -> Vec<u32> {
            self.slots.borrow().iter().map(|slot| slot.delay_ms).collect()
        }
    }

    #[test]
    fn test_burst_sends_only_final_query() {
        let scheduler = ManualScheduler::default();
        let sent = Rc::new(RefCell::new(Vec::<String>::new()));
        let mut debouncer = Debouncer::new(scheduler.clone(), DEFAULT_DEBOUNCE_MS);

        for query in ["b", "bu", "bur", "burn"] {
            let sent = sent.clone();
            let query = query.to_string();
            debouncer.call(move || sent.borrow_mut().push(query));
        }

        assert_eq!(scheduler.delays(), vec![300, 300, 300, 300]);
        assert_eq!(scheduler.fire_all(), 1);
        assert_eq!(*sent.borrow(), vec!["burn".to_string()]);
    }

    #[test]
    fn test_calls_after_quiet_period_each_run() {
        let scheduler = ManualScheduler::default();
        let runs = Rc::new(Cell::new(0));
        let mut debouncer = Debouncer::new(scheduler.clone(), 300);

        let counter = runs.clone();
        debouncer.call(move || counter.set(counter.get() + 1));
        scheduler.fire_all();
        let counter = runs.clone();
        debouncer.call(move || counter.set(counter.get() + 1));
        scheduler.fire_all();

        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_cancel_drops_pending_call() {
        let scheduler = ManualScheduler::default();
        let ran = Rc::new(Cell::new(false));
        let mut debouncer = Debouncer::new(scheduler.clone(), 300);

        let flag = ran.clone();
        debouncer.call(move || flag.set(true));
        debouncer.cancel();

        assert_eq!(scheduler.fire_all(), 0);
        assert!(!ran.get());
    }

    #[test]
    fn test_latest_query_rejects_stale_tickets() {
        let mut latest = LatestQuery::default();
        let first = latest.begin();
        let second = latest.begin();

        assert!(!latest.is_current(first));
        assert!(latest.is_current(second));
        assert_eq!(latest.settle(first, "old"), None);
        assert_eq!(latest.settle(second, "new"), Some("new"));
    }
}
