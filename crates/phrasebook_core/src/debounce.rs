//! Trailing-edge debounce driven by caller-supplied instants.
//!
//! # Responsibility
//! - Delay propagation of a fast-changing value until it has been stable for
//!   a fixed window.
//!
//! # Invariants
//! - Each `update` cancels the previous deadline and schedules a new one.
//! - Nothing is promoted before its deadline; `cancel` drops pending values.
//! - No timers or threads: the owner drives promotion through `poll`.

use std::time::{Duration, Instant};

/// Default quiescence window for search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds the last promoted value and at most one pending value.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    value: T,
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T: PartialEq> Debouncer<T> {
    /// The debounced value starts equal to `initial`.
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            value: initial,
            delay,
            pending: None,
        }
    }

    /// Records a new live value observed at `now`.
    ///
    /// A zero delay promotes immediately. A value equal to the debounced one
    /// with nothing pending schedules nothing.
    pub fn update(&mut self, value: T, now: Instant) {
        if self.delay.is_zero() {
            self.pending = None;
            self.value = value;
            return;
        }
        if self.pending.is_none() && value == self.value {
            return;
        }

        let deadline = now.checked_add(self.delay).unwrap_or(now);
        self.pending = Some(Pending { value, deadline });
    }

    /// Promotes the pending value once its deadline has passed.
    ///
    /// Returns `true` when a promotion happened.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        due && self.flush()
    }

    /// Promotes the pending value immediately. Returns `true` if one existed.
    pub fn flush(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                self.value = pending.value;
                true
            }
            None => false,
        }
    }

    /// Drops the pending value, keeping the last promoted one.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Replaces the debounced value immediately and drops anything pending.
    pub fn reset(&mut self, value: T) {
        self.pending = None;
        self.value = value;
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
