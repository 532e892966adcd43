//! Scheduler module - fixed-period tick sources
//!
//! The controller has no notion of time. A [`Scheduler`] decides when gravity
//! ticks happen; the session starts and stops it as the game runs, pauses and
//! ends.
//!
//! [`IntervalScheduler`] is a poll-driven timer for a single-threaded loop:
//! the loop asks how long it may block, waits for input up to that long, then
//! polls. [`ManualScheduler`] never fires on its own; tests call the tick
//! handler directly.

use std::time::{Duration, Instant};

use crate::types::TICK_MS;

/// Start/stop control over a periodic tick
pub trait Scheduler {
    /// Start ticking. No effect if already running.
    fn begin(&mut self);
    /// Stop ticking. No effect if already stopped.
    fn end(&mut self);
    fn is_running(&self) -> bool;
}

/// Fixed-rate timer polled by the game loop
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    period: Duration,
    next_due: Option<Instant>,
}

impl IntervalScheduler {
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "tick period must be non-zero");
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start ticking with the first tick one period after `now`.
    pub fn begin_at(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    /// Returns `true` once per elapsed period while running.
    ///
    /// If the loop fell more than a period behind, the missed ticks collapse
    /// into one and the schedule restarts from `now`.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.period;
        if next <= now {
            next = now + self.period;
        }
        self.next_due = Some(next);
        true
    }

    /// How long the loop may wait before the next tick is due.
    ///
    /// `None` while stopped.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_MS as u64))
    }
}

impl Scheduler for IntervalScheduler {
    fn begin(&mut self) {
        self.begin_at(Instant::now());
    }

    fn end(&mut self) {
        self.next_due = None;
    }

    fn is_running(&self) -> bool {
        self.next_due.is_some()
    }
}

/// Scheduler that only tracks its running flag
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    running: bool,
    begins: u32,
    ends: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stopped → running transitions
    pub fn begins(&self) -> u32 {
        self.begins
    }

    /// Number of running → stopped transitions
    pub fn ends(&self) -> u32 {
        self.ends
    }
}

impl Scheduler for ManualScheduler {
    fn begin(&mut self) {
        if !self.running {
            self.running = true;
            self.begins += 1;
        }
    }

    fn end(&mut self) {
        if self.running {
            self.running = false;
            self.ends += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
