// src/scheduler/timer.rs

//! A cancellable one-shot deadline.
//!
//! The scheduler must never have more than one step pending. Rather than
//! relying on callers to remember to cancel before re-arming, the timer
//! holds a single optional deadline: arming replaces whatever was pending,
//! and firing consumes it. Time is always passed in, so the ordering
//! guarantees are checkable in tests without sleeping.

use std::time::{Duration, Instant};

/// Holds at most one pending deadline.
#[derive(Debug, Clone, Default)]
pub struct StepTimer {
    deadline: Option<Instant>,
}

impl StepTimer {
    /// Creates a disarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to fire `delay` after `now`, replacing any pending
    /// deadline.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drops any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// `true` while a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consumes and reports a due deadline. Returns `true` at most once per
    /// `arm`, and only when `now` has reached the deadline.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
