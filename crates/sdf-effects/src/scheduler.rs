//! Single-deadline timer driving the timed effects.

/// A one-shot timer with at most one pending deadline.
///
/// Time is page time in milliseconds, passed in by the caller. Scheduling
/// replaces the pending deadline, so an effect driven by one `Timer` can
/// never have two steps in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<u64>,
}

impl Timer {
    /// Create an idle timer.
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(delay_ms));
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Milliseconds until the deadline, zero if already due.
    pub fn remaining(&self, now_ms: u64) -> Option<u64> {
        self.deadline.map(|deadline| deadline.saturating_sub(now_ms))
    }

    /// Fire the timer if its deadline has been reached.
    ///
    /// Returns the deadline that fired and disarms the timer, so each
    /// scheduled deadline fires exactly once.
    pub fn fire(&mut self, now_ms: u64) -> Option<u64> {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }
}
