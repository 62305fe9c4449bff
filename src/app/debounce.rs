//! Search debouncing over host timers.
//!
//! Zellij timers (`set_timeout`) cannot be cancelled and carry no identity,
//! only the elapsed time. All debounce timers share one duration, so they
//! elapse in the order they were started. The [`Debouncer`] keeps a FIFO of
//! tickets, one per started timer, and a generation counter: when a timer
//! elapses, its ticket commits the pending value only if no newer input has
//! arrived since. Superseded timers still fire but do nothing.
//!
//! ```text
//! input "m"   → ticket 1 ─┐
//! input "mo"  → ticket 2 ─┼─ quiet period
//! input "mou" → ticket 3 ─┘
//! timer #1 elapses → 1 ≠ 3 → nothing
//! timer #2 elapses → 2 ≠ 3 → nothing
//! timer #3 elapses → 3 = 3 → commit "mou"
//! ```

use std::collections::VecDeque;
use std::time::Duration;

/// Default quiet period before a raw query becomes effective.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Single-slot deferred commit of the latest raw query.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period: Duration,
    generation: u64,
    outstanding: VecDeque<u64>,
    pending: Option<String>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    #[must_use]
    pub const fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            generation: 0,
            outstanding: VecDeque::new(),
            pending: None,
        }
    }

    /// Length of the quiet period each timer must be started with.
    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Records a new raw value and returns the ticket for the timer the caller
    /// must now start.
    ///
    /// Every previously issued ticket is superseded.
    pub fn schedule(&mut self, raw: &str) -> u64 {
        self.generation += 1;
        self.outstanding.push_back(self.generation);
        self.pending = Some(raw.to_string());

        tracing::trace!(
            generation = self.generation,
            outstanding = self.outstanding.len(),
            "debounce timer scheduled"
        );
        self.generation
    }

    /// Handles the oldest outstanding timer elapsing.
    ///
    /// Returns the value to commit when that timer was the latest one, or
    /// `None` if it was superseded or no timer was outstanding.
    pub fn elapse(&mut self) -> Option<String> {
        let ticket = self.outstanding.pop_front()?;

        if ticket == self.generation {
            let value = self.pending.take();
            tracing::debug!(generation = ticket, "debounce settled");
            value
        } else {
            tracing::trace!(ticket = ticket, latest = self.generation, "superseded debounce timer");
            None
        }
    }

    /// Returns `true` when no value is waiting for its quiet period.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.pending.is_none()
    }
}
