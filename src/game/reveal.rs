//! Staged-reveal timer
//!
//! The most recent guess row is revealed one letter at a time, one step every
//! [`REVEAL_DELAY`]. The timer holds at most one armed deadline, tagged with
//! the session generation it was armed for, so a deadline left over from a
//! superseded row or a replaced session can never advance a newer reveal.

use std::time::{Duration, Instant};

/// Delay between two reveal steps
pub const REVEAL_DELAY: Duration = Duration::from_millis(300);

/// A cancellable single-deadline timer keyed by session generation
#[derive(Debug, Default, Clone)]
pub struct RevealTimer {
    armed: Option<Armed>,
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    generation: u64,
    due: Instant,
}

impl RevealTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer for `generation`, due [`REVEAL_DELAY`] from `now`
    ///
    /// Replaces any previously armed deadline.
    pub fn arm(&mut self, generation: u64, now: Instant) {
        self.armed = Some(Armed {
            generation,
            due: now + REVEAL_DELAY,
        });
    }

    /// Drop any armed deadline
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Time remaining until the armed deadline, if any
    ///
    /// Returns `Duration::ZERO` for a deadline already in the past.
    #[must_use]
    pub fn due_in(&self, now: Instant) -> Option<Duration> {
        self.armed
            .as_ref()
            .map(|armed| armed.due.saturating_duration_since(now))
    }

    /// Fire the timer if it is due
    ///
    /// Returns true only when a deadline has passed *and* it was armed for
    /// `current_generation`; the deadline is consumed either way, so a stale
    /// deadline is silently discarded.
    pub fn fire(&mut self, current_generation: u64, now: Instant) -> bool {
        match self.armed {
            Some(armed) if now >= armed.due => {
                self.armed = None;
                armed.generation == current_generation
            }
            _ => false,
        }
    }
}
