//! Monotonic time sources.
//!
//! `web_time::Instant` is `std::time::Instant` on native targets and backed by
//! `performance.now()` in the browser, so the same engine runs on both.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use web_time::Instant;

/// A monotonic clock.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The platform clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can hand one copy to the stepper, one
/// to the scheduler, and keep a third to advance both.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Jump to `offset` past the clock's origin. Never moves backwards.
    pub fn set_elapsed(&self, offset: Duration) {
        if offset > self.offset.get() {
            self.offset.set(offset);
        }
    }

    /// Jump to `instant`, typically a scheduler deadline. Never moves backwards.
    pub fn advance_to(&self, instant: Instant) {
        self.set_elapsed(instant.saturating_duration_since(self.origin));
    }

    /// Time since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }

    /// The instant `offset` past the clock's origin.
    pub fn at(&self, offset: Duration) -> Instant {
        self.origin + offset
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let start = other.now();

        clock.advance(Duration::from_millis(250));

        assert_eq!(other.now() - start, Duration::from_millis(250));
        assert_eq!(other.elapsed(), Duration::from_millis(250));
    }

    #[test]
    fn test_manual_clock_never_goes_back() {
        let clock = ManualClock::new();
        clock.set_elapsed(Duration::from_secs(2));
        clock.set_elapsed(Duration::from_secs(1));
        assert_eq!(clock.elapsed(), Duration::from_secs(2));
    }
}
