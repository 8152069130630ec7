//! Single-shot deferred firings.
//!
//! The stepper never uses a repeating timer. Each firing schedules the next
//! one, so at most one firing is pending at a time. Every firing carries a
//! [`TimerToken`]; the stepper compares it against the token of its live session
//! and drops anything else, which makes a firing that was already queued when
//! its session ended harmless.

use std::time::Duration;
use web_time::Instant;

use crate::clock::{Clock, SystemClock};

/// Identifies one scheduled firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken {
    generation: u64,
}

impl TimerToken {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Schedules one-shot callbacks on the host's event loop.
///
/// When `delay` has elapsed the host must hand `token` back to
/// [`Stepper::on_timer`](crate::Stepper::on_timer). `cancel` is best-effort: a
/// host that cannot unqueue a firing may still deliver it.
pub trait Scheduler {
    fn schedule_once(&mut self, delay: Duration, token: TimerToken);
    fn cancel(&mut self, token: TimerToken);
}

/// A polled scheduler for hosts that own their event loop.
///
/// The host sleeps until [`next_deadline`](Self::next_deadline), then delivers
/// whatever [`take_due`](Self::take_due) returns. `Stepper::poll` does both
/// steps for a stepper that owns one.
#[derive(Debug)]
pub struct DeadlineScheduler<C: Clock = SystemClock> {
    clock: C,
    pending: Vec<(Instant, TimerToken)>,
}

impl<C: Clock> DeadlineScheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            pending: Vec::new(),
        }
    }

    /// Earliest pending deadline, if anything is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(due, _)| *due).min()
    }

    /// Remove and return every firing whose deadline has passed, earliest first.
    pub fn take_due(&mut self) -> Vec<TimerToken> {
        let now = self.clock.now();
        let mut due: Vec<(Instant, TimerToken)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort();
        due.into_iter().map(|(_, token)| token).collect()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for DeadlineScheduler<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> Scheduler for DeadlineScheduler<C> {
    fn schedule_once(&mut self, delay: Duration, token: TimerToken) {
        let due = self.clock.now() + delay;
        log::trace!("DeadlineScheduler: {:?} due in {:?}", token, delay);
        self.pending.push((due, token));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|(_, t)| *t != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn test_nothing_due_before_deadline() {
        let clock = ManualClock::new();
        let mut scheduler = DeadlineScheduler::new(clock.clone());
        scheduler.schedule_once(Duration::from_millis(500), TimerToken::new(1));

        clock.advance(Duration::from_millis(499));
        assert!(scheduler.take_due().is_empty());
        assert_eq!(scheduler.next_deadline(), Some(clock.at(Duration::from_millis(500))));

        clock.advance(Duration::from_millis(1));
        assert_eq!(scheduler.take_due(), vec![TimerToken::new(1)]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_due_firings_come_out_earliest_first() {
        let clock = ManualClock::new();
        let mut scheduler = DeadlineScheduler::new(clock.clone());
        scheduler.schedule_once(Duration::from_millis(300), TimerToken::new(2));
        scheduler.schedule_once(Duration::from_millis(100), TimerToken::new(3));
        scheduler.schedule_once(Duration::from_secs(5), TimerToken::new(4));

        clock.advance(Duration::from_secs(1));
        assert_eq!(
            scheduler.take_due(),
            vec![TimerToken::new(3), TimerToken::new(2)]
        );
        assert_eq!(scheduler.pending_len(), 1);
    }

    #[test]
    fn test_cancel_removes_only_that_token() {
        let clock = ManualClock::new();
        let mut scheduler = DeadlineScheduler::new(clock.clone());
        scheduler.schedule_once(Duration::from_millis(100), TimerToken::new(1));
        scheduler.schedule_once(Duration::from_millis(100), TimerToken::new(2));

        scheduler.cancel(TimerToken::new(1));
        scheduler.cancel(TimerToken::new(1));

        clock.advance(Duration::from_millis(100));
        assert_eq!(scheduler.take_due(), vec![TimerToken::new(2)]);
    }
}
