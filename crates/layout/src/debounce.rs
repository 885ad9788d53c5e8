//! Trailing-edge debounce timer driven by the host's clock.

use std::time::{Duration, Instant};

/// Quiet period before a fluid grid recomputes after a viewport signal.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(500);

/// Debounce state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    PendingRecompute,
}

/// A single-slot debounce timer.
///
/// Every `trigger` restarts the wait; `fire` reports `true` once the wait
/// has elapsed with no further trigger.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm or re-arm the timer.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Consume the timer if its deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn state(&self) -> DebounceState {
        if self.deadline.is_some() {
            DebounceState::PendingRecompute
        } else {
            DebounceState::Idle
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_after_quiet_period() {
        let start = Instant::now();
        let mut timer = Debouncer::default();
        assert_eq!(timer.state(), DebounceState::Idle);
        assert!(!timer.fire(start + ms(1000)));

        timer.trigger(start);
        assert_eq!(timer.state(), DebounceState::PendingRecompute);
        assert!(!timer.fire(start + ms(499)));
        assert!(timer.fire(start + ms(500)));
        assert_eq!(timer.state(), DebounceState::Idle);
        assert!(!timer.fire(start + ms(600)));
    }

    #[test]
    fn test_trigger_restarts_wait() {
        let start = Instant::now();
        let mut timer = Debouncer::new(ms(500));
        timer.trigger(start);
        timer.trigger(start + ms(400));
        assert!(!timer.fire(start + ms(600)));
        assert_eq!(timer.deadline(), Some(start + ms(900)));
        assert!(timer.fire(start + ms(900)));
    }
}
