//! Time sources for the orbit controller.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A point in time, measured as an offset from the owning clock's epoch.
pub type Timestamp = Duration;

/// Anything that can answer "what time is it now".
pub trait Clock {
    /// Current time relative to this clock's epoch. Must never go backwards.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time source backed by [`Instant`], with its epoch at construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Timestamp {
        self.epoch.elapsed()
    }
}

/// A clock that only moves when told to. Used for deterministic replay and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Create a clock reading `start`.
    pub fn starting_at(start: Duration) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `dt`.
    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get() + dt);
    }

    /// Jump the clock to `t`. Earlier values are ignored so time stays monotonic.
    pub fn set(&self, t: Duration) {
        if t > self.now.get() {
            self.now.set(t);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::default();
        assert_eq!(clock.now(), Duration::ZERO);
        clock.advance(Duration::from_millis(250));
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now(), Duration::from_millis(500));
    }

    #[test]
    fn test_manual_clock_never_goes_backwards() {
        let clock = ManualClock::starting_at(Duration::from_secs(5));
        clock.set(Duration::from_secs(2));
        assert_eq!(clock.now(), Duration::from_secs(5));
        clock.set(Duration::from_secs(7));
        assert_eq!(clock.now(), Duration::from_secs(7));
    }

    #[test]
    fn test_monotonic_clock_is_non_decreasing() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a, "monotonic clock went backwards: {a:?} -> {b:?}");
    }

    #[test]
    fn test_clock_through_reference() {
        let clock = ManualClock::starting_at(Duration::from_millis(42));
        let by_ref: &ManualClock = &clock;
        assert_eq!(Clock::now(&by_ref), Duration::from_millis(42));
    }
}
