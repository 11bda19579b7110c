//! Fixed-interval gating of game updates, independent of the frame rate
use std::time::{Duration, Instant};

/// A source of monotonically nondecreasing timestamps
pub(crate) trait Clock {
    /// Return the time elapsed since the clock was started
    fn elapsed(&self) -> Duration;
}

/// A [`Clock`] measuring real time from the moment it was created
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub(crate) fn new() -> MonotonicClock {
        MonotonicClock {
            start: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// A gate that opens at most once per interval.
///
/// Until it has fired for the first time, the gate is open.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Ticker {
    last_fire: Option<Duration>,
}

impl Ticker {
    pub(crate) fn new() -> Ticker {
        Ticker::default()
    }

    /// Return `true` if at least `interval` has passed between the last time
    /// this method returned `true` and `now`, in which case `now` is recorded
    /// as the new time of the last firing.
    pub(crate) fn should_tick(&mut self, interval: Duration, now: Duration) -> bool {
        let due = self
            .last_fire
            .is_none_or(|last| now.saturating_sub(last) >= interval);
        if due {
            self.last_fire = Some(now);
        }
        due
    }
}
