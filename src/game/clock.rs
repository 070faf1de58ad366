//! Wall-clock source and frame pacing

use std::time::{Duration, Instant};

/// Source of wall-clock time for the round loop
pub trait Clock {
    fn now(&self) -> Instant;

    /// Block for `duration`
    fn sleep(&mut self, duration: Duration);
}

/// The real clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// A clock that only moves when told to. Sleeping advances it instantly.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Duration,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.offset += by;
    }

    /// Total time advanced so far
    pub fn elapsed(&self) -> Duration {
        self.offset
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset
    }

    fn sleep(&mut self, duration: Duration) {
        self.advance(duration);
    }
}

/// Best-effort fixed-rate pacing.
///
/// A tick that overruns its period just delays the next one; missed ticks
/// are never replayed.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    period: Duration,
    last: Instant,
}

impl FramePacer {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self { period, last: now }
    }

    /// Sleep out the rest of the current period
    pub fn wait(&mut self, clock: &mut dyn Clock) {
        let spent = clock.now().saturating_duration_since(self.last);
        if let Some(rest) = self.period.checked_sub(spent) {
            if !rest.is_zero() {
                clock.sleep(rest);
            }
        }
        self.last = clock.now();
    }

    /// Start a fresh period, e.g. after a blocking announcement
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }
}
