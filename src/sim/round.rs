//! Score, level and timer state machine
//!
//! Time is never sampled here: callers pass `now`, and elapsed/remaining are
//! computed from the level start instant.

use std::time::{Duration, Instant};

use crate::tuning::Tuning;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Active gameplay
    Playing,
    /// "Level N" announcement; no gameplay until `begin_level`
    LevelTransition,
    /// Round ended, terminal
    GameOver,
}

/// Outcome of a state-machine evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// Time left, or not playing
    Continue,
    /// Timer expired with enough points
    LevelUp { level: u32, threshold: i64 },
    /// Timer expired short of the threshold
    GameOver { level: u32, score: i64 },
}

/// Level, score and countdown for one round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub level: u32,
    /// May go negative from bombs
    pub score: i64,
    /// Score needed when the timer expires; doubles every level
    pub threshold: i64,
    pub phase: RoundPhase,
    level_duration: Duration,
    level_start: Instant,
}

impl RoundState {
    /// Level 1 with the tuned threshold and duration, timer starting at `now`
    pub fn new(now: Instant, tuning: &Tuning) -> Self {
        Self::with_rules(now, tuning.level_duration(), tuning.starting_threshold)
    }

    pub fn with_rules(now: Instant, level_duration: Duration, threshold: i64) -> Self {
        Self {
            level: 1,
            score: 0,
            threshold,
            phase: RoundPhase::Playing,
            level_duration,
            level_start: now,
        }
    }

    pub fn level_duration(&self) -> Duration {
        self.level_duration
    }

    pub fn level_start(&self) -> Instant {
        self.level_start
    }

    /// Wall-clock time since the level started
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.level_start)
    }

    /// Time left, clamped at zero
    pub fn time_remaining(&self, now: Instant) -> Duration {
        self.level_duration.saturating_sub(self.elapsed(now))
    }

    /// Whole seconds left, for the HUD
    pub fn seconds_remaining(&self, now: Instant) -> u64 {
        self.time_remaining(now).as_secs()
    }

    /// Unclamped expiry check
    pub fn is_expired(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.level_duration
    }

    /// Apply a tick's net score change (ignored outside play)
    pub fn add_score(&mut self, delta: i64) {
        if self.phase == RoundPhase::Playing {
            self.score = self.score.saturating_add(delta);
        }
    }

    /// Check the timer and transition if it has run out.
    ///
    /// Must run after the tick's slices have been scored.
    pub fn evaluate(&mut self, now: Instant) -> RoundEvent {
        if self.phase != RoundPhase::Playing || !self.is_expired(now) {
            return RoundEvent::Continue;
        }

        if self.score >= self.threshold {
            self.level += 1;
            self.threshold = self.threshold.saturating_mul(2);
            self.level_start = now;
            self.phase = RoundPhase::LevelTransition;
            log::info!(
                "Level up: level {} (score {}, next threshold {})",
                self.level,
                self.score,
                self.threshold
            );
            RoundEvent::LevelUp {
                level: self.level,
                threshold: self.threshold,
            }
        } else {
            self.phase = RoundPhase::GameOver;
            log::info!(
                "Game over at level {} (score {} < threshold {})",
                self.level,
                self.score,
                self.threshold
            );
            RoundEvent::GameOver {
                level: self.level,
                score: self.score,
            }
        }
    }

    /// Leave the level announcement and restart the timer at full duration
    pub fn begin_level(&mut self, now: Instant) {
        if self.phase == RoundPhase::LevelTransition {
            self.phase = RoundPhase::Playing;
            self.level_start = now;
        }
    }
}
