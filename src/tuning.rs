//! Data-driven game balance
//!
//! Every gameplay constant lives here so it can be tweaked from `tuning.json`
//! without touching the simulation.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Gameplay tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// World (screen) width in world units
    pub world_width: f32,
    /// World (screen) height in world units
    pub world_height: f32,
    /// Target ticks per second
    pub tick_rate: u32,

    // === Spawning ===
    /// Chance per tick that one object spawns
    pub spawn_chance: f64,
    /// Chance a spawned object is a bomb
    pub bomb_chance: f64,
    /// Slowest rise speed (world units per tick)
    pub speed_min: f32,
    /// Fastest rise speed (world units per tick)
    pub speed_max: f32,
    /// Object side length
    pub object_size: f32,
    /// Distance kept from the left/right edges when spawning
    pub spawn_margin: f32,

    // === Culling ===
    /// How far above the top edge an object may travel before removal
    pub cull_margin: f32,

    // === Rounds ===
    /// Seconds of play per level
    pub level_duration_secs: u64,
    /// Score needed to clear level 1
    pub starting_threshold: i64,
    /// "Level N" announcement length in milliseconds
    pub level_announce_ms: u64,
    /// "Game Over" announcement length in milliseconds
    pub game_over_announce_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            tick_rate: TICK_RATE,

            spawn_chance: 1.0 / 20.0,
            bomb_chance: 0.2,
            speed_min: 7.0,
            speed_max: 12.0,
            object_size: OBJECT_SIZE,
            spawn_margin: OBJECT_SIZE,

            cull_margin: 50.0,

            level_duration_secs: LEVEL_DURATION_SECS,
            starting_threshold: STARTING_THRESHOLD,
            level_announce_ms: 2000,
            game_over_announce_ms: 3000,
        }
    }
}

impl Tuning {
    /// Default file name, relative to the working directory
    pub const FILE_NAME: &'static str = "tuning.json";

    pub fn level_duration(&self) -> Duration {
        Duration::from_secs(self.level_duration_secs)
    }

    pub fn level_announce(&self) -> Duration {
        Duration::from_millis(self.level_announce_ms)
    }

    pub fn game_over_announce(&self) -> Duration {
        Duration::from_millis(self.game_over_announce_ms)
    }

    /// Wall-clock length of one tick at the target rate
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return invalid(format!(
                "world size must be positive, got {}x{}",
                self.world_width, self.world_height
            ));
        }
        if self.tick_rate == 0 {
            return invalid("tick_rate must be at least 1".into());
        }
        for (name, p) in [("spawn_chance", self.spawn_chance), ("bomb_chance", self.bomb_chance)] {
            if !(0.0..=1.0).contains(&p) {
                return invalid(format!("{name} must be within [0, 1], got {p}"));
            }
        }
        if !(self.speed_min > 0.0 && self.speed_min <= self.speed_max) {
            return invalid(format!(
                "speed range {}..={} must be positive and ordered",
                self.speed_min, self.speed_max
            ));
        }
        if !(self.object_size > 0.0) {
            return invalid(format!("object_size must be positive, got {}", self.object_size));
        }
        if self.spawn_margin < self.object_size / 2.0 {
            return invalid(format!(
                "spawn_margin {} is less than half the object size {}",
                self.spawn_margin, self.object_size
            ));
        }
        if self.world_width - 2.0 * self.spawn_margin < 0.0 {
            return invalid(format!(
                "spawn_margin {} leaves no room in a world {} wide",
                self.spawn_margin, self.world_width
            ));
        }
        if self.cull_margin < 0.0 {
            return invalid(format!("cull_margin must not be negative, got {}", self.cull_margin));
        }
        if self.level_duration_secs == 0 {
            return invalid("level_duration_secs must be at least 1".into());
        }
        if self.starting_threshold < 1 {
            return invalid(format!(
                "starting_threshold must be at least 1, got {}",
                self.starting_threshold
            ));
        }
        Ok(())
    }

    /// Load tuning from a JSON file, using defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No tuning file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tuning.validate()?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
