//! Hand Slice - a fruit-slicing arcade game steered by a tracked hand
//!
//! Core modules:
//! - `sim`: Simulation (falling objects, slicing, score/level state machine)
//! - `game`: The fixed-rate round loop that wires the collaborators together
//! - `tracking`: Camera frames, hand tracker trait and reference implementations
//! - `renderer`: Draw-list generation for a display backend
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod audio;
pub mod error;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tracking;
pub mod tuning;

pub use error::{AssetError, AudioError, CameraError, ConfigError, RoundError};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default world (screen) size
    pub const WORLD_WIDTH: f32 = 1024.0;
    pub const WORLD_HEIGHT: f32 = 768.0;

    /// Target loop rate
    pub const TICK_RATE: u32 = 60;

    /// Side length of a fruit or bomb
    pub const OBJECT_SIZE: f32 = 50.0;

    /// Points needed to clear level 1 (doubles every level)
    pub const STARTING_THRESHOLD: i64 = 20;
    /// Seconds per level
    pub const LEVEL_DURATION_SECS: u64 = 60;

    /// Picture-in-picture camera feed
    pub const PIP_WIDTH: u32 = 320;
    pub const PIP_HEIGHT: u32 = 240;
    pub const PIP_MARGIN: f32 = 10.0;
    /// Gap between the feed caption and the feed itself
    pub const PIP_CAPTION_OFFSET: f32 = 30.0;
}
