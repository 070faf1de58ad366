//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Seeded RNG only
//! - Wall-clock time is passed in, never sampled
//! - Stable iteration order (spawn order)
//! - No rendering, camera or audio dependencies

pub mod geometry;
pub mod mapper;
pub mod round;
pub mod slice;
pub mod spawner;
pub mod state;
pub mod tick;

pub use geometry::{CameraSpace, Rect, WorldSpace};
pub use mapper::{CoordinateMapper, map_to_world};
pub use round::{RoundEvent, RoundPhase, RoundState};
pub use slice::{SliceEvent, try_slice};
pub use spawner::ObjectSpawner;
pub use state::{Appearance, FRUIT_VARIANTS, FallingObject, GameState, ObjectKind};
pub use tick::{GameEvent, TickInput, TickReport, tick};
