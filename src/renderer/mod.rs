//! Backend-agnostic rendering
//!
//! Builds vertex lists, sprite placements and HUD text. Presenting them is
//! left to a `game::Display` implementation.

pub mod assets;
pub mod hud;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use assets::{RenderMode, SpriteId, SpriteSet};
pub use hud::{Announcement, Hud, PipFeed, TextItem};
pub use scene::{Scene, SpriteInstance};
pub use vertex::Vertex;
