//! Random object spawning
//!
//! Stateless apart from the RNG it is handed, so any seeded generator gives a
//! reproducible stream of fruits and bombs.

use glam::Vec2;
use rand::Rng;

use super::state::{Appearance, FRUIT_VARIANTS, FallingObject, ObjectKind};
use crate::tuning::Tuning;

/// Spawn rules for fruits and bombs
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSpawner {
    /// Chance per tick of one spawn
    pub spawn_chance: f64,
    /// Chance a spawn is a bomb
    pub bomb_chance: f64,
    pub speed_min: f32,
    pub speed_max: f32,
    /// Object side length
    pub size: f32,
    /// Horizontal distance kept from either edge
    pub margin: f32,
    pub world_width: f32,
    /// Objects enter at the bottom edge
    pub spawn_y: f32,
}

impl ObjectSpawner {
    /// Build from validated tuning
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            spawn_chance: tuning.spawn_chance,
            bomb_chance: tuning.bomb_chance,
            speed_min: tuning.speed_min,
            speed_max: tuning.speed_max,
            size: tuning.object_size,
            margin: tuning.spawn_margin,
            world_width: tuning.world_width,
            spawn_y: tuning.world_height,
        }
    }

    /// Called once per tick: emits at most one object
    pub fn maybe_spawn<R: Rng>(&self, rng: &mut R, id: u32) -> Option<FallingObject> {
        if rng.random_bool(self.spawn_chance) {
            Some(self.spawn(rng, id))
        } else {
            None
        }
    }

    /// Unconditionally create one object at the bottom edge
    pub fn spawn<R: Rng>(&self, rng: &mut R, id: u32) -> FallingObject {
        let kind = if rng.random_bool(self.bomb_chance) {
            ObjectKind::Bomb
        } else {
            ObjectKind::Fruit
        };
        let x = rng.random_range(self.margin..=self.world_width - self.margin);
        let speed = rng.random_range(self.speed_min..=self.speed_max);

        let mut object = FallingObject::new(id, kind, Vec2::new(x, self.spawn_y), speed, self.size);
        if kind == ObjectKind::Fruit {
            let [r, g, b]: [u8; 3] = rng.random();
            object.appearance = Appearance {
                sprite: rng.random_range(0..FRUIT_VARIANTS),
                tint: [
                    f32::from(r) / 255.0,
                    f32::from(g) / 255.0,
                    f32::from(b) / 255.0,
                    1.0,
                ],
            };
        }
        object
    }
}
