//! Game state and core simulation types

use std::time::Instant;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geometry::{Rect, WorldSpace};
use super::round::{RoundEvent, RoundState};
use super::spawner::ObjectSpawner;
use crate::tuning::Tuning;

/// Number of fruit sprite variants (apple, banana, cherry)
pub const FRUIT_VARIANTS: u8 = 3;

/// What a spawned object is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Fruit,
    Bomb,
}

impl ObjectKind {
    /// Score change when this kind is sliced
    pub fn score_delta(self) -> i64 {
        match self {
            ObjectKind::Fruit => 1,
            ObjectKind::Bomb => -1,
        }
    }
}

/// How an object is drawn; rolled once at spawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Sprite index (fruit variants only; bombs have one sprite)
    pub sprite: u8,
    /// Fill color when drawn as a primitive circle
    pub tint: [f32; 4],
}

impl Appearance {
    pub const BOMB: Appearance = Appearance {
        sprite: 0,
        tint: [0.0, 0.0, 0.0, 1.0],
    };
}

/// A fruit or bomb rising through the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct FallingObject {
    /// Never reused within a game
    pub id: u32,
    pub kind: ObjectKind,
    /// Center position in world space
    pub pos: Vec2,
    /// Vertical speed in world units per tick (positive = upward)
    pub speed: f32,
    /// Side length of the bounding box
    pub size: f32,
    pub sliced: bool,
    pub appearance: Appearance,
}

impl FallingObject {
    pub fn new(id: u32, kind: ObjectKind, pos: Vec2, speed: f32, size: f32) -> Self {
        let appearance = match kind {
            ObjectKind::Fruit => Appearance {
                sprite: 0,
                tint: [1.0, 1.0, 1.0, 1.0],
            },
            ObjectKind::Bomb => Appearance::BOMB,
        };
        Self {
            id,
            kind,
            pos,
            speed,
            size,
            sliced: false,
            appearance,
        }
    }

    /// Bounding box, always centered on the current position
    pub fn bounds(&self) -> Rect<WorldSpace> {
        Rect::from_center(self.pos, Vec2::splat(self.size))
    }

    /// Move one tick toward the top of the playfield
    pub fn advance(&mut self) {
        self.pos.y -= self.speed;
    }

    /// True once the object is more than `cull_margin` above the top edge
    pub fn is_off_screen(&self, cull_margin: f32) -> bool {
        self.pos.y < -cull_margin
    }
}

/// Complete simulation state for one round
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Score, level and timer
    pub round: RoundState,
    /// Live objects, in spawn order
    pub objects: Vec<FallingObject>,
    /// Spawn rules
    pub spawner: ObjectSpawner,
    /// Distance above the top edge before an object is dropped
    pub cull_margin: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// World size
    pub world: Vec2,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new game state at level 1 with the given seed
    pub fn new(seed: u64, tuning: &Tuning, now: Instant) -> Self {
        Self {
            seed,
            round: RoundState::new(now, tuning),
            objects: Vec::new(),
            spawner: ObjectSpawner::from_tuning(tuning),
            cull_margin: tuning.cull_margin,
            time_ticks: 0,
            world: Vec2::new(tuning.world_width, tuning.world_height),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Roll the spawner once; returns the new object's id if one appeared
    pub fn maybe_spawn(&mut self) -> Option<u32> {
        let object = self.spawner.maybe_spawn(&mut self.rng, self.next_id)?;
        self.next_id += 1;
        let id = object.id;
        self.objects.push(object);
        Some(id)
    }

    /// Run the round state machine; a level-up clears the playfield
    pub fn evaluate_round(&mut self, now: Instant) -> RoundEvent {
        let event = self.round.evaluate(now);
        if let RoundEvent::LevelUp { .. } = event {
            self.objects.clear();
        }
        event
    }
}
