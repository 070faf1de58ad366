//! Fixed timestep simulation tick
//!
//! Spawns, moves, slices and culls objects for one loop iteration. The round
//! state machine is evaluated separately, after the HUD has been drawn.

use super::geometry::{Rect, WorldSpace};
use super::round::RoundPhase;
use super::slice::{SliceEvent, try_slice};
use super::state::{GameState, ObjectKind};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Hand box already mapped to world space; `None` when no hand was seen
    pub hand: Option<Rect<WorldSpace>>,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Spawned { id: u32, kind: ObjectKind },
    Sliced(SliceEvent),
    /// Left the top of the playfield unsliced
    Culled { id: u32, kind: ObjectKind },
}

/// Summary of one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    pub score_delta: i64,
    pub fruits_sliced: u32,
    pub bombs_sliced: u32,
}

impl TickReport {
    fn record_slice(&mut self, event: SliceEvent) {
        match event.kind {
            ObjectKind::Fruit => self.fruits_sliced += 1,
            ObjectKind::Bomb => self.bombs_sliced += 1,
        }
        self.score_delta += event.score_delta;
        self.events.push(GameEvent::Sliced(event));
    }

    pub fn slices(&self) -> impl Iterator<Item = &SliceEvent> {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Sliced(slice) => Some(slice),
            _ => None,
        })
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();

    // Don't tick during announcements or after game over
    if state.round.phase != RoundPhase::Playing {
        return report;
    }

    state.time_ticks += 1;

    if let Some(id) = state.maybe_spawn() {
        if let Some(obj) = state.objects.last() {
            report.events.push(GameEvent::Spawned { id, kind: obj.kind });
        }
    }

    // Build the next live set instead of removing while iterating.
    // Slice before cull so a last-moment cut still counts.
    let cull_margin = state.cull_margin;
    let mut survivors = Vec::with_capacity(state.objects.len());
    for mut object in std::mem::take(&mut state.objects) {
        object.advance();

        if let Some(event) = try_slice(input.hand.as_ref(), &mut object) {
            log::debug!("Sliced {:?} #{} at {:?}", event.kind, event.id, event.pos);
            report.record_slice(event);
            continue;
        }

        if object.is_off_screen(cull_margin) {
            report.events.push(GameEvent::Culled {
                id: object.id,
                kind: object.kind,
            });
            continue;
        }

        survivors.push(object);
    }
    state.objects = survivors;

    state.round.add_score(report.score_delta);
    log::trace!(
        "tick {}: {} live, delta {}",
        state.time_ticks,
        state.objects.len(),
        report.score_delta
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::round::RoundEvent;
    use crate::sim::state::FallingObject;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;
    use std::time::{Duration, Instant};

    /// A state that never spawns on its own
    fn quiet_state(now: Instant) -> GameState {
        let tuning = Tuning {
            spawn_chance: 0.0,
            ..Default::default()
        };
        GameState::new(12345, &tuning, now)
    }

    /// Put an object whose box will be exactly `(x, y, 50, 50)` after one tick at `speed`
    fn place(state: &mut GameState, kind: ObjectKind, x: f32, y: f32, speed: f32) -> u32 {
        let id = state.next_entity_id();
        let pos = Vec2::new(x + 25.0, y + 25.0 + speed);
        state
            .objects
            .push(FallingObject::new(id, kind, pos, speed, 50.0));
        id
    }

    fn hand(x: f32, y: f32, w: f32, h: f32) -> TickInput {
        TickInput {
            hand: Some(Rect::new(x, y, w, h)),
        }
    }

    #[test]
    fn test_fruit_slice_scores_and_removes() {
        let mut state = quiet_state(Instant::now());
        let id = place(&mut state, ObjectKind::Fruit, 110.0, 110.0, 8.0);

        let report = tick(&mut state, &hand(100.0, 100.0, 50.0, 50.0));
        assert_eq!(report.score_delta, 1);
        assert_eq!(report.fruits_sliced, 1);
        assert!(state.objects.iter().all(|o| o.id != id));
        assert_eq!(state.round.score, 1);

        // never scored twice
        let report = tick(&mut state, &hand(100.0, 100.0, 50.0, 50.0));
        assert_eq!(report.score_delta, 0);
        assert_eq!(state.round.score, 1);
    }

    #[test]
    fn test_bomb_slice_costs_a_point() {
        let mut state = quiet_state(Instant::now());
        place(&mut state, ObjectKind::Bomb, 110.0, 110.0, 8.0);

        let report = tick(&mut state, &hand(100.0, 100.0, 50.0, 50.0));
        assert_eq!(report.score_delta, -1);
        assert_eq!(report.bombs_sliced, 1);
        assert!(state.objects.is_empty());
        assert_eq!(state.round.score, -1);
    }

    #[test]
    fn test_no_hand_object_keeps_moving() {
        let mut state = quiet_state(Instant::now());
        let id = place(&mut state, ObjectKind::Fruit, 110.0, 110.0, 8.0);
        let before = state.objects[0].pos;

        let report = tick(&mut state, &TickInput::default());
        assert_eq!(report.score_delta, 0);
        assert_eq!(state.round.score, 0);
        assert_eq!(state.objects.len(), 1);
        assert_eq!(state.objects[0].id, id);
        assert_eq!(state.objects[0].pos, before - Vec2::new(0.0, 8.0));
    }

    #[test]
    fn test_slice_is_not_retroactive() {
        let mut state = quiet_state(Instant::now());
        place(&mut state, ObjectKind::Fruit, 110.0, 110.0, 8.0);

        // hand missing while the fruit passes the spot
        tick(&mut state, &TickInput::default());
        // hand reappears over the bottom strip the fruit covered last tick;
        // the fruit has since moved 8 units up and out of it
        let report = tick(&mut state, &hand(100.0, 153.0, 50.0, 7.0));
        assert_eq!(report.score_delta, 0);
        assert_eq!(state.objects.len(), 1);
    }

    #[test]
    fn test_multiple_slices_in_one_tick() {
        let mut state = quiet_state(Instant::now());
        place(&mut state, ObjectKind::Fruit, 100.0, 100.0, 8.0);
        place(&mut state, ObjectKind::Fruit, 200.0, 100.0, 8.0);
        place(&mut state, ObjectKind::Bomb, 300.0, 100.0, 8.0);
        place(&mut state, ObjectKind::Fruit, 800.0, 600.0, 8.0);

        let report = tick(&mut state, &hand(90.0, 90.0, 300.0, 100.0));
        assert_eq!(report.fruits_sliced, 2);
        assert_eq!(report.bombs_sliced, 1);
        assert_eq!(report.score_delta, 1);
        assert_eq!(report.slices().count(), 3);
        assert_eq!(state.objects.len(), 1);
    }

    #[test]
    fn test_off_screen_objects_are_culled() {
        let mut state = quiet_state(Instant::now());
        let id = state.next_entity_id();
        state.objects.push(FallingObject::new(
            id,
            ObjectKind::Fruit,
            Vec2::new(500.0, -45.0),
            10.0,
            50.0,
        ));

        let report = tick(&mut state, &TickInput::default());
        assert!(state.objects.is_empty());
        assert!(report.events.contains(&GameEvent::Culled {
            id,
            kind: ObjectKind::Fruit
        }));
    }

    #[test]
    fn test_last_moment_slice_beats_cull() {
        let mut state = quiet_state(Instant::now());
        let id = state.next_entity_id();
        state.objects.push(FallingObject::new(
            id,
            ObjectKind::Fruit,
            Vec2::new(500.0, -45.0),
            10.0,
            50.0,
        ));

        // after the move the fruit is at y = -55, past the cull line
        let report = tick(&mut state, &hand(480.0, -100.0, 40.0, 60.0));
        assert_eq!(report.fruits_sliced, 1);
        assert_eq!(state.round.score, 1);
    }

    #[test]
    fn test_spawned_objects_move_on_their_tick() {
        let tuning = Tuning {
            spawn_chance: 1.0,
            ..Default::default()
        };
        let mut state = GameState::new(5, &tuning, Instant::now());
        let report = tick(&mut state, &TickInput::default());
        assert!(matches!(report.events[0], GameEvent::Spawned { .. }));
        assert_eq!(state.objects.len(), 1);
        assert!(state.objects[0].pos.y < 768.0);
    }

    #[test]
    fn test_no_tick_outside_play() {
        let start = Instant::now();
        let mut state = quiet_state(start);
        place(&mut state, ObjectKind::Fruit, 110.0, 110.0, 8.0);
        state.round.score = 25;
        let event = state.evaluate_round(start + Duration::from_secs(60));
        assert!(matches!(event, RoundEvent::LevelUp { .. }));
        assert!(state.objects.is_empty());

        place(&mut state, ObjectKind::Fruit, 110.0, 110.0, 8.0);
        let report = tick(&mut state, &hand(100.0, 100.0, 50.0, 50.0));
        assert_eq!(report, TickReport::default());
        assert_eq!(state.round.score, 25);
    }

    #[test]
    fn test_expiry_tick_still_scores() {
        let start = Instant::now();
        let mut state = quiet_state(start);
        state.round.score = 19;
        place(&mut state, ObjectKind::Fruit, 110.0, 110.0, 8.0);

        // slice on the tick the timer runs out, then evaluate
        tick(&mut state, &hand(100.0, 100.0, 50.0, 50.0));
        let event = state.evaluate_round(start + Duration::from_secs(60));
        assert_eq!(
            event,
            RoundEvent::LevelUp {
                level: 2,
                threshold: 40
            }
        );
    }

    #[test]
    fn test_determinism() {
        let tuning = Tuning {
            spawn_chance: 0.3,
            ..Default::default()
        };
        let now = Instant::now();
        let mut s1 = GameState::new(99999, &tuning, now);
        let mut s2 = GameState::new(99999, &tuning, now);
        let inputs = [
            hand(0.0, 0.0, 1024.0, 200.0),
            TickInput::default(),
            hand(400.0, 500.0, 100.0, 100.0),
        ];
        for i in 0..300 {
            let input = &inputs[i % inputs.len()];
            assert_eq!(tick(&mut s1, input), tick(&mut s2, input));
        }
        assert_eq!(s1.objects, s2.objects);
        assert_eq!(s1.round.score, s2.round.score);
    }

    proptest! {
        #[test]
        fn prop_delta_is_fruits_minus_bombs(
            seed in any::<u64>(),
            hx in -100.0f32..1100.0,
            hy in -100.0f32..800.0,
            hw in 0.0f32..600.0,
            hh in 0.0f32..600.0,
        ) {
            let tuning = Tuning { spawn_chance: 0.5, ..Default::default() };
            let mut state = GameState::new(seed, &tuning, Instant::now());
            for _ in 0..60 {
                tick(&mut state, &TickInput::default());
            }
            let before = state.objects.len();
            let score_before = state.round.score;

            let report = tick(&mut state, &hand(hx, hy, hw, hh));
            prop_assert_eq!(
                report.score_delta,
                i64::from(report.fruits_sliced) - i64::from(report.bombs_sliced)
            );
            prop_assert_eq!(state.round.score - score_before, report.score_delta);
            for obj in &state.objects {
                prop_assert!(!obj.sliced);
                prop_assert_eq!(obj.bounds().center(), obj.pos);
            }
            let count = |f: fn(&GameEvent) -> bool| report.events.iter().filter(|e| f(e)).count();
            let culled = count(|e| matches!(e, GameEvent::Culled { .. }));
            let spawned = count(|e| matches!(e, GameEvent::Spawned { .. }));
            let sliced = (report.fruits_sliced + report.bombs_sliced) as usize;
            prop_assert_eq!(state.objects.len(), before + spawned - sliced - culled);
        }
    }
}
