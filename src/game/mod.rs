//! The round loop
//!
//! Owns one round from the first "Level 1" announcement to game over, a quit
//! request or a camera failure. Each tick runs to completion before the next:
//! quit check, frame, tracking, mapping, simulation, presentation, then the
//! round state machine.

pub mod clock;
pub mod display;

pub use clock::{Clock, FramePacer, ManualClock, SystemClock};
pub use display::{Display, FrameView, LogDisplay};

use std::time::{Duration, Instant};

use glam::Vec2;

use crate::audio::{AudioManager, SoundEffect};
use crate::error::RoundError;
use crate::renderer::{Announcement, Hud, PipFeed, RenderMode, Scene};
use crate::sim::{GameState, Rect, RoundEvent, TickInput, WorldSpace, map_to_world, tick};
use crate::tracking::{CameraProvider, CameraSession, Frame, HandTracker};
use crate::tuning::Tuning;

/// How a round that did not fail came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    GameOver,
    Quit,
}

/// Result of a completed round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub end: RoundEnd,
    pub level: u32,
    pub score: i64,
    /// Simulation ticks played
    pub ticks: u64,
    pub fruits_sliced: u32,
    pub bombs_sliced: u32,
}

/// Runs rounds against a set of collaborators
pub struct RoundRunner<C, D, T> {
    tuning: Tuning,
    render_mode: RenderMode,
    clock: C,
    display: D,
    tracker: T,
    audio: AudioManager,
    show_camera_feed: bool,
}

impl<C: Clock, D: Display, T: HandTracker> RoundRunner<C, D, T> {
    pub fn new(
        tuning: Tuning,
        render_mode: RenderMode,
        clock: C,
        display: D,
        tracker: T,
        audio: AudioManager,
    ) -> Self {
        Self {
            tuning,
            render_mode,
            clock,
            display,
            tracker,
            audio,
            show_camera_feed: true,
        }
    }

    pub fn with_camera_feed(mut self, show: bool) -> Self {
        self.show_camera_feed = show;
        self
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Play one round.
    ///
    /// The camera is opened first and released on every way out of the
    /// round. A camera failure ends only this round.
    pub fn run(
        &mut self,
        cameras: &mut dyn CameraProvider,
        seed: u64,
    ) -> Result<RoundSummary, RoundError> {
        let mut camera = CameraSession::open(cameras).map_err(|e| {
            log::error!("Round not started: {e}");
            RoundError::from(e)
        })?;

        self.announce(Announcement::Level(1), self.tuning.level_announce());
        let mut state = GameState::new(seed, &self.tuning, self.clock.now());
        log::info!("Round started (seed {seed})");

        self.audio.start_music();
        let result = self.play(&mut camera, &mut state);
        self.audio.stop_music();
        camera.release();

        if let Err(e) = &result {
            log::error!("Round ended at level {}: {e}", state.round.level);
        }
        result
    }

    fn play(
        &mut self,
        camera: &mut CameraSession,
        state: &mut GameState,
    ) -> Result<RoundSummary, RoundError> {
        let world = state.world;
        let mut pacer = FramePacer::new(self.tuning.tick_period(), self.clock.now());
        let mut fruits_sliced = 0;
        let mut bombs_sliced = 0;

        let summary = |state: &GameState, end, fruits_sliced, bombs_sliced| RoundSummary {
            end,
            level: state.round.level,
            score: state.round.score,
            ticks: state.time_ticks,
            fruits_sliced,
            bombs_sliced,
        };

        loop {
            if self.display.poll_quit() {
                log::info!("Quit requested at level {}", state.round.level);
                return Ok(summary(state, RoundEnd::Quit, fruits_sliced, bombs_sliced));
            }

            let frame = camera.acquire_frame()?.mirrored();
            let source = frame.dimensions();
            let detection = self.tracker.locate_hands(frame);
            let hand = detection
                .primary()
                .map(|hand| map_to_world(&hand, source, world));

            let report = tick(state, &TickInput { hand });
            for _ in report.slices() {
                self.audio.play(SoundEffect::Slice);
            }
            fruits_sliced += report.fruits_sliced;
            bombs_sliced += report.bombs_sliced;

            let now = self.clock.now();
            self.present(state, hand.as_ref(), &detection.annotated, world, now);

            match state.evaluate_round(now) {
                RoundEvent::Continue => {}
                RoundEvent::LevelUp { level, .. } => {
                    self.announce(Announcement::Level(level), self.tuning.level_announce());
                    let now = self.clock.now();
                    state.round.begin_level(now);
                    pacer.reset(now);
                    continue;
                }
                RoundEvent::GameOver { level, score } => {
                    self.announce(
                        Announcement::GameOver { level, score },
                        self.tuning.game_over_announce(),
                    );
                    return Ok(summary(state, RoundEnd::GameOver, fruits_sliced, bombs_sliced));
                }
            }

            pacer.wait(&mut self.clock);
        }
    }

    fn present(
        &mut self,
        state: &GameState,
        hand: Option<&Rect<WorldSpace>>,
        annotated: &Frame,
        world: Vec2,
        now: Instant,
    ) {
        let scene = Scene::build(&state.objects, hand, world, &self.render_mode);
        let feed = self
            .show_camera_feed
            .then(|| PipFeed::from_frame(annotated, world));
        self.display.present(&FrameView {
            hud: Hud::from_round(&state.round, now),
            scene: &scene,
            camera_feed: feed.as_ref(),
        });
    }

    /// Show a blocking announcement for `hold`
    fn announce(&mut self, announcement: Announcement, hold: Duration) {
        self.display.announce(&announcement);
        self.clock.sleep(hold);
    }
}
