//! Hand Slice entry point
//!
//! Runs one round headless: a scripted camera, the colour tracker and a
//! display that writes the HUD to the log. Set `RUST_LOG=debug` to follow
//! the score and timer.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use glam::Vec2;

use hand_slice::audio::{AudioBackend, AudioManager, CueFiles, LogBackend};
use hand_slice::game::{LogDisplay, RoundEnd, RoundRunner, RoundSummary, SystemClock};
use hand_slice::renderer::RenderMode;
use hand_slice::tracking::{ColorBlobTracker, ScriptConfig, ScriptedCameraProvider};
use hand_slice::{RoundError, Settings, Tuning};

/// Quit after this many seconds if the round is still going
const DEMO_SECONDS: u64 = 300;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let tuning = Tuning::load(Path::new(Tuning::FILE_NAME))
        .with_context(|| format!("loading {}", Tuning::FILE_NAME))?;
    let settings = Settings::load(Path::new(Settings::FILE_NAME));

    let render_mode = RenderMode::resolve(&settings.asset_dir, tuning.object_size.round() as u32);
    let backend = match CueFiles::locate(&settings.asset_dir) {
        Ok(cues) => Some(Box::new(LogBackend::new(cues)) as Box<dyn AudioBackend>),
        Err(e) => {
            log::warn!("{e}; audio disabled");
            None
        }
    };
    let audio = AudioManager::new(backend, &settings);

    let world = Vec2::new(tuning.world_width, tuning.world_height);
    let tick_limit = u64::from(tuning.tick_rate) * DEMO_SECONDS;
    let display = LogDisplay::new(world).with_tick_limit(tick_limit);
    let mut runner = RoundRunner::new(
        tuning,
        render_mode,
        SystemClock,
        display,
        ColorBlobTracker::default(),
        audio,
    )
    .with_camera_feed(settings.show_camera_feed);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(42);
    let mut cameras = ScriptedCameraProvider::new(ScriptConfig::default());

    report(runner.run(&mut cameras, seed))
}

/// Log how the round went. A failed round is not a failed process.
fn report(result: Result<RoundSummary, RoundError>) -> anyhow::Result<()> {
    match result {
        Ok(summary) => {
            let how = match summary.end {
                RoundEnd::GameOver => "game over",
                RoundEnd::Quit => "quit",
            };
            log::info!(
                "Round finished ({how}): level {}, score {}, {} ticks, {} fruits and {} bombs",
                summary.level,
                summary.score,
                summary.ticks,
                summary.fruits_sliced,
                summary.bombs_sliced
            );
        }
        Err(e) => log::error!("Round aborted: {e}"),
    }
    Ok(())
}
