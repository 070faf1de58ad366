//! Display collaborator

use glam::Vec2;

use crate::renderer::{Announcement, Hud, PipFeed, Scene};

/// Everything a display draws for one tick
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub hud: Hud,
    pub scene: &'a Scene,
    /// Absent when the feed is turned off in settings
    pub camera_feed: Option<&'a PipFeed>,
}

/// Presents frames and reports quit requests.
///
/// Announcements are shown and then held by the loop; the display only
/// draws them.
pub trait Display {
    /// True if the player asked to leave. Polled once per tick.
    fn poll_quit(&mut self) -> bool;

    fn present(&mut self, view: &FrameView<'_>);

    fn announce(&mut self, announcement: &Announcement);
}

/// Headless display that writes the HUD to the log
#[derive(Debug)]
pub struct LogDisplay {
    world: Vec2,
    presented: u64,
    tick_limit: Option<u64>,
    last_seconds: Option<u64>,
}

impl LogDisplay {
    pub fn new(world: Vec2) -> Self {
        Self {
            world,
            presented: 0,
            tick_limit: None,
            last_seconds: None,
        }
    }

    /// Ask to quit after `ticks` presented frames
    pub fn with_tick_limit(mut self, ticks: u64) -> Self {
        self.tick_limit = Some(ticks);
        self
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Display for LogDisplay {
    fn poll_quit(&mut self) -> bool {
        self.tick_limit.is_some_and(|limit| self.presented >= limit)
    }

    fn present(&mut self, view: &FrameView<'_>) {
        self.presented += 1;
        log::trace!(
            "frame {}: {} triangles, {} sprites",
            self.presented,
            view.scene.triangle_count(),
            view.scene.sprites.len()
        );
        if self.last_seconds != Some(view.hud.seconds_remaining) {
            self.last_seconds = Some(view.hud.seconds_remaining);
            let line = view
                .hud
                .text_items(self.world)
                .into_iter()
                .map(|item| item.text)
                .collect::<Vec<_>>()
                .join("  ");
            log::debug!("level {} | {line}", view.hud.level);
        }
    }

    fn announce(&mut self, announcement: &Announcement) {
        self.last_seconds = None;
        let item = announcement.text_item(self.world);
        match announcement {
            Announcement::Level(_) => log::info!("{}", item.text),
            Announcement::GameOver { level, score } => {
                log::info!("{} (level {level}, score {score})", item.text)
            }
        }
    }
}
