//! HUD, announcements and the picture-in-picture camera feed

use std::time::Instant;

use glam::Vec2;
use image::RgbImage;

use super::vertex::colors;
use crate::consts::{PIP_CAPTION_OFFSET, PIP_HEIGHT, PIP_MARGIN, PIP_WIDTH};
use crate::sim::RoundState;
use crate::tracking::Frame;

const HUD_FONT_SIZE: f32 = 36.0;
const ANNOUNCE_FONT_SIZE: f32 = 74.0;
/// Room reserved for the timer at the top-right
const TIMER_WIDTH: f32 = 150.0;

/// A line of text for the display backend to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    /// Top-left corner, or the center when `centered`
    pub pos: Vec2,
    pub color: [f32; 4],
    pub size: f32,
    pub centered: bool,
}

/// Values shown while playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: i64,
    /// Whole seconds left, never negative
    pub seconds_remaining: u64,
    pub level: u32,
    pub threshold: i64,
}

impl Hud {
    pub fn from_round(round: &RoundState, now: Instant) -> Self {
        Self {
            score: round.score,
            seconds_remaining: round.seconds_remaining(now),
            level: round.level,
            threshold: round.threshold,
        }
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn timer_text(&self) -> String {
        format!("Time: {}s", self.seconds_remaining)
    }

    pub fn level_text(&self) -> String {
        format!("Level {}", self.level)
    }

    /// Score top-left, level top-center, timer top-right
    pub fn text_items(&self, world: Vec2) -> Vec<TextItem> {
        vec![
            TextItem {
                text: self.score_text(),
                pos: Vec2::new(10.0, 10.0),
                color: colors::SCORE_TEXT,
                size: HUD_FONT_SIZE,
                centered: false,
            },
            TextItem {
                text: self.level_text(),
                pos: Vec2::new(world.x / 2.0, 10.0 + HUD_FONT_SIZE / 2.0),
                color: colors::SCORE_TEXT,
                size: HUD_FONT_SIZE,
                centered: true,
            },
            TextItem {
                text: self.timer_text(),
                pos: Vec2::new(world.x - TIMER_WIDTH, 10.0),
                color: colors::TIMER_TEXT,
                size: HUD_FONT_SIZE,
                centered: false,
            },
        ]
    }
}

/// Full-screen blocking messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    Level(u32),
    GameOver { level: u32, score: i64 },
}

impl Announcement {
    pub fn text(&self) -> String {
        match self {
            Announcement::Level(level) => format!("Level {level}"),
            Announcement::GameOver { .. } => "Game Over".to_string(),
        }
    }

    pub fn text_item(&self, world: Vec2) -> TextItem {
        let color = match self {
            Announcement::Level(_) => colors::LEVEL_TEXT,
            Announcement::GameOver { .. } => colors::GAME_OVER_TEXT,
        };
        TextItem {
            text: self.text(),
            pos: world / 2.0,
            color,
            size: ANNOUNCE_FONT_SIZE,
            centered: true,
        }
    }
}

/// Scaled annotated camera frame pinned to the top-right corner
#[derive(Debug, Clone)]
pub struct PipFeed {
    pub image: RgbImage,
    pub origin: Vec2,
    pub caption: TextItem,
}

impl PipFeed {
    pub fn from_frame(frame: &Frame, world: Vec2) -> Self {
        let origin = Vec2::new(world.x - PIP_WIDTH as f32 - PIP_MARGIN, PIP_MARGIN);
        Self {
            image: frame.thumbnail(PIP_WIDTH, PIP_HEIGHT),
            origin,
            caption: TextItem {
                text: "Hand Detection:".to_string(),
                pos: Vec2::new(origin.x, (origin.y - PIP_CAPTION_OFFSET).max(0.0)),
                color: colors::SCORE_TEXT,
                size: HUD_FONT_SIZE,
                centered: false,
            },
        }
    }
}
