//! Scripted camera
//!
//! Renders a coloured glove sweeping a figure-eight across an otherwise plain
//! frame. Stands in for a webcam in the headless binary and in tests, and can
//! be told to drop the glove periodically or to fail after a number of frames.

use std::cell::Cell;
use std::f32::consts::TAU;
use std::rc::Rc;

use image::{Rgb, RgbImage};

use super::camera::{Camera, CameraProvider};
use super::frame::Frame;
use crate::error::CameraError;

/// What the scripted camera shows
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptConfig {
    pub width: u32,
    pub height: u32,
    pub background: [u8; 3],
    pub glove: [u8; 3],
    /// Glove side length in pixels
    pub glove_size: u32,
    /// Frames per full figure-eight
    pub period_frames: u32,
    /// `(every, length)`: hide the glove for `length` frames out of every `every`
    pub dropout: Option<(u64, u64)>,
    /// Stop delivering frames after this many
    pub fail_after: Option<u64>,
    /// Refuse to open at all
    pub fail_open: bool,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            background: [40, 90, 140],
            glove: [255, 0, 255],
            glove_size: 96,
            period_frames: 240,
            dropout: Some((180, 30)),
            fail_after: None,
            fail_open: false,
        }
    }
}

/// A camera that plays back the scripted glove motion
pub struct ScriptedCamera {
    config: ScriptConfig,
    frame_index: u64,
    releases: Rc<Cell<u32>>,
}

impl ScriptedCamera {
    /// Top-left corner of the glove on a given frame, if visible
    pub fn glove_position(config: &ScriptConfig, frame_index: u64) -> Option<(u32, u32)> {
        if let Some((every, length)) = config.dropout {
            if every > 0 && frame_index % every < length {
                return None;
            }
        }
        let size = config.glove_size.min(config.width).min(config.height);
        let span_x = (config.width - size) as f32 / 2.0;
        let span_y = (config.height - size) as f32 / 2.0;
        let t = TAU * (frame_index % u64::from(config.period_frames.max(1))) as f32
            / config.period_frames.max(1) as f32;

        let x = span_x + span_x * t.sin();
        let y = span_y + span_y * (2.0 * t).sin();
        Some((x.round() as u32, y.round() as u32))
    }

    fn render(&self) -> RgbImage {
        let config = &self.config;
        let mut image = RgbImage::from_pixel(config.width, config.height, Rgb(config.background));
        if let Some((gx, gy)) = Self::glove_position(config, self.frame_index) {
            let glove = Rgb(config.glove);
            let x1 = (gx + config.glove_size).min(config.width);
            let y1 = (gy + config.glove_size).min(config.height);
            for y in gy..y1 {
                for x in gx..x1 {
                    image.put_pixel(x, y, glove);
                }
            }
        }
        image
    }
}

impl Camera for ScriptedCamera {
    fn acquire_frame(&mut self) -> Result<Frame, CameraError> {
        if let Some(limit) = self.config.fail_after {
            if self.frame_index >= limit {
                return Err(CameraError::FrameUnavailable);
            }
        }
        let frame = Frame::new(self.render())?;
        self.frame_index += 1;
        Ok(frame)
    }

    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

/// Opens [`ScriptedCamera`]s and counts how often they are released
#[derive(Debug, Default)]
pub struct ScriptedCameraProvider {
    config: ScriptConfig,
    opened: u32,
    releases: Rc<Cell<u32>>,
}

impl ScriptedCameraProvider {
    pub fn new(config: ScriptConfig) -> Self {
        Self {
            config,
            opened: 0,
            releases: Rc::new(Cell::new(0)),
        }
    }

    pub fn opened(&self) -> u32 {
        self.opened
    }

    pub fn releases(&self) -> u32 {
        self.releases.get()
    }
}

impl CameraProvider for ScriptedCameraProvider {
    fn open(&mut self) -> Result<Box<dyn Camera>, CameraError> {
        if self.config.fail_open {
            return Err(CameraError::OpenFailed("scripted camera set to fail".into()));
        }
        self.opened += 1;
        Ok(Box::new(ScriptedCamera {
            config: self.config.clone(),
            frame_index: 0,
            releases: self.releases.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::{ColorBlobTracker, HandTracker};

    #[test]
    fn test_glove_stays_inside_frame() {
        let config = ScriptConfig {
            dropout: None,
            ..Default::default()
        };
        for i in 0..u64::from(config.period_frames) {
            let (x, y) = ScriptedCamera::glove_position(&config, i).unwrap();
            assert!(x + config.glove_size <= config.width);
            assert!(y + config.glove_size <= config.height);
        }
    }

    #[test]
    fn test_dropout_hides_glove() {
        let config = ScriptConfig::default();
        assert!(ScriptedCamera::glove_position(&config, 0).is_none());
        assert!(ScriptedCamera::glove_position(&config, 29).is_none());
        assert!(ScriptedCamera::glove_position(&config, 30).is_some());
        assert!(ScriptedCamera::glove_position(&config, 180).is_none());
    }

    #[test]
    fn test_fails_after_limit() {
        let mut provider = ScriptedCameraProvider::new(ScriptConfig {
            width: 32,
            height: 24,
            glove_size: 8,
            fail_after: Some(2),
            ..Default::default()
        });
        let mut camera = provider.open().unwrap();
        assert!(camera.acquire_frame().is_ok());
        assert!(camera.acquire_frame().is_ok());
        assert!(matches!(
            camera.acquire_frame(),
            Err(CameraError::FrameUnavailable)
        ));
        camera.release();
        assert_eq!(provider.releases(), 1);
    }

    #[test]
    fn test_fail_open() {
        let mut provider = ScriptedCameraProvider::new(ScriptConfig {
            fail_open: true,
            ..Default::default()
        });
        assert!(provider.open().is_err());
        assert_eq!(provider.opened(), 0);
    }

    #[test]
    fn test_tracker_sees_scripted_glove() {
        let config = ScriptConfig {
            dropout: None,
            ..Default::default()
        };
        let mut provider = ScriptedCameraProvider::new(config.clone());
        let mut camera = provider.open().unwrap();
        let mut tracker = ColorBlobTracker::default();

        let (gx, gy) = ScriptedCamera::glove_position(&config, 0).unwrap();
        let frame = camera.acquire_frame().unwrap();
        let (_, hand) = tracker.locate_hand(frame);
        let hand = hand.unwrap();
        assert!((hand.x - gx as f32).abs() <= 4.0);
        assert!((hand.y - gy as f32).abs() <= 4.0);
        assert!((hand.width - config.glove_size as f32).abs() <= 4.0);
    }
}
