//! Error types
//!
//! Only camera failures can end a round early. Missing assets degrade the
//! presentation at startup and never reach the loop.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the camera collaborator
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("camera could not be opened: {0}")]
    OpenFailed(String),
    #[error("camera stopped delivering frames")]
    FrameUnavailable,
    #[error("camera delivered an empty {width}x{height} frame")]
    EmptyFrame { width: u32, height: u32 },
}

/// Reasons a round ends without reaching game over or quit
#[derive(Debug, Error)]
pub enum RoundError {
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(#[from] CameraError),
}

/// An image or sound the presentation layer could not load
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset {path:?} could not be loaded: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("asset {0:?} not found")]
    Missing(PathBuf),
}

/// Settings and tuning file problems
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// A sound cue the audio backend could not play
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("playback of {cue} failed: {reason}")]
    Playback { cue: &'static str, reason: String },
}
