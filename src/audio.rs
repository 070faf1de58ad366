//! Audio cues
//!
//! Sound is optional: whether a backend exists is decided once at startup,
//! and a cue that fails to play is dropped without affecting the round.

use std::path::{Path, PathBuf};

use crate::error::{AssetError, AudioError};
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Any fruit or bomb cut by the hand
    Slice,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Slice => "slice",
        }
    }
}

/// Sound files found in the asset directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueFiles {
    /// One-shot slice cue
    pub cut: PathBuf,
    /// Looping background track, if present
    pub music: Option<PathBuf>,
}

impl CueFiles {
    pub const CUT: &'static str = "cut.wav";
    pub const MUSIC: &'static str = "background.wav";

    /// The slice cue is required; music is optional
    pub fn locate(dir: &Path) -> Result<Self, AssetError> {
        let cut = dir.join(Self::CUT);
        if !cut.is_file() {
            return Err(AssetError::Missing(cut));
        }
        let music = dir.join(Self::MUSIC);
        let music = if music.is_file() {
            Some(music)
        } else {
            log::warn!("{} not found, no background music", music.display());
            None
        };
        Ok(Self { cut, music })
    }
}

/// Something that can actually make noise
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError>;
    fn start_music(&mut self, volume: f32) -> Result<(), AudioError>;
    fn stop_music(&mut self);
}

/// Backend that reports cues to the log instead of a mixer
#[derive(Debug)]
pub struct LogBackend {
    cues: CueFiles,
}

impl LogBackend {
    pub fn new(cues: CueFiles) -> Self {
        Self { cues }
    }
}

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
        log::debug!("cue {} ({}) at {volume:.2}", effect.as_str(), self.cues.cut.display());
        Ok(())
    }

    fn start_music(&mut self, volume: f32) -> Result<(), AudioError> {
        match &self.cues.music {
            Some(path) => {
                log::debug!("music {} at {volume:.2}", path.display());
                Ok(())
            }
            None => Err(AudioError::Playback {
                cue: "music",
                reason: "no background track".into(),
            }),
        }
    }

    fn stop_music(&mut self) {
        log::debug!("music stopped");
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    sfx_volume: f32,
    music_volume: f32,
    music_playing: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::silent()
    }
}

impl AudioManager {
    pub fn new(backend: Option<Box<dyn AudioBackend>>, settings: &Settings) -> Self {
        if backend.is_none() {
            log::warn!("No audio backend - audio disabled");
        }
        Self {
            backend,
            sfx_volume: settings.effective_sfx_volume(),
            music_volume: settings.effective_music_volume(),
            music_playing: false,
        }
    }

    /// No backend at all
    pub fn silent() -> Self {
        Self {
            backend: None,
            sfx_volume: 0.0,
            music_volume: 0.0,
            music_playing: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        if self.sfx_volume <= 0.0 {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        if let Err(e) = backend.play(effect, self.sfx_volume) {
            log::trace!("{e}");
        }
    }

    /// Start the background loop if enabled
    pub fn start_music(&mut self) {
        if self.music_volume <= 0.0 || self.music_playing {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        match backend.start_music(self.music_volume) {
            Ok(()) => self.music_playing = true,
            Err(e) => log::trace!("{e}"),
        }
    }

    pub fn stop_music(&mut self) {
        if !self.music_playing {
            return;
        }
        if let Some(backend) = self.backend.as_mut() {
            backend.stop_music();
        }
        self.music_playing = false;
    }
}
