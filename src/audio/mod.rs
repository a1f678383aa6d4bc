//! Audio feedback
//!
//! A looping ambient track plus one-shot effects. `AudioFeedback` owns the music
//! toggle and the delayed resume after win/loss effects; the `AudioBackend` does the
//! actual playback.

mod feedback;
#[cfg(feature = "audio")]
mod rodio_backend;

pub use feedback::{AudioFeedback, RESUME_DELAY};
#[cfg(feature = "audio")]
pub use rodio_backend::RodioBackend;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const AMBIENT_FILE: &str = "HANGMAN_MAIN_MUS.wav";
pub const WIN_FILE: &str = "HANGMAN_WIN_SOUND2.wav";
pub const LOSS_FILE: &str = "HANGMAN_LOSS_SOUND.wav";
pub const CLICK_FILE: &str = "HANGMAN_CLICK_SOUND.wav";

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Cannot open sound asset {}: {source}", .path.display())]
    Asset {
        path: PathBuf,
        source: std::io::Error,
    },

    #[cfg(feature = "audio")]
    #[error("Cannot decode sound asset {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },

    #[cfg(feature = "audio")]
    #[error("Audio output unavailable: {0}")]
    Device(#[from] rodio::StreamError),

    #[cfg(feature = "audio")]
    #[error("Cannot play sound: {0}")]
    Playback(#[from] rodio::PlayError),
}

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Click,
    Win,
    Loss,
}

/// Locations of the four sound files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioAssets {
    pub ambient: PathBuf,
    pub win: PathBuf,
    pub loss: PathBuf,
    pub click: PathBuf,
}

impl AudioAssets {
    /// Standard file names inside `dir`
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            ambient: dir.join(AMBIENT_FILE),
            win: dir.join(WIN_FILE),
            loss: dir.join(LOSS_FILE),
            click: dir.join(CLICK_FILE),
        }
    }

    #[must_use]
    pub fn effect(&self, effect: Effect) -> &Path {
        match effect {
            Effect::Click => &self.click,
            Effect::Win => &self.win,
            Effect::Loss => &self.loss,
        }
    }
}

/// Playback device abstraction
pub trait AudioBackend {
    /// Start the ambient loop from the beginning, replacing any playing loop
    ///
    /// # Errors
    ///
    /// Returns `AudioError` if the ambient asset cannot be loaded or played.
    fn start_ambient(&mut self) -> Result<(), AudioError>;

    fn stop_ambient(&mut self);

    /// Fire and forget
    ///
    /// # Errors
    ///
    /// Returns `AudioError` if the effect asset cannot be loaded or played.
    fn play_effect(&mut self, effect: Effect) -> Result<(), AudioError>;
}

/// Backend that plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn start_ambient(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop_ambient(&mut self) {}

    fn play_effect(&mut self, _effect: Effect) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Open the system audio device, or a silent backend if sound is disabled or unavailable.
///
/// The second value explains why sound was requested but could not be started.
#[must_use]
pub fn open_backend(assets: AudioAssets, enabled: bool) -> (Box<dyn AudioBackend>, Option<String>) {
    if !enabled {
        log::info!("Audio disabled");
        return (Box::new(SilentBackend), None);
    }

    #[cfg(feature = "audio")]
    let reason = match RodioBackend::new(assets) {
        Ok(backend) => return (Box::new(backend), None),
        Err(err) => {
            log::warn!("{err}; continuing without sound");
            err.to_string()
        }
    };

    #[cfg(not(feature = "audio"))]
    let reason = {
        log::info!(
            "Built without audio support, ignoring {}",
            assets.ambient.display()
        );
        "built without audio support".to_string()
    };

    (Box::new(SilentBackend), Some(reason))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assets_use_fixed_names() {
        let assets = AudioAssets::in_dir(Path::new("sounds"));
        assert_eq!(assets.ambient, Path::new("sounds").join(AMBIENT_FILE));
        assert_eq!(assets.effect(Effect::Win), Path::new("sounds").join(WIN_FILE));
        assert_eq!(assets.effect(Effect::Loss), Path::new("sounds").join(LOSS_FILE));
        assert_eq!(assets.effect(Effect::Click), Path::new("sounds").join(CLICK_FILE));
    }

    #[test]
    fn missing_asset_error_names_the_file() {
        let err = AudioError::Asset {
            path: PathBuf::from("sounds/HANGMAN_CLICK_SOUND.wav"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("HANGMAN_CLICK_SOUND.wav"));
    }

    #[test]
    fn disabled_audio_has_no_warning() {
        let (_, warning) = open_backend(AudioAssets::in_dir(Path::new("sounds")), false);
        assert!(warning.is_none());
    }

    #[cfg(not(feature = "audio"))]
    #[test]
    fn requested_audio_without_support_warns() {
        let (_, warning) = open_backend(AudioAssets::in_dir(Path::new("sounds")), true);
        assert_eq!(warning.as_deref(), Some("built without audio support"));
    }
}
