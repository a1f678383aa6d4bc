//! Playback through the default output device with rodio
//!
//! Sound files are opened when played, so a missing file surfaces as an error at
//! the call that needed it.

use super::{AudioAssets, AudioBackend, AudioError, Effect};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct RodioBackend {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    ambient: Option<Sink>,
    assets: AudioAssets,
}

impl RodioBackend {
    /// Open the default output device
    ///
    /// # Errors
    ///
    /// Returns `AudioError::Device` if no output device is available.
    pub fn new(assets: AudioAssets) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            ambient: None,
            assets,
        })
    }
}

fn open_asset(path: &Path) -> Result<BufReader<File>, AudioError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| AudioError::Asset {
            path: path.to_path_buf(),
            source,
        })
}

impl AudioBackend for RodioBackend {
    fn start_ambient(&mut self) -> Result<(), AudioError> {
        self.stop_ambient();

        let path = &self.assets.ambient;
        let source = Decoder::new_looped(open_asset(path)?).map_err(|source| {
            AudioError::Decode {
                path: path.clone(),
                source,
            }
        })?;

        let sink = Sink::try_new(&self.handle)?;
        sink.append(source);
        self.ambient = Some(sink);
        Ok(())
    }

    fn stop_ambient(&mut self) {
        if let Some(sink) = self.ambient.take() {
            sink.stop();
        }
    }

    fn play_effect(&mut self, effect: Effect) -> Result<(), AudioError> {
        let path = self.assets.effect(effect);
        let source = Decoder::new(open_asset(path)?).map_err(|source| AudioError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let sink = Sink::try_new(&self.handle)?;
        sink.append(source);
        sink.detach();
        Ok(())
    }
}
