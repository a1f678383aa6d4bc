//! Music toggle and scheduled resume
//!
//! Win and loss effects pause the ambient track and schedule a resume. Each
//! scheduled resume carries the generation it was issued in; starting a round or
//! toggling music bumps the generation so stale resumes are dropped when they fall due.

use super::{AudioBackend, AudioError, Effect};
use std::time::{Duration, Instant};

/// Delay between a win/loss effect and the ambient track resuming
pub const RESUME_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingResume {
    due: Instant,
    generation: u64,
}

pub struct AudioFeedback {
    backend: Box<dyn AudioBackend>,
    music_enabled: bool,
    generation: u64,
    pending_resume: Option<PendingResume>,
}

impl AudioFeedback {
    #[must_use]
    pub fn new(backend: Box<dyn AudioBackend>, music_enabled: bool) -> Self {
        Self {
            backend,
            music_enabled,
            generation: 0,
            pending_resume: None,
        }
    }

    #[must_use]
    pub const fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    /// When the next scheduled resume falls due, if any
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_resume.map(|pending| pending.due)
    }

    /// A round was started explicitly: restart the ambient loop
    ///
    /// # Errors
    ///
    /// Returns `AudioError` if the ambient track cannot be played.
    pub fn round_started(&mut self) -> Result<(), AudioError> {
        self.generation += 1;
        if self.music_enabled {
            self.backend.start_ambient()?;
        }
        Ok(())
    }

    /// Flip the music toggle, returning the new state
    ///
    /// # Errors
    ///
    /// Returns `AudioError` if the ambient track cannot be played.
    pub fn toggle_music(&mut self) -> Result<bool, AudioError> {
        self.generation += 1;
        self.music_enabled = !self.music_enabled;
        if self.music_enabled {
            self.backend.start_ambient()?;
        } else {
            self.backend.stop_ambient();
        }
        log::debug!("Music enabled: {}", self.music_enabled);
        Ok(self.music_enabled)
    }

    /// # Errors
    ///
    /// Returns `AudioError` if the click asset cannot be played.
    pub fn click(&mut self) -> Result<(), AudioError> {
        self.backend.play_effect(Effect::Click)
    }

    /// Pause the ambient track, play `effect` and schedule the resume
    ///
    /// # Errors
    ///
    /// Returns `AudioError` if the effect cannot be played.
    pub fn round_finished(&mut self, effect: Effect, now: Instant) -> Result<(), AudioError> {
        self.backend.stop_ambient();
        self.backend.play_effect(effect)?;
        self.pending_resume = Some(PendingResume {
            due: now + RESUME_DELAY,
            generation: self.generation,
        });
        log::debug!("Ambient resume scheduled for generation {}", self.generation);
        Ok(())
    }

    /// Run the scheduled resume if it has fallen due
    ///
    /// # Errors
    ///
    /// Returns `AudioError` if the ambient track cannot be played.
    pub fn tick(&mut self, now: Instant) -> Result<(), AudioError> {
        let Some(pending) = self.pending_resume else {
            return Ok(());
        };
        if now < pending.due {
            return Ok(());
        }

        self.pending_resume = None;
        if pending.generation != self.generation {
            log::debug!("Dropping stale ambient resume");
            return Ok(());
        }
        if self.music_enabled {
            self.backend.start_ambient()?;
        }
        Ok(())
    }
}
