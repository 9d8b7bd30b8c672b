//! Sound effect dispatch
//!
//! The simulation only names effects. Playback goes through an
//! [`AudioBackend`]; the [`AudioManager`] in front of it applies volume and
//! mute and swallows every backend failure, so a broken audio device can
//! never stall or fail a tick.

use std::fmt;

use thiserror::Error;

use crate::consts::{DEFAULT_MASTER_VOLUME, DEFAULT_SFX_VOLUME};
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Player fired
    Shoot,
    /// Enemy destroyed
    Explosion,
    /// Wave cleared
    LevelUp,
    /// Background drone at session start
    AmbientLoopStart,
}

impl SoundEffect {
    /// Stable effect name handed to backends
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Shoot => "shoot",
            SoundEffect::Explosion => "explosion",
            SoundEffect::LevelUp => "level-up",
            SoundEffect::AmbientLoopStart => "ambient-loop-start",
        }
    }

    /// Effect triggered by a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Shot { .. } => Some(SoundEffect::Shoot),
            GameEvent::EnemyDestroyed { .. } => Some(SoundEffect::Explosion),
            GameEvent::WaveCleared { .. } => Some(SoundEffect::LevelUp),
            GameEvent::EnemyRecycled { .. } => None,
        }
    }
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output unavailable: {0}")]
    Unavailable(String),
    #[error("failed to play {effect}: {reason}")]
    Playback { effect: SoundEffect, reason: String },
}

/// A device that can play named effects
pub trait AudioBackend {
    /// Acquire or resume the output device
    fn resume(&mut self) -> Result<(), AudioError>;

    /// Start an effect at the given volume (0.0 - 1.0) without waiting for it
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError>;
}

/// Backend that only logs; used by the headless runner
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn resume(&mut self) -> Result<(), AudioError> {
        log::debug!("Audio resumed");
        Ok(())
    }

    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
        log::debug!("Sound {} at volume {:.2}", effect, volume);
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    failures: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(LogBackend))
    }
}

impl fmt::Debug for AudioManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioManager")
            .field("enabled", &self.backend.is_some())
            .field("master_volume", &self.master_volume)
            .field("sfx_volume", &self.sfx_volume)
            .field("muted", &self.muted)
            .field("failures", &self.failures)
            .finish()
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend: Some(backend),
            master_volume: DEFAULT_MASTER_VOLUME,
            sfx_volume: DEFAULT_SFX_VOLUME,
            muted: false,
            failures: 0,
        }
    }

    /// Manager with no output at all
    pub fn disabled() -> Self {
        log::warn!("No audio backend - audio disabled");
        Self {
            backend: None,
            master_volume: 0.0,
            sfx_volume: 0.0,
            muted: true,
            failures: 0,
        }
    }

    /// Resume the output device. Failure is logged and otherwise ignored.
    pub fn resume(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            if let Err(err) = backend.resume() {
                self.failures += 1;
                log::warn!("Audio resume failed, continuing without sound: {err}");
            }
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Backend errors swallowed so far
    pub fn failures(&self) -> u64 {
        self.failures
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect (fire and forget)
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        if let Err(err) = backend.play(effect, vol) {
            self.failures += 1;
            log::warn!("Dropped sound effect: {err}");
        }
    }

    /// Play the effects for a batch of tick events, in order
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}
