//! External media resource
//!
//! Abstracts the audio element that actually decodes and plays a track. The
//! controller drives it through [`MediaResource`] and observes it through
//! [`MediaEvent`] notifications forwarded by the host.

use crate::error::Result;
use loopdeck_core::TrackContent;
use std::time::Duration;

/// A single exclusive playback slot
///
/// Only one track is loaded at a time. Loading new content implicitly
/// releases the previous one.
pub trait MediaResource: Send {
    /// Replace the loaded content
    fn load(&mut self, content: &TrackContent) -> Result<()>;

    /// Drop the loaded content, leaving the slot empty
    fn unload(&mut self);

    /// Whether content is loaded
    fn is_loaded(&self) -> bool;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// When set, the resource restarts the track itself on end
    fn set_looping(&mut self, looping: bool);

    fn is_looping(&self) -> bool;

    /// Move the playback position
    fn seek(&mut self, position: Duration) -> Result<()>;

    fn position(&self) -> Duration;

    /// Total length of the loaded content, once known
    fn duration(&self) -> Option<Duration>;

    /// Set the output level in `[0.0, 1.0]`
    fn set_volume(&mut self, volume: f32);

    fn volume(&self) -> f32;
}

/// Notifications emitted by the media resource
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    Play,
    Pause,
    /// The loaded track reached its end
    Ended,
    TimeUpdate {
        position: Duration,
    },
}

/// Media resource for testing
///
/// Records loads and keeps play/pause/loop state without producing audio.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct DummyMedia {
    pub loaded: Option<TrackContent>,
    pub loads: usize,
    pub paused: bool,
    pub looping: bool,
    pub position: Duration,
    pub duration: Option<Duration>,
    pub volume: f32,
}

#[cfg(test)]
impl DummyMedia {
    pub fn new() -> Self {
        Self {
            paused: true,
            volume: 1.0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl MediaResource for DummyMedia {
    fn load(&mut self, content: &TrackContent) -> Result<()> {
        self.loaded = Some(content.clone());
        self.loads += 1;
        self.position = Duration::ZERO;
        self.paused = true;
        Ok(())
    }

    fn unload(&mut self) {
        self.loaded = None;
        self.paused = true;
        self.position = Duration::ZERO;
    }

    fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    fn play(&mut self) -> Result<()> {
        if self.loaded.is_none() {
            return Err(crate::error::PlaybackError::media("nothing loaded"));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn is_looping(&self) -> bool {
        self.looping
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.position = position;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn volume(&self) -> f32 {
        self.volume
    }
}
