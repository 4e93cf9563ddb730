//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::fmt;

/// Observed playback state
///
/// Playing and paused are owned by the media resource; the controller only
/// knows whether a track is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track selected
    Idle,

    /// A track is loaded and the media resource is playing
    Playing,

    /// A track is loaded and the media resource is paused
    Paused,
}

/// Which records are re-persisted after a renumber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistPolicy {
    /// Re-persist every track, even those whose position did not change
    #[default]
    Full,

    /// Re-persist only tracks whose `order` changed
    ChangedOnly,
}

/// What the host shows as "now playing"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlaying {
    /// One-based position in the playlist
    pub position: usize,
    pub total: usize,
    pub name: String,
    pub looping: bool,
}

impl fmt::Display for NowPlaying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} - {}", self.position, self.total, self.name)?;
        if self.looping {
            write!(f, " (song loop)")?;
        }
        Ok(())
    }
}
