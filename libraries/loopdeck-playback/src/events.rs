//! Playlist and playback events
//!
//! The core never touches presentation state. Instead every component queues
//! events that the host drains and renders:
//! - Playlist changes (membership, order, loop flags)
//! - Track changes and state changes (play/pause/idle)
//! - Position and volume updates

use crate::types::PlaybackState;
use loopdeck_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playlist manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaylistEvent {
    /// Tracks were appended, in insertion order
    TracksAdded {
        track_ids: Vec<TrackId>,
    },

    /// A track was removed
    TrackRemoved {
        index: usize,
        track_id: TrackId,
    },

    /// Every track was removed
    Cleared,

    /// A track's loop flag changed
    LoopToggled {
        index: usize,
        looping: bool,
    },

    /// Track order changed (move up/down or relocate)
    Reordered {
        from: usize,
        to: usize,
    },
}

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed
    StateChanged {
        state: PlaybackState,
    },

    /// A different track was loaded into the media resource
    TrackChanged {
        index: usize,
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// The cursor was released (track removed, playlist cleared)
    Released,

    /// `next` was requested at the tail with playlist loop disabled
    EndOfPlaylist,

    /// Position update, forwarded from the media resource
    PositionUpdate {
        position_ms: u64,
        duration_ms: Option<u64>,
    },

    /// Volume changed
    VolumeChanged {
        level: f32,
    },
}

/// Either kind of event, in emission order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    Playlist(PlaylistEvent),
    Playback(PlaybackEvent),
}

impl From<PlaylistEvent> for SessionEvent {
    fn from(event: PlaylistEvent) -> Self {
        Self::Playlist(event)
    }
}

impl From<PlaybackEvent> for SessionEvent {
    fn from(event: PlaybackEvent) -> Self {
        Self::Playback(event)
    }
}
