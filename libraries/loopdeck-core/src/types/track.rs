/// Track domain type
use crate::types::TrackId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raw audio payload of a track
///
/// Opaque to the playlist: it is stored verbatim and handed to the media
/// resource on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackContent(Vec<u8>);

impl TrackContent {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for TrackContent {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// A persisted playlist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier, immutable
    pub id: TrackId,

    /// Display label, derived from the source file name
    pub name: String,

    /// Per-track loop flag
    pub looping: bool,

    /// Raw audio payload
    pub content: TrackContent,

    /// Zero-based position in the playlist
    pub order: u32,

    /// When the track was added to the playlist
    pub added_at: DateTime<Utc>,
}

impl Track {
    /// Create a track from an input item with a freshly generated id
    pub fn new(item: NewTrack, order: u32) -> Self {
        Self {
            id: TrackId::generate(),
            name: item.name,
            looping: false,
            content: item.content,
            order,
            added_at: Utc::now(),
        }
    }
}

/// Input item for adding a track to the playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrack {
    pub name: String,
    pub content: TrackContent,
}

impl NewTrack {
    pub fn new(name: impl Into<String>, content: impl Into<TrackContent>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read an audio file from disk, naming the track after the file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(name, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_track_starts_without_loop() {
        let track = Track::new(NewTrack::new("song.mp3", vec![1, 2, 3]), 4);
        assert_eq!(track.name, "song.mp3");
        assert_eq!(track.order, 4);
        assert!(!track.looping);
        assert_eq!(track.content.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn each_track_gets_its_own_id() {
        let a = Track::new(NewTrack::new("a", Vec::new()), 0);
        let b = Track::new(NewTrack::new("a", Vec::new()), 0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn from_file_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Morning Song.ogg");
        std::fs::write(&path, b"OggS").unwrap();

        let item = NewTrack::from_file(&path).unwrap();
        assert_eq!(item.name, "Morning Song.ogg");
        assert_eq!(item.content.as_bytes(), b"OggS");
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(NewTrack::from_file(dir.path().join("nope.mp3")).is_err());
    }
}
