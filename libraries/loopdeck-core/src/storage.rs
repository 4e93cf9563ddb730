//! Storage traits for the playlist
//!
//! Both traits are asynchronous and object safe so a playlist can hold an
//! `Arc<dyn TrackStore>` regardless of the backend (SQLite, in-memory).

use crate::error::Result;
use crate::types::{Track, TrackId};
use async_trait::async_trait;

/// Durable key-value storage of track records keyed by `TrackId`
///
/// The store is the ground truth the in-memory playlist is restored from at
/// startup. Records come back from `get_all` in no particular order; callers
/// sort by `Track::order`.
#[async_trait]
pub trait TrackStore: Send + Sync {
    /// Insert or replace the record with `track.id`
    async fn put(&self, track: &Track) -> Result<()>;

    /// Remove the record with `id`; a missing record is not an error
    async fn delete(&self, id: &TrackId) -> Result<()>;

    /// Read every record
    async fn get_all(&self) -> Result<Vec<Track>>;
}

/// Minimal durable scalar settings
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Saved playback volume in `[0.0, 1.0]`, if one was ever written
    async fn volume(&self) -> Result<Option<f32>>;

    /// Persist the playback volume
    async fn set_volume(&self, volume: f32) -> Result<()>;
}
