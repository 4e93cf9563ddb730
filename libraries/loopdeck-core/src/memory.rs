//! In-memory store
//!
//! Non-durable implementation of [`TrackStore`] and [`SettingsStore`] for
//! hosts without a disk and for tests. Every operation is appended to an
//! operation log, and the store can be switched into a failing mode to
//! exercise storage error paths.

use crate::error::{Result, StorageError};
use crate::storage::{SettingsStore, TrackStore};
use crate::types::{Track, TrackId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// A store operation as recorded by [`MemoryStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Put(TrackId),
    Delete(TrackId),
    GetAll,
    SetVolume,
}

#[derive(Debug, Default)]
struct Inner {
    tracks: HashMap<TrackId, Track>,
    volume: Option<f32>,
    ops: Vec<StoreOp>,
    failing: bool,
}

/// In-memory track and settings store
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records
    pub fn with_tracks(tracks: impl IntoIterator<Item = Track>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            for track in tracks {
                inner.tracks.insert(track.id.clone(), track);
            }
        }
        store
    }

    /// Make every subsequent operation fail with `StorageError::Query`
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    /// Operations performed so far, oldest first
    pub fn ops(&self) -> Vec<StoreOp> {
        self.lock().ops.clone()
    }

    /// Forget the recorded operations
    pub fn clear_ops(&self) {
        self.lock().ops.clear();
    }

    /// Current record for `id`
    pub fn get(&self, id: &TrackId) -> Option<Track> {
        self.lock().tracks.get(id).cloned()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.lock().tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().tracks.is_empty()
    }

    /// Stored records sorted by `order`
    pub fn snapshot(&self) -> Vec<Track> {
        let mut tracks: Vec<Track> = self.lock().tracks.values().cloned().collect();
        tracks.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        tracks
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means a test panicked mid-operation; the map is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn begin(&self, op: StoreOp) -> Result<MutexGuard<'_, Inner>> {
        let mut inner = self.lock();
        if inner.failing {
            return Err(StorageError::query(format!("memory store rejected {:?}", op)));
        }
        inner.ops.push(op);
        Ok(inner)
    }
}

#[async_trait]
impl TrackStore for MemoryStore {
    async fn put(&self, track: &Track) -> Result<()> {
        let mut inner = self.begin(StoreOp::Put(track.id.clone()))?;
        inner.tracks.insert(track.id.clone(), track.clone());
        Ok(())
    }

    async fn delete(&self, id: &TrackId) -> Result<()> {
        let mut inner = self.begin(StoreOp::Delete(id.clone()))?;
        inner.tracks.remove(id);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Track>> {
        let inner = self.begin(StoreOp::GetAll)?;
        Ok(inner.tracks.values().cloned().collect())
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn volume(&self) -> Result<Option<f32>> {
        let inner = self.lock();
        if inner.failing {
            return Err(StorageError::query("memory store rejected volume read"));
        }
        Ok(inner.volume)
    }

    async fn set_volume(&self, volume: f32) -> Result<()> {
        let mut inner = self.begin(StoreOp::SetVolume)?;
        inner.volume = Some(volume.clamp(0.0, 1.0));
        Ok(())
    }
}
