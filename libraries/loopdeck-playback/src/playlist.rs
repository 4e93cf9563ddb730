//! Playlist manager
//!
//! Owns the authoritative, ordered in-memory list of tracks and keeps the
//! store in sync with it. After every successful mutation each track's
//! `order` equals its position.

use crate::events::PlaylistEvent;
use crate::reorder;
use crate::types::PersistPolicy;
use loopdeck_core::{NewTrack, Result, Track, TrackId, TrackStore};
use std::sync::Arc;

/// Ordered, persisted playlist
///
/// Every mutation updates memory first and then awaits its store writes one
/// by one, in list order. A failed write is returned to the caller and the
/// in-memory change is kept; the store catches up on the next successful
/// write of the same record, or the persisted state wins on the next load.
pub struct PlaylistManager {
    tracks: Vec<Track>,
    store: Arc<dyn TrackStore>,
    policy: PersistPolicy,
    pending_events: Vec<PlaylistEvent>,
}

impl PlaylistManager {
    /// Create an empty playlist over `store` without reading it
    pub fn new(store: Arc<dyn TrackStore>, policy: PersistPolicy) -> Self {
        Self {
            tracks: Vec::new(),
            store,
            policy,
            pending_events: Vec::new(),
        }
    }

    /// Restore the playlist from `store`
    ///
    /// Records are sorted by `order` (ties broken by id). Gaps or duplicates
    /// left by an interrupted renumber are repaired and the repaired records
    /// written back.
    pub async fn load(store: Arc<dyn TrackStore>, policy: PersistPolicy) -> Result<Self> {
        let mut tracks = store.get_all().await?;
        tracks.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));

        let repaired = reorder::renumber(&mut tracks);
        if !repaired.is_empty() {
            tracing::warn!(
                repaired = repaired.len(),
                "persisted track order was not dense, renumbering"
            );
            for &index in &repaired {
                store.put(&tracks[index]).await?;
            }
        }

        tracing::info!(tracks = tracks.len(), "playlist loaded");

        Ok(Self {
            tracks,
            store,
            policy,
            pending_events: Vec::new(),
        })
    }

    // ===== Queries =====

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Current position of the track with `id`
    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    pub fn policy(&self) -> PersistPolicy {
        self.policy
    }

    // ===== Mutations =====

    /// Append tracks in input order, persisting each before creating the next
    ///
    /// Returns the ids minted for the new tracks.
    pub async fn add(&mut self, items: impl IntoIterator<Item = NewTrack>) -> Result<Vec<TrackId>> {
        let mut added = Vec::new();

        for item in items {
            let track = Track::new(item, self.tracks.len() as u32);
            let id = track.id.clone();
            self.tracks.push(track);
            added.push(id);

            let written = match self.tracks.last() {
                Some(track) => self.store.put(track).await,
                None => Ok(()),
            };

            if let Err(e) = written {
                tracing::warn!(error = %e, "failed to persist added track");
                self.emit(PlaylistEvent::TracksAdded { track_ids: added });
                return Err(e);
            }
        }

        if !added.is_empty() {
            tracing::debug!(count = added.len(), total = self.tracks.len(), "tracks added");
            self.emit(PlaylistEvent::TracksAdded {
                track_ids: added.clone(),
            });
        }

        Ok(added)
    }

    /// Remove the track at `index` and renumber the rest
    ///
    /// Returns `Ok(None)` without touching the store when `index` is out of range.
    pub async fn remove(&mut self, index: usize) -> Result<Option<Track>> {
        let Some(track) = self.tracks.get(index) else {
            return Ok(None);
        };

        self.store.delete(&track.id).await?;

        let removed = self.tracks.remove(index);
        tracing::debug!(index, track_id = %removed.id, "track removed");
        self.emit(PlaylistEvent::TrackRemoved {
            index,
            track_id: removed.id.clone(),
        });

        self.persist_order().await?;

        Ok(Some(removed))
    }

    /// Delete every record, then empty the list
    pub async fn clear(&mut self) -> Result<()> {
        for track in &self.tracks {
            self.store.delete(&track.id).await?;
        }

        let count = self.tracks.len();
        self.tracks.clear();
        tracing::debug!(count, "playlist cleared");
        self.emit(PlaylistEvent::Cleared);

        Ok(())
    }

    /// Flip the loop flag of the track at `index`
    ///
    /// Returns the new flag, or `Ok(None)` when `index` is out of range.
    pub async fn toggle_loop(&mut self, index: usize) -> Result<Option<bool>> {
        let Some(track) = self.tracks.get_mut(index) else {
            return Ok(None);
        };

        track.looping = !track.looping;
        let looping = track.looping;
        tracing::debug!(index, looping, "track loop toggled");
        self.emit(PlaylistEvent::LoopToggled { index, looping });

        self.store.put(&self.tracks[index]).await?;

        Ok(Some(looping))
    }

    /// Swap the track at `index` with the one before it
    pub async fn move_up(&mut self, index: usize) -> Result<bool> {
        if !reorder::move_up(&mut self.tracks, index) {
            return Ok(false);
        }

        self.reordered(index, index - 1).await
    }

    /// Swap the track at `index` with the one after it
    pub async fn move_down(&mut self, index: usize) -> Result<bool> {
        if !reorder::move_down(&mut self.tracks, index) {
            return Ok(false);
        }

        self.reordered(index, index + 1).await
    }

    /// Move the track at `src` to `dest` (drag and drop)
    pub async fn relocate(&mut self, src: usize, dest: usize) -> Result<bool> {
        if !reorder::relocate(&mut self.tracks, src, dest) {
            return Ok(false);
        }

        self.reordered(src, dest).await
    }

    // ===== Events =====

    /// Drain all pending events
    pub fn drain_events(&mut self) -> Vec<PlaylistEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    async fn reordered(&mut self, from: usize, to: usize) -> Result<bool> {
        tracing::debug!(from, to, "track moved");
        self.emit(PlaylistEvent::Reordered { from, to });
        self.persist_order().await?;
        Ok(true)
    }

    /// Renumber and write back according to the persist policy
    async fn persist_order(&mut self) -> Result<()> {
        let changed = reorder::renumber(&mut self.tracks);

        let targets: Vec<usize> = match self.policy {
            PersistPolicy::Full => (0..self.tracks.len()).collect(),
            PersistPolicy::ChangedOnly => changed,
        };

        for index in targets {
            if let Err(e) = self.store.put(&self.tracks[index]).await {
                tracing::warn!(index, error = %e, "failed to persist track order");
                return Err(e);
            }
        }

        Ok(())
    }

    fn emit(&mut self, event: PlaylistEvent) {
        self.pending_events.push(event);
    }
}
