//! Player session
//!
//! Wires one playlist, one playback controller and the settings store
//! together and applies the rules that cross between them: removing or
//! reordering tracks moves the playback cursor, clearing releases it,
//! loop toggles reach the live media resource, and volume changes are saved.

use crate::config::PlayerConfig;
use crate::controller::PlaybackController;
use crate::error::Result;
use crate::events::SessionEvent;
use crate::media::{MediaEvent, MediaResource};
use crate::playlist::PlaylistManager;
use crate::types::{NowPlaying, PlaybackState};
use crate::volume::Volume;
use loopdeck_core::{NewTrack, SettingsStore, Track, TrackId, TrackStore};
use std::sync::Arc;

/// A playlist with playback attached
///
/// Every mutating operation takes `&mut self`, so mutations through one
/// session never interleave their store writes.
pub struct PlayerSession<M: MediaResource> {
    playlist: PlaylistManager,
    controller: PlaybackController<M>,
    settings: Arc<dyn SettingsStore>,
    pending_events: Vec<SessionEvent>,
}

impl<M: MediaResource> PlayerSession<M> {
    /// Restore the playlist and saved volume and attach `media`
    pub async fn open(
        config: &PlayerConfig,
        tracks: Arc<dyn TrackStore>,
        settings: Arc<dyn SettingsStore>,
        media: M,
    ) -> Result<Self> {
        let playlist = PlaylistManager::load(tracks, config.persistence.policy).await?;

        let volume = match settings.volume().await? {
            Some(level) => Volume::new(level),
            None => Volume::new(config.playback.default_volume),
        };

        let controller = PlaybackController::new(media, volume, config.playback.playlist_loop);

        tracing::info!(
            tracks = playlist.len(),
            volume = volume.level(),
            playlist_loop = config.playback.playlist_loop,
            "session opened"
        );

        Ok(Self {
            playlist,
            controller,
            settings,
            pending_events: Vec::new(),
        })
    }

    // ===== Playlist =====

    /// Append tracks, returning their new ids
    pub async fn add(&mut self, items: impl IntoIterator<Item = NewTrack>) -> Result<Vec<TrackId>> {
        let result = self.playlist.add(items).await;
        self.collect_events();
        Ok(result?)
    }

    /// Remove the track at `index`; releases playback if it was loaded
    pub async fn remove(&mut self, index: usize) -> Result<Option<Track>> {
        let result = self.playlist.remove(index).await;
        self.controller.reconcile(self.playlist.tracks());
        self.collect_events();
        Ok(result?)
    }

    /// Remove every track and release playback
    pub async fn clear(&mut self) -> Result<()> {
        let result = self.playlist.clear().await;
        if result.is_ok() {
            self.controller.release();
        }
        self.collect_events();
        Ok(result?)
    }

    /// Flip the per-track loop flag, updating the live media loop if loaded
    pub async fn toggle_loop(&mut self, index: usize) -> Result<Option<bool>> {
        let result = self.playlist.toggle_loop(index).await;
        self.controller.sync_track_loop(self.playlist.tracks());
        self.collect_events();
        Ok(result?)
    }

    pub async fn move_up(&mut self, index: usize) -> Result<bool> {
        let result = self.playlist.move_up(index).await;
        self.after_reorder();
        Ok(result?)
    }

    pub async fn move_down(&mut self, index: usize) -> Result<bool> {
        let result = self.playlist.move_down(index).await;
        self.after_reorder();
        Ok(result?)
    }

    /// Move the track at `src` to `dest` (drag and drop)
    pub async fn relocate(&mut self, src: usize, dest: usize) -> Result<bool> {
        let result = self.playlist.relocate(src, dest).await;
        self.after_reorder();
        Ok(result?)
    }

    // ===== Playback =====

    pub fn play_at(&mut self, index: usize) -> Result<bool> {
        let result = self.controller.play_at(self.playlist.tracks(), index);
        self.collect_events();
        result
    }

    pub fn toggle_play_pause(&mut self) -> Result<()> {
        let result = self.controller.toggle_play_pause(self.playlist.tracks());
        self.collect_events();
        result
    }

    pub fn next(&mut self) -> Result<bool> {
        let result = self.controller.next(self.playlist.tracks());
        self.collect_events();
        result
    }

    pub fn previous(&mut self) -> Result<bool> {
        let result = self.controller.previous(self.playlist.tracks());
        self.collect_events();
        result
    }

    /// Forward a notification from the media resource
    pub fn handle_media_event(&mut self, event: MediaEvent) -> Result<()> {
        let result = self
            .controller
            .handle_media_event(self.playlist.tracks(), event);
        self.collect_events();
        result
    }

    pub fn seek_to_percent(&mut self, percent: f32) -> Result<bool> {
        self.controller.seek_to_percent(percent)
    }

    /// Apply and save a new volume
    ///
    /// The level is applied to the media resource before it is saved, so a
    /// failed write still changes what the user hears.
    pub async fn set_volume(&mut self, level: f32) -> Result<Volume> {
        let volume = self.controller.set_volume(level);
        self.collect_events();
        self.settings.set_volume(volume.level()).await?;
        Ok(volume)
    }

    pub fn set_playlist_loop(&mut self, enabled: bool) {
        self.controller.set_playlist_loop(enabled);
    }

    pub fn toggle_playlist_loop(&mut self) -> bool {
        self.controller.toggle_playlist_loop()
    }

    // ===== Queries =====

    pub fn tracks(&self) -> &[Track] {
        self.playlist.tracks()
    }

    pub fn playlist(&self) -> &PlaylistManager {
        &self.playlist
    }

    pub fn controller(&self) -> &PlaybackController<M> {
        &self.controller
    }

    pub fn current_index(&self) -> Option<usize> {
        self.controller.current_index()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.controller
            .current_index()
            .and_then(|index| self.playlist.get(index))
    }

    pub fn state(&self) -> PlaybackState {
        self.controller.state()
    }

    pub fn now_playing(&self) -> Option<NowPlaying> {
        self.controller.now_playing(self.playlist.tracks())
    }

    pub fn progress(&self) -> Option<f32> {
        self.controller.progress()
    }

    pub fn volume(&self) -> Volume {
        self.controller.volume()
    }

    pub fn playlist_loop(&self) -> bool {
        self.controller.playlist_loop()
    }

    pub fn media(&self) -> &M {
        self.controller.media()
    }

    pub fn media_mut(&mut self) -> &mut M {
        self.controller.media_mut()
    }

    // ===== Events =====

    /// Drain playlist and playback events in emission order
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.collect_events();
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internal =====

    fn after_reorder(&mut self) {
        self.controller.reconcile(self.playlist.tracks());
        self.collect_events();
    }

    /// Playlist events precede the playback events they caused
    fn collect_events(&mut self) {
        self.pending_events
            .extend(self.playlist.drain_events().into_iter().map(SessionEvent::from));
        self.pending_events
            .extend(self.controller.drain_events().into_iter().map(SessionEvent::from));
    }
}
