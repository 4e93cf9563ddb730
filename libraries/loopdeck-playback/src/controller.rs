//! Playback controller
//!
//! Tracks which playlist entry is loaded into the media resource and
//! resolves next/previous requests against per-track and playlist loop
//! settings. The controller reads the playlist but never mutates it.

use crate::error::Result;
use crate::events::PlaybackEvent;
use crate::media::{MediaEvent, MediaResource};
use crate::types::{NowPlaying, PlaybackState};
use crate::volume::Volume;
use loopdeck_core::{Track, TrackId};

/// Playback state machine over an exclusive media resource
///
/// The cursor is `None` when idle. Playing and paused are observed from the
/// media resource rather than stored here.
pub struct PlaybackController<M: MediaResource> {
    media: M,
    current: Option<usize>,
    current_id: Option<TrackId>,
    playlist_loop: bool,
    volume: Volume,
    pending_events: Vec<PlaybackEvent>,
}

impl<M: MediaResource> PlaybackController<M> {
    /// Create an idle controller and apply `volume` to the media resource
    pub fn new(mut media: M, volume: Volume, playlist_loop: bool) -> Self {
        media.set_volume(volume.level());

        Self {
            media,
            current: None,
            current_id: None,
            playlist_loop,
            volume,
            pending_events: Vec::new(),
        }
    }

    // ===== Track selection =====

    /// Load and start the track at `index`
    ///
    /// Returns `Ok(false)` when `index` is out of range.
    pub fn play_at(&mut self, tracks: &[Track], index: usize) -> Result<bool> {
        let Some(track) = tracks.get(index) else {
            return Ok(false);
        };

        self.media.load(&track.content)?;
        self.media.set_looping(track.looping);

        let previous_track_id = self.current_id.replace(track.id.clone());
        self.current = Some(index);

        tracing::debug!(index, track_id = %track.id, looping = track.looping, "track loaded");
        self.emit(PlaybackEvent::TrackChanged {
            index,
            track_id: track.id.clone(),
            previous_track_id,
        });

        self.media.play()?;
        self.emit(PlaybackEvent::StateChanged {
            state: PlaybackState::Playing,
        });

        Ok(true)
    }

    /// Pause or resume the loaded track, or start from the top when idle
    pub fn toggle_play_pause(&mut self, tracks: &[Track]) -> Result<()> {
        if self.current.is_none() {
            if !tracks.is_empty() {
                self.play_at(tracks, 0)?;
            }
            return Ok(());
        }

        if self.media.is_paused() {
            self.media.play()?;
            self.emit(PlaybackEvent::StateChanged {
                state: PlaybackState::Playing,
            });
        } else {
            self.media.pause();
            self.emit(PlaybackEvent::StateChanged {
                state: PlaybackState::Paused,
            });
        }

        Ok(())
    }

    /// Advance to the next track
    ///
    /// At the tail the playlist wraps only when playlist loop is enabled;
    /// otherwise the cursor stays put and `EndOfPlaylist` is emitted.
    pub fn next(&mut self, tracks: &[Track]) -> Result<bool> {
        if tracks.is_empty() {
            return Ok(false);
        }

        let target = match self.current {
            None => Some(0),
            Some(index) if index + 1 < tracks.len() => Some(index + 1),
            Some(_) if self.playlist_loop => Some(0),
            Some(_) => None,
        };

        match target {
            Some(index) => self.play_at(tracks, index),
            None => {
                tracing::debug!("end of playlist reached");
                self.emit(PlaybackEvent::EndOfPlaylist);
                Ok(false)
            }
        }
    }

    /// Go back one track; no wrap to the end
    pub fn previous(&mut self, tracks: &[Track]) -> Result<bool> {
        match self.current {
            Some(index) if index > 0 => self.play_at(tracks, index - 1),
            _ => Ok(false),
        }
    }

    /// Drop the loaded track and return to idle
    pub fn release(&mut self) {
        if self.current.is_none() && !self.media.is_loaded() {
            return;
        }

        self.media.pause();
        self.media.unload();
        self.current = None;
        self.current_id = None;

        tracing::debug!("playback released");
        self.emit(PlaybackEvent::Released);
        self.emit(PlaybackEvent::StateChanged {
            state: PlaybackState::Idle,
        });
    }

    /// Re-locate the loaded track after the playlist changed
    ///
    /// The cursor follows the loaded track by id. If that track is no longer
    /// in `tracks`, playback is released.
    pub fn reconcile(&mut self, tracks: &[Track]) {
        let Some(id) = &self.current_id else {
            return;
        };

        match tracks.iter().position(|t| &t.id == id) {
            Some(index) => {
                if self.current != Some(index) {
                    tracing::debug!(from = ?self.current, to = index, "cursor followed loaded track");
                    self.current = Some(index);
                }
            }
            None => self.release(),
        }
    }

    /// Copy the loaded track's loop flag onto the media resource
    pub fn sync_track_loop(&mut self, tracks: &[Track]) {
        if let Some(track) = self.current.and_then(|index| tracks.get(index)) {
            self.media.set_looping(track.looping);
        }
    }

    // ===== Media notifications =====

    /// React to a notification from the media resource
    pub fn handle_media_event(&mut self, tracks: &[Track], event: MediaEvent) -> Result<()> {
        match event {
            MediaEvent::Play => self.emit(PlaybackEvent::StateChanged {
                state: PlaybackState::Playing,
            }),
            MediaEvent::Pause => self.emit(PlaybackEvent::StateChanged {
                state: PlaybackState::Paused,
            }),
            MediaEvent::Ended => {
                let Some(index) = self.current else {
                    return Ok(());
                };

                // A looping track is restarted by the media resource itself
                let looping =
                    self.media.is_looping() || tracks.get(index).is_some_and(|t| t.looping);
                if !looping {
                    self.next(tracks)?;
                }
            }
            MediaEvent::TimeUpdate { position } => {
                let duration_ms = self.media.duration().map(|d| d.as_millis() as u64);
                self.emit(PlaybackEvent::PositionUpdate {
                    position_ms: position.as_millis() as u64,
                    duration_ms,
                });
            }
        }

        Ok(())
    }

    // ===== Position =====

    /// Seek to a fraction of the loaded track's duration
    ///
    /// Returns `Ok(false)` when nothing is loaded or the duration is not yet known.
    pub fn seek_to_percent(&mut self, percent: f32) -> Result<bool> {
        if self.current.is_none() {
            return Ok(false);
        }

        let Some(duration) = self.media.duration() else {
            return Ok(false);
        };

        let percent = if percent.is_finite() {
            percent.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.media.seek(duration.mul_f32(percent))?;

        Ok(true)
    }

    /// Position as a fraction of duration, in `[0.0, 1.0]`
    pub fn progress(&self) -> Option<f32> {
        self.current?;

        let duration = self.media.duration()?;
        if duration.is_zero() {
            return Some(0.0);
        }

        let ratio = self.media.position().as_secs_f32() / duration.as_secs_f32();
        Some(ratio.clamp(0.0, 1.0))
    }

    // ===== Settings =====

    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Apply a new volume to the media resource
    pub fn set_volume(&mut self, volume: impl Into<Volume>) -> Volume {
        let volume = volume.into();
        self.volume = volume;
        self.media.set_volume(volume.level());
        tracing::debug!(level = volume.level(), muted = volume.is_silent(), "volume changed");

        self.emit(PlaybackEvent::VolumeChanged {
            level: volume.level(),
        });
        volume
    }

    pub fn playlist_loop(&self) -> bool {
        self.playlist_loop
    }

    pub fn set_playlist_loop(&mut self, enabled: bool) {
        self.playlist_loop = enabled;
    }

    /// Flip playlist loop, returning the new setting
    pub fn toggle_playlist_loop(&mut self) -> bool {
        self.playlist_loop = !self.playlist_loop;
        tracing::debug!(enabled = self.playlist_loop, "playlist loop toggled");
        self.playlist_loop
    }

    // ===== Queries =====

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track_id(&self) -> Option<&TrackId> {
        self.current_id.as_ref()
    }

    pub fn state(&self) -> PlaybackState {
        match self.current {
            None => PlaybackState::Idle,
            Some(_) if self.media.is_paused() => PlaybackState::Paused,
            Some(_) => PlaybackState::Playing,
        }
    }

    /// Label data for the loaded track
    pub fn now_playing(&self, tracks: &[Track]) -> Option<NowPlaying> {
        let index = self.current?;
        let track = tracks.get(index)?;

        Some(NowPlaying {
            position: index + 1,
            total: tracks.len(),
            name: track.name.clone(),
            looping: track.looping,
        })
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    // ===== Events =====

    /// Drain all pending events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }
}
