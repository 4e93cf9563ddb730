//! Loopdeck Playback
//!
//! Playlist management and playback sequencing for Loopdeck.
//!
//! This crate provides:
//! - An ordered, persisted playlist (add, remove, clear, per-track loop)
//! - Reordering by adjacent moves and drag-style relocation
//! - A playback controller with next/previous and playlist loop
//! - Seek by percentage, progress and "now playing" label data
//! - Volume control, saved across sessions
//!
//! # Architecture
//!
//! `loopdeck-playback` depends only on the storage traits from
//! `loopdeck-core`; the SQLite backend lives in `loopdeck-storage`. Audio
//! decoding and output are provided by the host through [`MediaResource`],
//! and the host renders by draining events rather than being called back.
//!
//! # Example
//!
//! ```rust
//! use loopdeck_core::{MemoryStore, NewTrack};
//! use loopdeck_playback::{PersistPolicy, PlaylistManager};
//! use std::sync::Arc;
//!
//! # async fn example() -> loopdeck_core::Result<()> {
//! let store = Arc::new(MemoryStore::new());
//! let mut playlist = PlaylistManager::load(store, PersistPolicy::Full).await?;
//!
//! playlist
//!     .add(vec![
//!         NewTrack::new("intro.mp3", vec![0u8; 16]),
//!         NewTrack::new("outro.mp3", vec![0u8; 16]),
//!     ])
//!     .await?;
//!
//! playlist.move_down(0).await?;
//! assert_eq!(playlist.get(0).map(|t| t.name.as_str()), Some("outro.mp3"));
//!
//! // Render from events
//! for event in playlist.drain_events() {
//!     println!("{event:?}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod media;
pub mod playlist;
pub mod reorder;
pub mod session;
pub mod types;
pub mod volume;

pub use config::PlayerConfig;
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::{PlaybackEvent, PlaylistEvent, SessionEvent};
pub use media::{MediaEvent, MediaResource};
pub use playlist::PlaylistManager;
pub use session::PlayerSession;
pub use types::{NowPlaying, PersistPolicy, PlaybackState};
pub use volume::Volume;
