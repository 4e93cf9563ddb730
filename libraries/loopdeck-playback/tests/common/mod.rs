//! Shared helpers for playback integration tests

#![allow(dead_code)]

use loopdeck_core::{NewTrack, TrackContent};
use loopdeck_playback::{MediaResource, PlaybackError, PlayerConfig, PlayerSession, Result};
use loopdeck_storage::LocalStore;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Install a test subscriber once; `RUST_LOG` controls the level
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Media resource that keeps state without producing audio
#[derive(Debug)]
pub struct FakeMedia {
    pub loaded: Option<TrackContent>,
    pub loads: usize,
    pub paused: bool,
    pub looping: bool,
    pub position: Duration,
    pub duration: Option<Duration>,
    pub volume: f32,
}

impl FakeMedia {
    pub fn new() -> Self {
        Self {
            loaded: None,
            loads: 0,
            paused: true,
            looping: false,
            position: Duration::ZERO,
            duration: None,
            volume: 1.0,
        }
    }

    pub fn loaded_bytes(&self) -> Option<&[u8]> {
        self.loaded.as_ref().map(|c| c.as_bytes())
    }
}

impl MediaResource for FakeMedia {
    fn load(&mut self, content: &TrackContent) -> Result<()> {
        if content.is_empty() {
            return Err(PlaybackError::media("empty payload"));
        }
        self.loaded = Some(content.clone());
        self.loads += 1;
        self.position = Duration::ZERO;
        self.paused = true;
        Ok(())
    }

    fn unload(&mut self) {
        self.loaded = None;
        self.paused = true;
    }

    fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    fn play(&mut self) -> Result<()> {
        if self.loaded.is_none() {
            return Err(PlaybackError::media("nothing loaded"));
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

/// Input item whose payload is its own name
pub fn item(name: &str) -> NewTrack {
    NewTrack::new(name, name.as_bytes().to_vec())
}

pub fn items(names: &[&str]) -> Vec<NewTrack> {
    names.iter().map(|name| item(name)).collect()
}

/// A SQLite file in a temp dir that can be closed and reopened
pub struct TestDb {
    pub config: PlayerConfig,
    _temp_dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = PlayerConfig::default();
        config.storage.database_url =
            format!("sqlite://{}", temp_dir.path().join("loopdeck.db").display());

        Self {
            config,
            _temp_dir: temp_dir,
        }
    }

    pub async fn store(&self) -> Arc<LocalStore> {
        Arc::new(
            LocalStore::open(&self.config.storage.database_url)
                .await
                .expect("Failed to open store"),
        )
    }

    /// Open a session over a fresh connection to the database file
    pub async fn session(&self) -> (PlayerSession<FakeMedia>, Arc<LocalStore>) {
        let store = self.store().await;
        let session = PlayerSession::open(&self.config, store.clone(), store.clone(), FakeMedia::new())
            .await
            .expect("Failed to open session");
        (session, store)
    }
}
