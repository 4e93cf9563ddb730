//! Player configuration

use crate::error::{PlaybackError, Result};
use crate::types::PersistPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub playback: PlaybackSettings,

    #[serde(default)]
    pub persistence: PersistenceSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaybackSettings {
    /// Wrap to the first track after the last
    #[serde(default)]
    pub playlist_loop: bool,

    /// Used until a volume has been saved
    #[serde(default = "default_volume")]
    pub default_volume: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PersistenceSettings {
    #[serde(default)]
    pub policy: PersistPolicy,
}

impl PlayerConfig {
    /// Load configuration from an optional TOML file and the environment
    ///
    /// Environment variables use the `LOOPDECK_` prefix and `__` between
    /// sections, e.g. `LOOPDECK_PLAYBACK__PLAYLIST_LOOP=true`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if path.exists() {
                settings = settings.add_source(config::File::from(path));
            } else {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("LOOPDECK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text, without the environment
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.trim().is_empty() {
            return Err(PlaybackError::Config(
                "storage.database_url must not be empty".to_string(),
            ));
        }

        let volume = self.playback.default_volume;
        if !volume.is_finite() || !(0.0..=1.0).contains(&volume) {
            return Err(PlaybackError::Config(format!(
                "playback.default_volume must be within [0, 1], got {volume}"
            )));
        }

        Ok(())
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            playlist_loop: false,
            default_volume: default_volume(),
        }
    }
}

// Default values
fn default_database_url() -> String {
    "sqlite://./data/loopdeck.db".to_string()
}

fn default_volume() -> f32 {
    1.0
}
