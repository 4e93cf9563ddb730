//! Scalar settings
//!
//! Settings are stored as key-value pairs with JSON-serialized values. The
//! playlist only needs the playback volume, but the table is keyed so more
//! settings can be added without a migration.
//!
//! # Example
//!
//! ```rust,no_run
//! use loopdeck_storage::settings;
//! # async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//! settings::set_setting(pool, settings::SETTING_VOLUME, &serde_json::json!(0.5)).await?;
//!
//! let volume = settings::get_setting(pool, settings::SETTING_VOLUME).await?;
//! # Ok(())
//! # }
//! ```

use loopdeck_core::StorageError;
use sqlx::{Row, SqlitePool};

type Result<T> = std::result::Result<T, StorageError>;

/// Playback volume (0.0 - 1.0)
pub const SETTING_VOLUME: &str = "audio.volume";

/// Get a single setting value
///
/// Returns `Ok(None)` if the key was never written
pub async fn get_setting(pool: &SqlitePool, key: &str) -> Result<Option<serde_json::Value>> {
    let row = sqlx::query("SELECT value FROM settings WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => {
            let raw: String = row.try_get("value")?;
            Ok(Some(serde_json::from_str(&raw)?))
        }
        None => Ok(None),
    }
}

/// Set a setting value, replacing any previous one
pub async fn set_setting(pool: &SqlitePool, key: &str, value: &serde_json::Value) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO settings (key, value, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(raw)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Saved playback volume, clamped to `[0.0, 1.0]`
///
/// A stored value that is not a number is treated as unset.
pub async fn get_volume(pool: &SqlitePool) -> Result<Option<f32>> {
    let value = get_setting(pool, SETTING_VOLUME).await?;

    Ok(value.and_then(|v| match v.as_f64() {
        Some(level) if level.is_finite() => Some((level as f32).clamp(0.0, 1.0)),
        _ => {
            tracing::warn!(value = %v, "ignoring non-numeric stored volume");
            None
        }
    }))
}

/// Persist the playback volume, clamped to `[0.0, 1.0]`
pub async fn set_volume(pool: &SqlitePool, volume: f32) -> Result<()> {
    let level = if volume.is_finite() { volume.clamp(0.0, 1.0) } else { 1.0 };
    set_setting(pool, SETTING_VOLUME, &serde_json::json!(level)).await
}
