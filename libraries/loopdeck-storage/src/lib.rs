//! Loopdeck Storage
//!
//! Durable `SQLite` persistence for the Loopdeck playlist.
//!
//! This crate provides the on-disk implementation of the
//! [`TrackStore`](loopdeck_core::TrackStore) and
//! [`SettingsStore`](loopdeck_core::SettingsStore) traits. The database file
//! survives process restarts and is the ground truth the in-memory playlist
//! is restored from.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: `tracks` and `settings` each own their queries
//! - **Embedded Migrations**: the schema ships inside the binary
//! - **Blob Payloads**: audio content is stored inline as a BLOB column
//!
//! # Example
//!
//! ```rust,no_run
//! use loopdeck_storage::LocalStore;
//! use loopdeck_core::TrackStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = LocalStore::open("sqlite://loopdeck.db").await?;
//!
//! let tracks = store.get_all().await?;
//! println!("{} tracks", tracks.len());
//!
//! store.close().await;
//! # Ok(())
//! # }
//! ```

mod context;

// Vertical slices
pub mod settings;
pub mod tracks;

pub use context::LocalStore;
pub use loopdeck_core::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Called by [`LocalStore::open`]; exposed for hosts that manage their own pool.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://loopdeck.db>`)
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "creating sqlite pool");

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::connection(format!("{database_url}: {e}")))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::connection(e.to_string()))?;

    tracing::debug!("sqlite pool ready");

    Ok(pool)
}
