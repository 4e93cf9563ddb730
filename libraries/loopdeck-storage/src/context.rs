use crate::{settings, tracks};
use async_trait::async_trait;
use loopdeck_core::{Result, SettingsStore, Track, TrackId, TrackStore};
use sqlx::SqlitePool;

/// Local store backed by a `SQLite` database file
#[derive(Clone)]
pub struct LocalStore {
    pool: SqlitePool,
}

impl LocalStore {
    /// Open (creating if missing) the database at `database_url` and apply migrations
    pub async fn open(database_url: &str) -> Result<Self> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;

        let stored = tracks::count(&pool).await?;
        tracing::info!(database_url, tracks = stored, "opened playlist store");

        Ok(Self { pool })
    }

    /// Wrap an existing, already migrated pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every connection; pending writes are flushed first
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TrackStore for LocalStore {
    async fn put(&self, track: &Track) -> Result<()> {
        tracks::put(&self.pool, track).await
    }

    async fn delete(&self, id: &TrackId) -> Result<()> {
        tracks::delete(&self.pool, id).await
    }

    async fn get_all(&self) -> Result<Vec<Track>> {
        tracks::get_all(&self.pool).await
    }
}

#[async_trait]
impl SettingsStore for LocalStore {
    async fn volume(&self) -> Result<Option<f32>> {
        settings::get_volume(&self.pool).await
    }

    async fn set_volume(&self, volume: f32) -> Result<()> {
        settings::set_volume(&self.pool, volume).await
    }
}
