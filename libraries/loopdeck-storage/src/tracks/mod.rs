//! Track records
//!
//! One row per playlist entry. `sort_order` mirrors `Track::order`; rows are
//! returned unordered and the playlist sorts them.

use chrono::DateTime;
use loopdeck_core::{StorageError, Track, TrackContent, TrackId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

type Result<T> = std::result::Result<T, StorageError>;

/// Insert or replace a track record
pub async fn put(pool: &SqlitePool, track: &Track) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO tracks (id, name, looping, content, sort_order, added_at)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            looping = excluded.looping,
            content = excluded.content,
            sort_order = excluded.sort_order
        "#,
    )
    .bind(&track.id)
    .bind(&track.name)
    .bind(track.looping)
    .bind(track.content.as_bytes())
    .bind(i64::from(track.order))
    .bind(track.added_at.timestamp_millis())
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a track record; deleting a missing id is a no-op
pub async fn delete(pool: &SqlitePool, id: &TrackId) -> Result<()> {
    let result = sqlx::query("DELETE FROM tracks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        tracing::debug!(track_id = %id, "delete of missing track ignored");
    }

    Ok(())
}

/// Read every track record
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Track>> {
    let rows = sqlx::query(
        "SELECT id, name, looping, content, sort_order, added_at FROM tracks",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(track_from_row).collect()
}

/// Number of stored tracks
pub async fn count(pool: &SqlitePool) -> Result<u64> {
    let row = sqlx::query("SELECT COUNT(*) AS n FROM tracks")
        .fetch_one(pool)
        .await?;

    let n: i64 = row.try_get("n")?;
    Ok(n.max(0) as u64)
}

fn track_from_row(row: &SqliteRow) -> Result<Track> {
    let sort_order: i64 = row.try_get("sort_order")?;
    let order = u32::try_from(sort_order)
        .map_err(|_| StorageError::Serialization(format!("invalid sort_order {sort_order}")))?;

    let added_ms: i64 = row.try_get("added_at")?;
    let added_at = DateTime::from_timestamp_millis(added_ms)
        .ok_or_else(|| StorageError::Serialization(format!("invalid timestamp {added_ms}")))?;

    Ok(Track {
        id: row.try_get::<TrackId, _>("id")?,
        name: row.try_get("name")?,
        looping: row.try_get("looping")?,
        content: TrackContent::new(row.try_get::<Vec<u8>, _>("content")?),
        order,
        added_at,
    })
}
