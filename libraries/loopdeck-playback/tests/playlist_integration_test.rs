//! Playlist manager integration tests against the SQLite store
//!
//! Every test checks that the persisted snapshot matches memory, since that
//! is what the next session starts from.

mod common;

use common::{init_tracing, items, TestDb};
use loopdeck_core::{Track, TrackStore};
use loopdeck_playback::{reorder, PersistPolicy, PlaylistManager};

async fn persisted(store: &dyn TrackStore) -> Vec<Track> {
    let mut tracks = store.get_all().await.unwrap();
    tracks.sort_by_key(|t| t.order);
    tracks
}

fn names(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.name.as_str()).collect()
}

async fn assert_synced(playlist: &PlaylistManager, store: &dyn TrackStore) {
    assert!(reorder::is_dense(playlist.tracks()));

    let stored = persisted(store).await;
    assert_eq!(stored.len(), playlist.len());
    for (stored, live) in stored.iter().zip(playlist.tracks()) {
        assert_eq!(stored.id, live.id);
        assert_eq!(stored.order, live.order);
        assert_eq!(stored.looping, live.looping);
    }
}

#[tokio::test]
async fn test_add_remove_round_trip() {
    init_tracing();
    let db = TestDb::new();
    let store = db.store().await;
    let mut playlist = PlaylistManager::load(store.clone(), PersistPolicy::Full)
        .await
        .unwrap();
    playlist.add(items(&["A", "B"])).await.unwrap();

    let ids = playlist.add(items(&["x"])).await.unwrap();
    let index = playlist.position_of(&ids[0]).unwrap();
    playlist.remove(index).await.unwrap();

    assert_eq!(playlist.len(), 2);
    assert!(persisted(&*store).await.iter().all(|t| t.id != ids[0]));
    assert_synced(&playlist, &*store).await;
}

#[tokio::test]
async fn test_relocate_reorders_persisted_records() {
    init_tracing();
    let db = TestDb::new();
    let store = db.store().await;
    let mut playlist = PlaylistManager::load(store.clone(), PersistPolicy::Full)
        .await
        .unwrap();
    playlist.add(items(&["A", "B", "C", "D"])).await.unwrap();

    assert!(playlist.relocate(0, 2).await.unwrap());

    assert_eq!(names(playlist.tracks()), ["B", "C", "A", "D"]);
    let orders: Vec<u32> = playlist.tracks().iter().map(|t| t.order).collect();
    assert_eq!(orders, [0, 1, 2, 3]);
    assert_synced(&playlist, &*store).await;
}

#[tokio::test]
async fn test_relocate_backwards() {
    let db = TestDb::new();
    let store = db.store().await;
    let mut playlist = PlaylistManager::load(store.clone(), PersistPolicy::ChangedOnly)
        .await
        .unwrap();
    playlist.add(items(&["A", "B", "C", "D"])).await.unwrap();

    assert!(playlist.relocate(3, 1).await.unwrap());

    assert_eq!(names(playlist.tracks()), ["A", "D", "B", "C"]);
    assert_synced(&playlist, &*store).await;
}

#[tokio::test]
async fn test_loop_toggle_is_reversible() {
    let db = TestDb::new();
    let store = db.store().await;
    let mut playlist = PlaylistManager::load(store.clone(), PersistPolicy::Full)
        .await
        .unwrap();
    playlist.add(items(&["A", "B"])).await.unwrap();
    let before = persisted(&*store).await;

    playlist.toggle_loop(0).await.unwrap();
    assert!(persisted(&*store).await[0].looping);

    playlist.toggle_loop(0).await.unwrap();
    let after = persisted(&*store).await;
    assert_eq!(
        before.iter().map(|t| t.looping).collect::<Vec<_>>(),
        after.iter().map(|t| t.looping).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_clear_empties_store() {
    let db = TestDb::new();
    let store = db.store().await;
    let mut playlist = PlaylistManager::load(store.clone(), PersistPolicy::Full)
        .await
        .unwrap();
    playlist.add(items(&["A", "B", "C"])).await.unwrap();

    playlist.clear().await.unwrap();

    assert!(playlist.is_empty());
    assert!(store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_restores_order_after_reopen() {
    init_tracing();
    let db = TestDb::new();
    let first = db.store().await;
    let mut playlist = PlaylistManager::load(first.clone(), PersistPolicy::Full)
        .await
        .unwrap();
    playlist.add(items(&["A", "B", "C"])).await.unwrap();
    playlist.move_up(2).await.unwrap();
    playlist.toggle_loop(1).await.unwrap();
    let expected: Vec<Track> = playlist.tracks().to_vec();
    first.close().await;

    let second = db.store().await;
    let restored = PlaylistManager::load(second, PersistPolicy::Full)
        .await
        .unwrap();

    assert_eq!(names(restored.tracks()), ["A", "C", "B"]);
    for (restored, expected) in restored.tracks().iter().zip(&expected) {
        assert_eq!(restored.id, expected.id);
        assert_eq!(restored.name, expected.name);
        assert_eq!(restored.looping, expected.looping);
        assert_eq!(restored.content, expected.content);
    }
}

#[tokio::test]
async fn test_load_repairs_gaps_left_on_disk() {
    let db = TestDb::new();
    let store = db.store().await;

    let mut a = Track::new(common::item("A"), 0);
    let mut b = Track::new(common::item("B"), 0);
    a.order = 3;
    b.order = 7;
    store.put(&b).await.unwrap();
    store.put(&a).await.unwrap();

    let playlist = PlaylistManager::load(store.clone(), PersistPolicy::Full)
        .await
        .unwrap();

    assert_eq!(names(playlist.tracks()), ["A", "B"]);
    assert_synced(&playlist, &*store).await;
}
