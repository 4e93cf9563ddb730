//! Property-based tests for the playlist
//!
//! Random sequences of mutations must always leave `order` dense, matching
//! list position, and mirrored by the store.

use loopdeck_core::{MemoryStore, NewTrack, TrackId};
use loopdeck_playback::{reorder, PersistPolicy, PlaylistManager};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

// ===== Helpers =====

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
    MoveUp(usize),
    MoveDown(usize),
    Relocate(usize, usize),
    ToggleLoop(usize),
}

/// Mostly plausible positions, sometimes far past any playlist length
fn arbitrary_index() -> impl Strategy<Value = usize> {
    prop_oneof![
        8 => 0usize..12,
        1 => usize::MAX - 1..=usize::MAX,
    ]
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1usize..4).prop_map(Op::Add),
        arbitrary_index().prop_map(Op::Remove),
        arbitrary_index().prop_map(Op::MoveUp),
        arbitrary_index().prop_map(Op::MoveDown),
        (arbitrary_index(), arbitrary_index()).prop_map(|(src, dest)| Op::Relocate(src, dest)),
        arbitrary_index().prop_map(Op::ToggleLoop),
    ]
}

fn arbitrary_policy() -> impl Strategy<Value = PersistPolicy> {
    prop_oneof![Just(PersistPolicy::Full), Just(PersistPolicy::ChangedOnly)]
}

async fn apply(playlist: &mut PlaylistManager, op: &Op, counter: &mut usize) {
    match *op {
        Op::Add(count) => {
            let items: Vec<NewTrack> = (0..count)
                .map(|_| {
                    *counter += 1;
                    NewTrack::new(format!("track-{counter}"), vec![0u8; 4])
                })
                .collect();
            playlist.add(items).await.unwrap();
        }
        Op::Remove(index) => {
            playlist.remove(index).await.unwrap();
        }
        Op::MoveUp(index) => {
            playlist.move_up(index).await.unwrap();
        }
        Op::MoveDown(index) => {
            playlist.move_down(index).await.unwrap();
        }
        Op::Relocate(src, dest) => {
            playlist.relocate(src, dest).await.unwrap();
        }
        Op::ToggleLoop(index) => {
            playlist.toggle_loop(index).await.unwrap();
        }
    }
}

fn run<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

// ===== Property Tests =====

proptest! {
    /// Property: order is dense and the store mirrors memory after any sequence
    #[test]
    fn order_stays_dense(
        ops in prop::collection::vec(arbitrary_op(), 1..40),
        policy in arbitrary_policy(),
    ) {
        let (dense, live, stored) = run(async {
            let store = Arc::new(MemoryStore::new());
            let mut playlist = PlaylistManager::new(store.clone(), policy);
            let mut counter = 0;

            for op in &ops {
                apply(&mut playlist, op, &mut counter).await;
            }

            let dense = reorder::is_dense(playlist.tracks());
            let live: Vec<(TrackId, u32, bool)> = playlist
                .tracks()
                .iter()
                .map(|t| (t.id.clone(), t.order, t.looping))
                .collect();
            let stored: Vec<(TrackId, u32, bool)> = store
                .snapshot()
                .into_iter()
                .map(|t| (t.id, t.order, t.looping))
                .collect();
            (dense, live, stored)
        });

        prop_assert!(dense, "order not dense");
        prop_assert_eq!(live, stored);
    }

    /// Property: relocate is a permutation with splice semantics
    #[test]
    fn relocate_matches_remove_then_insert(
        len in 1usize..12,
        src in arbitrary_index(),
        dest in arbitrary_index(),
    ) {
        let (before, after, moved) = run(async {
            let store = Arc::new(MemoryStore::new());
            let mut playlist = PlaylistManager::new(store, PersistPolicy::Full);
            let items: Vec<NewTrack> = (0..len)
                .map(|i| NewTrack::new(format!("t{i}"), vec![i as u8]))
                .collect();
            playlist.add(items).await.unwrap();

            let before: Vec<TrackId> = playlist.tracks().iter().map(|t| t.id.clone()).collect();
            let moved = playlist.relocate(src, dest).await.unwrap();
            let after: Vec<TrackId> = playlist.tracks().iter().map(|t| t.id.clone()).collect();
            (before, after, moved)
        });

        let mut expected = before.clone();
        if src != dest && src < len && dest < len {
            let item = expected.remove(src);
            expected.insert(dest, item);
            prop_assert!(moved);
        } else {
            prop_assert!(!moved);
        }
        prop_assert_eq!(&after, &expected);

        let unique: HashSet<&TrackId> = after.iter().collect();
        prop_assert_eq!(unique.len(), len);
    }

    /// Property: toggling loop twice restores every flag
    #[test]
    fn double_toggle_is_identity(len in 1usize..8, index in arbitrary_index()) {
        let (before, after) = run(async {
            let store = Arc::new(MemoryStore::new());
            let mut playlist = PlaylistManager::new(store.clone(), PersistPolicy::Full);
            let items: Vec<NewTrack> = (0..len)
                .map(|i| NewTrack::new(format!("t{i}"), vec![0u8]))
                .collect();
            playlist.add(items).await.unwrap();

            let before: Vec<bool> = store.snapshot().iter().map(|t| t.looping).collect();
            playlist.toggle_loop(index).await.unwrap();
            playlist.toggle_loop(index).await.unwrap();
            let after: Vec<bool> = store.snapshot().iter().map(|t| t.looping).collect();
            (before, after)
        });

        prop_assert_eq!(before, after);
    }
}
