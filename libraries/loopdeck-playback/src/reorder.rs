//! Reorder engine
//!
//! Pure list algorithms for the playlist. None of them touch storage; the
//! playlist manager calls [`renumber`] afterwards and persists the result.

use loopdeck_core::Track;

/// Swap the track at `index` with its left neighbor
///
/// Returns false (and leaves the list untouched) when `index` is 0 or out of range.
pub fn move_up(tracks: &mut [Track], index: usize) -> bool {
    if index == 0 || index >= tracks.len() {
        return false;
    }

    tracks.swap(index - 1, index);
    true
}

/// Swap the track at `index` with its right neighbor
///
/// Returns false when `index` is the last position or out of range.
pub fn move_down(tracks: &mut [Track], index: usize) -> bool {
    if index >= tracks.len().saturating_sub(1) {
        return false;
    }

    tracks.swap(index, index + 1);
    true
}

/// Take the track at `src` out and reinsert it at `dest`
///
/// Same result as `remove(src)` followed by `insert(dest, _)`: tracks between
/// the two positions shift by one toward `src`. Returns false when the
/// positions are equal or either is out of range.
pub fn relocate(tracks: &mut [Track], src: usize, dest: usize) -> bool {
    let len = tracks.len();
    if src == dest || src >= len || dest >= len {
        return false;
    }

    if src < dest {
        tracks[src..=dest].rotate_left(1);
    } else {
        tracks[dest..=src].rotate_right(1);
    }
    true
}

/// Rewrite every `order` to its position
///
/// Returns the positions whose `order` actually changed.
pub fn renumber(tracks: &mut [Track]) -> Vec<usize> {
    let mut changed = Vec::new();

    for (position, track) in tracks.iter_mut().enumerate() {
        let order = position as u32;
        if track.order != order {
            track.order = order;
            changed.push(position);
        }
    }

    changed
}

/// Whether every `order` equals its position
pub fn is_dense(tracks: &[Track]) -> bool {
    tracks
        .iter()
        .enumerate()
        .all(|(position, track)| track.order as usize == position)
}
