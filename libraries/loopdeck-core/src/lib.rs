//! Loopdeck Core
//!
//! Platform-agnostic types, storage traits, and error handling for Loopdeck,
//! a locally persisted, user-ordered audio playlist.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `NewTrack`, `TrackContent`
//! - **Storage Traits**: `TrackStore` (track records) and `SettingsStore` (volume)
//! - **Error Handling**: `StorageError` and the `Result` alias
//! - **In-memory store**: `MemoryStore`, a non-durable implementation of both traits
//!
//! # Example
//!
//! ```rust
//! use loopdeck_core::{MemoryStore, NewTrack, Track, TrackStore};
//!
//! # async fn example() -> loopdeck_core::Result<()> {
//! let store = MemoryStore::new();
//!
//! let track = Track::new(NewTrack::new("intro.mp3", vec![0u8; 16]), 0);
//! store.put(&track).await?;
//!
//! let all = store.get_all().await?;
//! assert_eq!(all.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod memory;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, StorageError};
pub use memory::{MemoryStore, StoreOp};
pub use storage::{SettingsStore, TrackStore};
pub use types::{NewTrack, Track, TrackContent, TrackId};
