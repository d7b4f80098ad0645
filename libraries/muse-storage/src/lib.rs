//! Muse Player Storage
//!
//! SQLite persistence for Muse Player library state: favorites,
//! playlists, and the demo account registry.
//!
//! Everything persists through one key-value table; each concern owns a
//! disjoint key (see [`keys`]), so the managers never overwrite each
//! other. Managers keep their collection in memory and write through
//! after every mutation.
//!
//! # Example
//!
//! ```rust,no_run
//! use muse_storage::{FavoritesManager, PlaylistManager, SqliteStore};
//! use muse_core::Track;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // One store, shared by every manager
//! let store = SqliteStore::connect("sqlite://muse.db").await?;
//!
//! let mut playlists = PlaylistManager::load(store.clone()).await?;
//! let road_trip = playlists.create("Road Trip").await?;
//!
//! let track = Track::new("Blinding Lights", "The Weeknd")
//!     .with_source_url("/audio/blinding-lights.mp3");
//! playlists.add_track(&road_trip.id, track.clone()).await?;
//!
//! let mut favorites = FavoritesManager::load(store).await?;
//! favorites.toggle_favorite(track).await?;
//! # Ok(())
//! # }
//! ```

mod favorites;
mod playlists;
mod profile;
mod store;

pub mod keys;

pub use favorites::FavoritesManager;
pub use playlists::PlaylistManager;
pub use profile::ProfileStore;
pub use store::SqliteStore;
