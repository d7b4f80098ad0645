//! Favorite tracks
//!
//! An in-memory set written through to the state store after every
//! mutation. Membership is by track identifier only: two records with
//! the same id are the same favorite, whatever their other fields say.

use crate::keys::KEY_FAVORITES;
use muse_core::{Result, StateStore, Track, TrackId};

/// Favorites set backed by the state store
pub struct FavoritesManager<S> {
    store: S,
    tracks: Vec<Track>,
}

impl<S: StateStore> FavoritesManager<S> {
    /// Load the favorites set from the store
    pub async fn load(store: S) -> Result<Self> {
        let tracks = match store.get(KEY_FAVORITES).await? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        Ok(Self { store, tracks })
    }

    /// Whether the given track id is currently favorited
    pub fn is_favorite(&self, id: &TrackId) -> bool {
        self.tracks.iter().any(|t| &t.id == id)
    }

    /// Add the track if absent, remove it if present
    ///
    /// Returns true when the track ended up favorited. The new set is
    /// persisted before this returns.
    pub async fn toggle_favorite(&mut self, track: Track) -> Result<bool> {
        let added = match self.tracks.iter().position(|t| t.id == track.id) {
            Some(position) => {
                self.tracks.remove(position);
                false
            }
            None => {
                self.tracks.push(track);
                true
            }
        };

        self.persist().await?;
        Ok(added)
    }

    /// Add the track without toggling
    ///
    /// Returns false when the track was already favorited; the set is
    /// left untouched and nothing is written. Callers surface that as
    /// a notice, not a failure.
    pub async fn add(&mut self, track: Track) -> Result<bool> {
        if self.is_favorite(&track.id) {
            return Ok(false);
        }

        self.tracks.push(track);
        self.persist().await?;
        Ok(true)
    }

    /// All favorites, oldest first
    pub fn favorites(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of favorited tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether no tracks are favorited
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Write the current set to the store
    ///
    /// Called automatically after every mutation; public for explicit
    /// flushes.
    pub async fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.tracks)?;
        self.store.put(KEY_FAVORITES, &raw).await
    }
}
