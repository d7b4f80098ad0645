//! User playlists
//!
//! The full playlist collection lives in memory and is serialized to
//! the state store after every mutation. Playlists here always carry
//! fully resolved track records; identifier-only references are
//! resolved against the catalog before they reach this module.

use crate::keys::KEY_PLAYLISTS;
use muse_core::{MuseError, Playlist, PlaylistId, Result, StateStore, Track, TrackId};

/// Playlist collection backed by the state store
pub struct PlaylistManager<S> {
    store: S,
    playlists: Vec<Playlist>,
}

impl<S: StateStore> PlaylistManager<S> {
    /// Load the playlist collection from the store
    pub async fn load(store: S) -> Result<Self> {
        let playlists = match store.get(KEY_PLAYLISTS).await? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        Ok(Self { store, playlists })
    }

    /// All playlists, oldest first
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Look up a playlist by id
    pub fn get(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// Create an empty playlist with the given name
    ///
    /// The name is trimmed; a name that is empty after trimming is
    /// rejected.
    pub async fn create(&mut self, name: &str) -> Result<Playlist> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MuseError::invalid_input("Playlist name cannot be empty"));
        }

        let playlist = Playlist::new(name);
        self.playlists.push(playlist.clone());
        self.persist().await?;

        tracing::debug!("Created playlist {} ({})", playlist.name, playlist.id);
        Ok(playlist)
    }

    /// Append a track to a playlist
    ///
    /// Fails with [`MuseError::PlaylistNotFound`] for an unknown
    /// playlist. A track whose id is already present is rejected with
    /// [`MuseError::Duplicate`] and the playlist is left untouched;
    /// callers surface that as a notice, not a failure.
    pub async fn add_track(&mut self, playlist_id: &PlaylistId, track: Track) -> Result<()> {
        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| &p.id == playlist_id)
            .ok_or_else(|| MuseError::PlaylistNotFound(playlist_id.clone()))?;

        if playlist.contains(&track.id) {
            return Err(MuseError::duplicate(format!(
                "Track already in playlist: {}",
                track.title
            )));
        }

        playlist.tracks.push(track);
        self.persist().await
    }

    /// Remove a track from a playlist by id
    ///
    /// Fails with [`MuseError::PlaylistNotFound`] for an unknown
    /// playlist. Removing a track that is not present is a no-op.
    pub async fn remove_track(&mut self, playlist_id: &PlaylistId, track_id: &TrackId) -> Result<()> {
        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| &p.id == playlist_id)
            .ok_or_else(|| MuseError::PlaylistNotFound(playlist_id.clone()))?;

        playlist.tracks.retain(|t| &t.id != track_id);
        self.persist().await
    }

    /// Remove a playlist by id
    ///
    /// Deleting a playlist that does not exist is a no-op.
    pub async fn delete(&mut self, id: &PlaylistId) -> Result<()> {
        self.playlists.retain(|p| &p.id != id);
        self.persist().await
    }

    /// Write the full collection to the store
    ///
    /// Called automatically after every mutation; public for explicit
    /// flushes.
    pub async fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.playlists)?;
        self.store.put(KEY_PLAYLISTS, &raw).await
    }
}
