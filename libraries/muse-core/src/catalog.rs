//! Catalog Provider contract

use crate::error::Result;
use crate::types::{Playlist, PlaylistId, Track, TrackId};
use async_trait::async_trait;

/// Source of truth for track and playlist metadata.
///
/// The demo implementation in `muse-catalog` serves static data; a real
/// deployment would back this with a music API. Lookups are async so either
/// backing works without the callers changing shape.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Get a track by ID; `Ok(None)` if the catalog has no such entry
    async fn track(&self, id: &TrackId) -> Result<Option<Track>>;

    /// Get a playlist by ID, tracks fully resolved; `Ok(None)` if unknown
    async fn playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>>;

    /// Featured playlists for the home page
    async fn featured_playlists(&self) -> Result<Vec<Playlist>>;

    /// Trending tracks for the home page
    async fn trending_tracks(&self) -> Result<Vec<Track>>;

    /// Recommended playlists for the home page
    async fn recommended_playlists(&self) -> Result<Vec<Playlist>>;

    /// Search tracks by title, artist, or album
    async fn search(&self, query: &str) -> Result<Vec<Track>>;

    /// Resolve a sequence of track identifiers to full records, dropping
    /// identifiers the catalog does not know
    async fn resolve_tracks(&self, ids: &[TrackId]) -> Result<Vec<Track>> {
        let mut tracks = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(track) = self.track(id).await? {
                tracks.push(track);
            }
        }
        Ok(tracks)
    }
}
