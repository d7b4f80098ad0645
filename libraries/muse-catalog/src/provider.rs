//! Static catalog provider

use crate::data;
use async_trait::async_trait;
use muse_core::{Catalog, Playlist, PlaylistId, Result, Track, TrackId};
use std::collections::HashMap;

/// Catalog backed by the embedded demo data
///
/// Every record is handed out fully resolved: playlists carry their
/// track records by value, never identifier references. Lookups are
/// served from memory; the async trait boundary exists so a real API
/// backend can slot in without callers changing.
pub struct StaticCatalog {
    tracks: HashMap<TrackId, Track>,
    featured: Vec<Playlist>,
    recommended: Vec<Playlist>,
    trending: Vec<Track>,
}

impl StaticCatalog {
    /// Build the catalog from the embedded demo records
    pub fn new() -> Self {
        let featured = data::featured_playlists();
        let recommended = data::recommended_playlists();
        let trending = data::trending_tracks();

        // Index every track in every section; later sections reusing an
        // id (trending tracks also appear in Today's Top Hits) are the
        // same record, so overwriting is harmless.
        let mut tracks = HashMap::new();
        for track in trending
            .iter()
            .chain(featured.iter().flat_map(|p| p.tracks.iter()))
            .chain(recommended.iter().flat_map(|p| p.tracks.iter()))
        {
            tracks.insert(track.id.clone(), track.clone());
        }

        Self {
            tracks,
            featured,
            recommended,
            trending,
        }
    }

    fn find_playlist(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.featured
            .iter()
            .chain(self.recommended.iter())
            .find(|p| &p.id == id)
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn track(&self, id: &TrackId) -> Result<Option<Track>> {
        Ok(self.tracks.get(id).cloned())
    }

    async fn playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        Ok(self.find_playlist(id).cloned())
    }

    async fn featured_playlists(&self) -> Result<Vec<Playlist>> {
        Ok(self.featured.clone())
    }

    async fn trending_tracks(&self) -> Result<Vec<Track>> {
        Ok(self.trending.clone())
    }

    async fn recommended_playlists(&self) -> Result<Vec<Playlist>> {
        Ok(self.recommended.clone())
    }

    async fn search(&self, query: &str) -> Result<Vec<Track>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut results: Vec<Track> = self
            .tracks
            .values()
            .filter(|t| {
                t.title.to_lowercase().contains(&query)
                    || t.artist.to_lowercase().contains(&query)
                    || t.album
                        .as_ref()
                        .is_some_and(|a| a.to_lowercase().contains(&query))
            })
            .cloned()
            .collect();

        // HashMap iteration order is arbitrary; present results stably
        results.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(results)
    }
}
