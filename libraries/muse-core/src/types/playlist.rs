/// Playlist domain type
use crate::types::{PlaylistId, Track, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered, named collection of tracks.
///
/// Tracks are carried fully resolved, by value. Catalog entries that refer
/// to tracks by identifier are resolved by the Catalog Provider before a
/// `Playlist` is constructed, so consumers never see dangling references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Display name
    pub name: String,

    /// Ordered track sequence; order is significant and preserved on
    /// save/load
    pub tracks: Vec<Track>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            tracks: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a playlist with a specific ID (for catalog/store loading)
    pub fn with_id(id: PlaylistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tracks: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Replace the track sequence
    pub fn with_tracks(mut self, tracks: Vec<Track>) -> Self {
        self.tracks = tracks;
        self
    }

    /// Whether a track with this identifier is already present
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.tracks.iter().any(|t| t.id == *track_id)
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_creation() {
        let playlist = Playlist::new("Late Night Drive");
        assert_eq!(playlist.name, "Late Night Drive");
        assert!(playlist.is_empty());
        assert!(playlist.created_at <= Utc::now());
    }

    #[test]
    fn contains_matches_by_identifier_only() {
        let track = Track::new("Blinding Lights", "The Weeknd").with_id(TrackId::new("trending-1"));
        let playlist = Playlist::new("Synthwave").with_tracks(vec![track]);

        assert!(playlist.contains(&TrackId::new("trending-1")));
        assert!(!playlist.contains(&TrackId::new("trending-2")));
    }

    #[test]
    fn order_survives_serialization() {
        let playlist = Playlist::new("Ordered").with_tracks(vec![
            Track::new("A", "x").with_id(TrackId::new("a")),
            Track::new("B", "x").with_id(TrackId::new("b")),
            Track::new("C", "x").with_id(TrackId::new("c")),
        ]);

        let json = serde_json::to_string(&playlist).unwrap();
        let restored: Playlist = serde_json::from_str(&json).unwrap();

        let ids: Vec<&str> = restored.tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
