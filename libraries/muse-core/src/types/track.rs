/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A playable catalog item.
///
/// Tracks are immutable once handed out by the catalog; everything that
/// changes during playback (position, queue membership) lives in
/// `muse-playback`, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist or subtitle line shown under the title
    pub artist: String,

    /// Album name
    pub album: Option<String>,

    /// Duration hint in milliseconds, if the catalog knows it.
    /// The device reports the authoritative duration once metadata loads.
    pub duration_ms: Option<u64>,

    /// Artwork image reference
    pub artwork_url: Option<String>,

    /// Audio source reference (URL or local path).
    /// `None` means the catalog has no playable audio for this entry.
    pub source_url: Option<String>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: artist.into(),
            album: None,
            duration_ms: None,
            artwork_url: None,
            source_url: None,
        }
    }

    /// Set the track identifier
    pub fn with_id(mut self, id: TrackId) -> Self {
        self.id = id;
        self
    }

    /// Set the album name
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Set the duration in milliseconds
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Set the artwork reference
    pub fn with_artwork_url(mut self, url: impl Into<String>) -> Self {
        self.artwork_url = Some(url.into());
        self
    }

    /// Set the audio source reference
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Whether this track has a resolvable audio source
    pub fn has_source(&self) -> bool {
        self.source_url.is_some()
    }

    /// Get the duration hint as a Duration
    pub fn duration_hint(&self) -> Option<Duration> {
        self.duration_ms.map(Duration::from_millis)
    }
}
