//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Track has no resolvable audio source
    #[error("Track has no audio source")]
    NoAudioSource,

    /// Playlist resolved to zero playable tracks
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// Command issued while no track is loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Audio device rejected a command
    #[error("Audio device error: {0}")]
    Device(String),
}

impl PlaybackError {
    /// Create a device error from any displayable cause
    pub fn device(message: impl Into<String>) -> Self {
        Self::Device(message.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
