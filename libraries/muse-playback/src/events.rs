//! Playback events
//!
//! Event-based communication for UI synchronization. The player never
//! calls into the UI; it pushes events onto an internal queue and the
//! UI drains them after each command or device signal.

use crate::types::{PlaybackState, RepeatMode};
use serde::{Deserialize, Serialize};

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback state changed (playing, paused)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A different track became current
    TrackChanged {
        /// ID of the new (current) track
        track_id: String,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Track finished playing naturally (reached end)
    TrackFinished {
        /// ID of the finished track
        track_id: String,
    },

    /// Position update (periodic, driven by device time signals)
    PositionUpdate {
        /// Current playback position
        position_ms: u64,
        /// Total track duration (0 until metadata loads)
        duration_ms: u64,
    },

    /// Volume or mute state changed
    VolumeChanged {
        /// New volume level (0.0 - 1.0)
        volume: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Queue contents or order changed
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Shuffle or repeat mode changed
    ModeChanged {
        /// Whether shuffle is enabled
        shuffle: bool,
        /// Current repeat mode
        repeat: RepeatMode,
    },

    /// Error occurred during playback
    Error {
        /// Error message
        message: String,
    },
}
