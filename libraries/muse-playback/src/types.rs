//! Core types for playback management

use serde::{Deserialize, Serialize};

/// Playback state
///
/// `Idle` means no track has ever been loaded in this session.
/// Once a track loads, the player only moves between `Playing`
/// and `Paused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track loaded
    Idle,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the queue ends
    Off,

    /// Loop the entire queue
    All,

    /// Loop the current track only
    One,
}

impl RepeatMode {
    /// Advance to the next mode in the fixed cycle off -> all -> one -> off
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// Direction for queue navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Step back one position, wrapping to the last track
    Previous,

    /// Step forward one position, wrapping to the first track
    Next,
}

/// Configuration for the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0.0 - 1.0, default: 0.5)
    pub volume: f32,

    /// Initial shuffle state (default: off)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 0.5,
            shuffle: false,
            repeat: RepeatMode::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_cycle_order() {
        assert_eq!(RepeatMode::Off.cycle(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycle(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycle(), RepeatMode::Off);
    }

    #[test]
    fn repeat_cycle_returns_after_three_steps() {
        for mode in [RepeatMode::Off, RepeatMode::All, RepeatMode::One] {
            assert_eq!(mode.cycle().cycle().cycle(), mode);
        }
    }

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.volume, 0.5);
        assert!(!config.shuffle);
        assert_eq!(config.repeat, RepeatMode::Off);
    }
}
