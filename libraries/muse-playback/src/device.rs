//! Platform-agnostic audio device
//!
//! Abstracts the audio backend (web audio element, native output, test
//! double). The player commands the device and never touches audio
//! directly. The device reports back asynchronously via [`DeviceSignal`];
//! the embedding layer forwards those signals to
//! [`Player::handle_signal`](crate::Player::handle_signal).

use crate::error::Result;
use std::time::Duration;

/// Playback commands the device must support
///
/// The device is a singleton exclusively owned by the player; no other
/// component commands it. Commands return immediately. Readiness and
/// progress arrive later as [`DeviceSignal`]s.
pub trait AudioDevice: Send {
    /// Point the device at a new audio source URL
    ///
    /// Begins loading and implicitly discards whatever was loaded
    /// before. There is no cancellation; a new source simply supersedes
    /// the old one.
    fn set_source(&mut self, url: &str) -> Result<()>;

    /// Start or resume playback of the current source
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the current position
    fn pause(&mut self) -> Result<()>;

    /// Jump to an absolute position in the current source
    fn set_position(&mut self, position: Duration) -> Result<()>;

    /// Set the output volume (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32) -> Result<()>;
}

/// Signals emitted by the device
///
/// Delivered in the order the device emits them.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceSignal {
    /// Source metadata became available; duration is now known
    MetadataLoaded {
        /// Total duration of the loaded source
        duration: Duration,
    },

    /// Periodic position report during playback
    TimeUpdate {
        /// Current playback position
        position: Duration,
    },

    /// The current source played to its end
    Ended,

    /// Loading or decoding the current source failed
    Error {
        /// Device-reported failure description
        message: String,
    },
}

/// No-op device for testing
///
/// Accepts every command and remembers the last volume it was given.
#[cfg(test)]
pub struct NullDevice {
    volume: f32,
}

#[cfg(test)]
impl NullDevice {
    /// Create a new null device
    pub fn new() -> Self {
        Self { volume: 1.0 }
    }

    /// Last volume the player applied
    pub fn volume(&self) -> f32 {
        self.volume
    }
}

#[cfg(test)]
impl AudioDevice for NullDevice {
    fn set_source(&mut self, _url: &str) -> Result<()> {
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_position(&mut self, _position: Duration) -> Result<()> {
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> Result<()> {
        self.volume = volume;
        Ok(())
    }
}
