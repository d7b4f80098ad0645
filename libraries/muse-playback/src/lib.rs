//! Muse Player - Playback Management
//!
//! Platform-agnostic playback management for Muse Player.
//!
//! This crate provides:
//! - A single playback controller owning queue and session state
//! - Wraparound queue navigation (next past the end returns to the start)
//! - Shuffle (uniform Fisher-Yates, current track stays current)
//! - Repeat modes (Off, All, One)
//! - Seek by fraction of duration, volume and mute control
//! - Event-based UI synchronization
//!
//! # Architecture
//!
//! `muse-playback` never touches audio hardware or the DOM. The
//! embedding layer implements [`AudioDevice`], forwards the device's
//! reports as [`DeviceSignal`]s, and drains [`PlayerEvent`]s to update
//! its UI. All state transitions happen inside [`Player`], so the
//! reaction to "track ended" is a plain testable function rather than
//! a callback wired into a UI element.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use muse_playback::{AudioDevice, Player, PlayerConfig, Result};
//! use muse_core::Track;
//! use std::time::Duration;
//!
//! // Implement AudioDevice for your platform
//! struct SilentDevice;
//!
//! impl AudioDevice for SilentDevice {
//!     fn set_source(&mut self, _url: &str) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn set_position(&mut self, _position: Duration) -> Result<()> { Ok(()) }
//!     fn set_volume(&mut self, _volume: f32) -> Result<()> { Ok(()) }
//! }
//!
//! let mut player = Player::new(Box::new(SilentDevice), PlayerConfig::default()).unwrap();
//!
//! let tracks = vec![
//!     Track::new("Blinding Lights", "The Weeknd").with_source_url("/audio/blinding-lights.mp3"),
//!     Track::new("Levitating", "Dua Lipa").with_source_url("/audio/levitating.mp3"),
//! ];
//!
//! player.load_playlist(tracks).unwrap();
//! player.toggle_play_pause().unwrap(); // pause
//! player.next().unwrap();              // wraps at the end of the queue
//! ```
//!
//! # Example: Shuffle and Repeat
//!
//! ```rust
//! use muse_playback::{Player, PlayerConfig, RepeatMode};
//! # use muse_playback::{AudioDevice, Result};
//! # use std::time::Duration;
//! # struct SilentDevice;
//! # impl AudioDevice for SilentDevice {
//! #     fn set_source(&mut self, _url: &str) -> Result<()> { Ok(()) }
//! #     fn play(&mut self) -> Result<()> { Ok(()) }
//! #     fn pause(&mut self) -> Result<()> { Ok(()) }
//! #     fn set_position(&mut self, _position: Duration) -> Result<()> { Ok(()) }
//! #     fn set_volume(&mut self, _volume: f32) -> Result<()> { Ok(()) }
//! # }
//!
//! let mut player = Player::new(Box::new(SilentDevice), PlayerConfig::default()).unwrap();
//!
//! // Shuffle keeps the currently playing track current
//! player.toggle_shuffle();
//!
//! // off -> all -> one -> off
//! player.cycle_repeat_mode();
//! assert_eq!(player.get_repeat(), RepeatMode::All);
//! ```

mod device;
mod error;
mod events;
mod player;
mod queue;
mod shuffle;
pub mod types;

// Public exports
pub use device::{AudioDevice, DeviceSignal};
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use player::Player;
pub use types::{Direction, PlaybackState, PlayerConfig, RepeatMode};
