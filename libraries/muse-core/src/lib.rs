//! Muse Player Core
//!
//! Shared types, trait contracts, and error handling for Muse Player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `UserProfile`, `UserAccount`
//! - **Contracts**: `Catalog` (where tracks come from) and `StateStore`
//!   (where user state goes)
//! - **Error Handling**: unified `MuseError` and `Result` types
//!
//! Playback logic lives in `muse-playback`, the SQLite-backed store in
//! `muse-storage`, and the demo catalog in `muse-catalog`.
//!
//! # Example
//!
//! ```rust
//! use muse_core::types::{Playlist, Track, TrackId};
//!
//! let track = Track::new("Blinding Lights", "The Weeknd")
//!     .with_source_url("https://cdn.example.com/previews/blinding-lights.mp3");
//!
//! let mut playlist = Playlist::new("Late Night Drive");
//! playlist.tracks.push(track.clone());
//!
//! assert!(playlist.contains(&track.id));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{MuseError, Result};
pub use store::StateStore;
pub use types::{Playlist, PlaylistId, Track, TrackId, UserAccount, UserId, UserProfile};
