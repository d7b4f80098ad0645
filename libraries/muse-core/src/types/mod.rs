//! Domain types shared across Muse Player crates

mod ids;
mod playlist;
mod track;
mod user;

pub use ids::{PlaylistId, TrackId, UserId};
pub use playlist::Playlist;
pub use track::Track;
pub use user::{UserAccount, UserProfile};
