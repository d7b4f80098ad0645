//! Persisted key namespaces
//!
//! Each consumer of the state store owns exactly one of these keys.
//! The strings are part of the persisted data layout; renaming one
//! orphans existing saved state.

/// Saved playlist collection (ordered sequence of playlist records)
pub const KEY_PLAYLISTS: &str = "playlists";

/// Favorite tracks (ordered sequence of track records)
pub const KEY_FAVORITES: &str = "favorites";

/// Signed-in profile, absent when nobody is signed in
pub const KEY_CURRENT_USER: &str = "currentUser";

/// Registered demo accounts
pub const KEY_USERS: &str = "users";
