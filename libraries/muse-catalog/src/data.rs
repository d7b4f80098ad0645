//! Demo catalog records
//!
//! Hard-coded sample content standing in for a real music API. Ids are
//! stable strings (`trending-1`, `featured-2`, ...) so persisted
//! favorites and playlists keep resolving across sessions. A few
//! entries deliberately carry no source URL: preview-less tracks exist
//! in real catalogs and the player must cope with them.

use muse_core::{Playlist, PlaylistId, Track, TrackId};

fn track(id: &str, title: &str, artist: &str) -> Track {
    Track::new(title, artist)
        .with_id(TrackId::new(id))
        .with_artwork_url(format!(
            "https://via.placeholder.com/300x300?text={}",
            title.replace(' ', "+")
        ))
}

fn preview(id: &str, title: &str, artist: &str, duration_ms: u64) -> Track {
    track(id, title, artist)
        .with_duration_ms(duration_ms)
        .with_source_url(format!("/audio/previews/{id}.mp3"))
}

/// Trending tracks for the home page
pub fn trending_tracks() -> Vec<Track> {
    vec![
        preview("trending-1", "Blinding Lights", "The Weeknd", 200_000).with_album("After Hours"),
        preview("trending-2", "Levitating", "Dua Lipa", 203_000).with_album("Future Nostalgia"),
        preview("trending-3", "Good 4 U", "Olivia Rodrigo", 178_000).with_album("Sour"),
        preview("trending-4", "Stay", "The Kid LAROI & Justin Bieber", 141_000),
    ]
}

/// Featured playlists for the home page
pub fn featured_playlists() -> Vec<Playlist> {
    vec![
        Playlist::with_id(PlaylistId::new("featured-1"), "Today's Top Hits").with_tracks(vec![
            preview("trending-1", "Blinding Lights", "The Weeknd", 200_000)
                .with_album("After Hours"),
            preview("trending-2", "Levitating", "Dua Lipa", 203_000).with_album("Future Nostalgia"),
            preview("trending-3", "Good 4 U", "Olivia Rodrigo", 178_000).with_album("Sour"),
            preview("trending-4", "Stay", "The Kid LAROI & Justin Bieber", 141_000),
        ]),
        Playlist::with_id(PlaylistId::new("featured-2"), "Chill Vibes").with_tracks(vec![
            preview("chill-1", "Sunset Lover", "Petit Biscuit", 237_000),
            preview("chill-2", "Night Owl", "Galimatias", 195_000),
            // No preview licensed for this one
            track("chill-3", "Weightless", "Marconi Union").with_album("Weightless"),
        ]),
        Playlist::with_id(PlaylistId::new("featured-3"), "Workout Mix").with_tracks(vec![
            preview("workout-1", "Stronger", "Kanye West", 312_000).with_album("Graduation"),
            preview("workout-2", "Till I Collapse", "Eminem", 297_000).with_album("The Eminem Show"),
            preview("workout-3", "Eye of the Tiger", "Survivor", 245_000),
        ]),
        Playlist::with_id(PlaylistId::new("featured-4"), "Jazz Classics").with_tracks(vec![
            preview("jazz-1", "So What", "Miles Davis", 562_000).with_album("Kind of Blue"),
            preview("jazz-2", "Take Five", "The Dave Brubeck Quartet", 324_000)
                .with_album("Time Out"),
            track("jazz-3", "A Love Supreme, Pt. 1", "John Coltrane").with_album("A Love Supreme"),
        ]),
    ]
}

/// Recommended playlists for the home page
pub fn recommended_playlists() -> Vec<Playlist> {
    vec![
        Playlist::with_id(PlaylistId::new("rec-1"), "Indie Rock Hits").with_tracks(vec![
            preview("indie-1", "Mr. Brightside", "The Killers", 222_000).with_album("Hot Fuss"),
            preview("indie-2", "Do I Wanna Know?", "Arctic Monkeys", 272_000).with_album("AM"),
        ]),
        Playlist::with_id(PlaylistId::new("rec-2"), "Electronic Dreams").with_tracks(vec![
            preview("electronic-1", "Strobe", "deadmau5", 637_000),
            preview("electronic-2", "Midnight City", "M83", 244_000)
                .with_album("Hurry Up, We're Dreaming"),
        ]),
        Playlist::with_id(PlaylistId::new("rec-3"), "Acoustic Sessions").with_tracks(vec![
            preview("acoustic-1", "Skinny Love", "Bon Iver", 238_000).with_album("For Emma, Forever Ago"),
            preview("acoustic-2", "The Night We Met", "Lord Huron", 208_000),
        ]),
        Playlist::with_id(PlaylistId::new("rec-4"), "Hip Hop Central").with_tracks(vec![
            preview("hiphop-1", "HUMBLE.", "Kendrick Lamar", 177_000).with_album("DAMN."),
            preview("hiphop-2", "Sicko Mode", "Travis Scott", 312_000).with_album("Astroworld"),
        ]),
    ]
}
