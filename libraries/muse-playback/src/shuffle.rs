//! Queue randomization
//!
//! Uniform random permutation via Fisher-Yates. Every ordering of the
//! queue is equally likely, including orderings where the same artist
//! plays back to back.

use muse_core::Track;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Shuffle a slice of tracks in place
pub fn shuffle_tracks(tracks: &mut [Track]) {
    let mut rng = thread_rng();
    tracks.shuffle(&mut rng);
}
