//! Playback queue
//!
//! A flat track sequence plus a cursor. Navigation wraps at both ends:
//! stepping past the last track returns to the first, stepping before
//! the first lands on the last. The queue never decides what actually
//! plays; the player peeks with [`Queue::step`] and commits the new
//! position only after the track loads.

use crate::shuffle::shuffle_tracks;
use crate::types::Direction;
use muse_core::{Track, TrackId};

/// Ordered track sequence with a current position
#[derive(Debug, Clone, Default)]
pub struct Queue {
    /// Tracks in play order
    tracks: Vec<Track>,

    /// Current position in `tracks` (0 when empty)
    index: usize,
}

impl Queue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            index: 0,
        }
    }

    /// Replace the queue contents and position the cursor
    ///
    /// The start index is clamped to the last track when out of range.
    pub fn set_tracks(&mut self, tracks: Vec<Track>, start: usize) {
        self.index = if tracks.is_empty() {
            0
        } else {
            start.min(tracks.len() - 1)
        };
        self.tracks = tracks;
    }

    /// All tracks in play order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Track at the given position
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Track at the current position
    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.index)
    }

    /// Current position
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the queue has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Whether the cursor sits on the last track
    ///
    /// An empty queue has no last track, so this returns false.
    pub fn is_last(&self) -> bool {
        !self.tracks.is_empty() && self.index == self.tracks.len() - 1
    }

    /// Compute the neighboring position in the given direction
    ///
    /// Wraps around at both ends. Returns `None` when the queue is empty.
    /// The cursor itself is not moved; call [`Queue::commit`] once the
    /// track at the returned position has actually loaded.
    pub fn step(&self, direction: Direction) -> Option<usize> {
        if self.tracks.is_empty() {
            return None;
        }

        let len = self.tracks.len();
        let next = match direction {
            Direction::Next => (self.index + 1) % len,
            Direction::Previous => {
                if self.index == 0 {
                    len - 1
                } else {
                    self.index - 1
                }
            }
        };
        Some(next)
    }

    /// Move the cursor to a previously computed position
    ///
    /// Out-of-range positions are ignored.
    pub fn commit(&mut self, index: usize) {
        if index < self.tracks.len() {
            self.index = index;
        }
    }

    /// Shuffle the queue in place, keeping one track current
    ///
    /// After the permutation the cursor is re-pointed at `keep` so the
    /// currently playing track stays current. If `keep` is `None` or no
    /// longer present, the cursor is left where it was.
    pub fn reshuffle_keeping(&mut self, keep: Option<&TrackId>) {
        shuffle_tracks(&mut self.tracks);

        if let Some(id) = keep {
            if let Some(position) = self.tracks.iter().position(|t| &t.id == id) {
                self.index = position;
            }
        }
    }
}
