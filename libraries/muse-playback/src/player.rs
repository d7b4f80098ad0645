//! Playback controller
//!
//! Single authority over what plays next. Owns the audio device, the
//! queue, and the session state (current track, play/pause, volume,
//! shuffle, repeat). All mutation happens through controller methods;
//! the UI observes changes by draining [`PlayerEvent`]s.

use crate::device::{AudioDevice, DeviceSignal};
use crate::error::{PlaybackError, Result};
use crate::events::PlayerEvent;
use crate::queue::Queue;
use crate::types::{Direction, PlaybackState, PlayerConfig, RepeatMode};
use muse_core::Track;
use std::time::Duration;

/// Playback controller
///
/// Commands flow in (user actions via methods, device reports via
/// [`Player::handle_signal`]); events flow out via
/// [`Player::drain_events`]. The device is exclusively owned: nothing
/// else may command it.
pub struct Player {
    /// Audio backend, commanded but never queried
    device: Box<dyn AudioDevice>,

    /// Active track sequence with wraparound navigation
    queue: Queue,

    /// Currently loaded track (None only before the first load)
    current: Option<Track>,

    /// Play/pause state
    state: PlaybackState,

    /// Volume level (0.0 - 1.0), preserved across mute
    volume: f32,

    /// Whether output is muted
    muted: bool,

    /// Whether the queue has been shuffled
    shuffle: bool,

    /// End-of-track policy
    repeat: RepeatMode,

    /// Last position reported by the device
    position: Duration,

    /// Duration of the current track, known once metadata loads
    duration: Option<Duration>,

    /// Events waiting to be drained by the UI
    pending_events: Vec<PlayerEvent>,
}

impl Player {
    /// Create a player driving the given device
    ///
    /// Applies the configured volume to the device immediately.
    pub fn new(mut device: Box<dyn AudioDevice>, config: PlayerConfig) -> Result<Self> {
        let volume = config.volume.clamp(0.0, 1.0);
        device.set_volume(volume)?;

        Ok(Self {
            device,
            queue: Queue::new(),
            current: None,
            state: PlaybackState::Idle,
            volume,
            muted: false,
            shuffle: config.shuffle,
            repeat: config.repeat,
            position: Duration::ZERO,
            duration: None,
            pending_events: Vec::new(),
        })
    }

    // ===== Loading =====

    /// Load a track and start playing it
    ///
    /// Fails with [`PlaybackError::NoAudioSource`] if the track has no
    /// resolvable source URL. On any failure the previous track, queue
    /// position, and play state all stay as they were.
    ///
    /// The queue is not touched: loading a standalone track plays it
    /// over whatever sequence is installed.
    pub fn load_track(&mut self, track: Track) -> Result<()> {
        let url = track
            .source_url
            .clone()
            .ok_or(PlaybackError::NoAudioSource)?;

        self.device.set_source(&url)?;
        self.device.play()?;

        let previous_track_id = self.current.as_ref().map(|t| t.id.as_str().to_string());
        let track_id = track.id.as_str().to_string();

        self.current = Some(track);
        self.position = Duration::ZERO;
        self.duration = None;
        self.state = PlaybackState::Playing;

        self.emit_track_changed(track_id, previous_track_id);
        self.emit_state_changed(PlaybackState::Playing);
        Ok(())
    }

    /// Install a track sequence and play it from the beginning
    ///
    /// Fails with [`PlaybackError::EmptyPlaylist`] if the sequence has
    /// no tracks.
    pub fn load_playlist(&mut self, tracks: Vec<Track>) -> Result<()> {
        self.load_playlist_from(tracks, 0)
    }

    /// Install a track sequence and play it from the given position
    ///
    /// The queue is installed before the first track loads, so a
    /// sourceless entry at the start position leaves the sequence in
    /// place for `next`/`previous` to move off it.
    pub fn load_playlist_from(&mut self, tracks: Vec<Track>, start: usize) -> Result<()> {
        if tracks.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }

        self.queue.set_tracks(tracks, start);
        self.emit_queue_changed();

        let track = self
            .queue
            .current()
            .cloned()
            .ok_or(PlaybackError::EmptyPlaylist)?;
        self.load_track(track)
    }

    // ===== Transport =====

    /// Flip between playing and paused
    ///
    /// Fails with [`PlaybackError::NoTrackLoaded`] before the first
    /// track loads.
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Playing => {
                self.device.pause()?;
                self.state = PlaybackState::Paused;
                self.emit_state_changed(PlaybackState::Paused);
                Ok(())
            }
            PlaybackState::Paused => {
                self.device.play()?;
                self.state = PlaybackState::Playing;
                self.emit_state_changed(PlaybackState::Playing);
                Ok(())
            }
            PlaybackState::Idle => Err(PlaybackError::NoTrackLoaded),
        }
    }

    /// Skip to the next track, wrapping at the end of the queue
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        self.advance(Direction::Next)
    }

    /// Skip to the previous track, wrapping before the start
    pub fn previous(&mut self) -> Result<()> {
        self.advance(Direction::Previous)
    }

    /// Step the queue in the given direction and play the track there
    ///
    /// Does nothing when the queue is empty. The queue position only
    /// moves after the target track loads, so a failed load leaves the
    /// cursor (and the playing track) where it was.
    pub fn advance(&mut self, direction: Direction) -> Result<()> {
        let Some(target) = self.queue.step(direction) else {
            return Ok(());
        };
        let Some(track) = self.queue.get(target).cloned() else {
            return Ok(());
        };

        self.load_track(track)?;
        self.queue.commit(target);
        Ok(())
    }

    // ===== Modes =====

    /// Flip shuffle on or off
    ///
    /// Turning shuffle on permutes the queue and re-points the cursor
    /// at the current track. Turning it off leaves the shuffled order
    /// in place; there is no original order to restore.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;

        if self.shuffle && !self.queue.is_empty() {
            let keep = self.current.as_ref().map(|t| t.id.clone());
            self.queue.reshuffle_keeping(keep.as_ref());
            self.emit_queue_changed();
        }

        self.emit_mode_changed();
    }

    /// Advance repeat through off -> all -> one -> off
    pub fn cycle_repeat_mode(&mut self) {
        self.repeat = self.repeat.cycle();
        self.emit_mode_changed();
    }

    // ===== Seeking and volume =====

    /// Seek to a fraction of the current track's duration
    ///
    /// Fails with [`PlaybackError::NoTrackLoaded`] if no track is
    /// loaded or the device has not yet reported a duration. The
    /// fraction is clamped to [0.0, 1.0].
    pub fn seek_to_fraction(&mut self, fraction: f32) -> Result<()> {
        if self.current.is_none() {
            return Err(PlaybackError::NoTrackLoaded);
        }
        let duration = self.duration.ok_or(PlaybackError::NoTrackLoaded)?;

        let fraction = fraction.clamp(0.0, 1.0);
        let position = duration.mul_f32(fraction);

        self.device.set_position(position)?;
        self.position = position;
        self.emit_position_update();
        Ok(())
    }

    /// Set the volume level, clamped to [0.0, 1.0]
    ///
    /// The stored level survives mute; the device receives zero while
    /// muted.
    pub fn set_volume(&mut self, volume: f32) -> Result<()> {
        self.volume = volume.clamp(0.0, 1.0);
        self.apply_volume()?;
        self.emit_volume_changed();
        Ok(())
    }

    /// Flip mute, restoring the pre-mute level on unmute
    pub fn toggle_mute(&mut self) -> Result<()> {
        self.muted = !self.muted;
        self.apply_volume()?;
        self.emit_volume_changed();
        Ok(())
    }

    /// Forward the effective volume to the device
    fn apply_volume(&mut self) -> Result<()> {
        let effective = if self.muted { 0.0 } else { self.volume };
        self.device.set_volume(effective)
    }

    // ===== Device signals =====

    /// React to a signal from the audio device
    ///
    /// This is the single entry point for everything the device
    /// reports. Signals must be delivered in the order the device
    /// emitted them.
    ///
    /// Device errors are surfaced as a [`PlayerEvent::Error`] notice;
    /// the player neither retries nor skips to the next track.
    pub fn handle_signal(&mut self, signal: DeviceSignal) -> Result<()> {
        match signal {
            DeviceSignal::MetadataLoaded { duration } => {
                self.duration = Some(duration);
                self.emit_position_update();
                Ok(())
            }
            DeviceSignal::TimeUpdate { position } => {
                self.position = position;
                self.emit_position_update();
                Ok(())
            }
            DeviceSignal::Ended => self.handle_track_ended(),
            DeviceSignal::Error { message } => {
                self.emit_error(message);
                Ok(())
            }
        }
    }

    /// End-of-track policy, driven by the repeat mode
    ///
    /// Repeat-one replays the same track from zero. Repeat-all always
    /// advances, wrapping at the end. Off advances unless the cursor
    /// sits on the last track, in which case playback pauses with the
    /// cursor unchanged.
    fn handle_track_ended(&mut self) -> Result<()> {
        let Some(track_id) = self.current.as_ref().map(|t| t.id.as_str().to_string()) else {
            // Stray signal with nothing loaded
            return Ok(());
        };
        self.emit_track_finished(track_id);

        match self.repeat {
            RepeatMode::One => {
                self.device.set_position(Duration::ZERO)?;
                self.device.play()?;
                self.position = Duration::ZERO;
                self.emit_position_update();
                Ok(())
            }
            RepeatMode::All => {
                if self.queue.is_empty() {
                    self.pause_at_end();
                    Ok(())
                } else {
                    self.advance(Direction::Next)
                }
            }
            RepeatMode::Off => {
                if self.queue.is_empty() || self.queue.is_last() {
                    self.pause_at_end();
                    Ok(())
                } else {
                    self.advance(Direction::Next)
                }
            }
        }
    }

    /// Stop playing without moving the cursor
    fn pause_at_end(&mut self) {
        self.state = PlaybackState::Paused;
        self.emit_state_changed(PlaybackState::Paused);
    }

    // ===== State queries =====

    /// Current playback state
    pub fn get_state(&self) -> PlaybackState {
        self.state
    }

    /// Currently loaded track
    pub fn get_current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Tracks in the active queue, in play order
    pub fn get_queue(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Cursor position in the active queue
    pub fn get_queue_index(&self) -> usize {
        self.queue.index()
    }

    /// Number of tracks in the active queue
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Volume level (0.0 - 1.0), regardless of mute
    pub fn get_volume(&self) -> f32 {
        self.volume
    }

    /// Whether output is muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether shuffle is enabled
    pub fn get_shuffle(&self) -> bool {
        self.shuffle
    }

    /// Current repeat mode
    pub fn get_repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Last playback position reported by the device
    pub fn get_position(&self) -> Duration {
        self.position
    }

    /// Duration of the current track, if metadata has loaded
    pub fn get_duration(&self) -> Option<Duration> {
        self.duration
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event emitted since the last drain. The UI should
    /// call this after each command or forwarded device signal to stay
    /// in sync.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Emit a state changed event
    fn emit_state_changed(&mut self, state: PlaybackState) {
        self.pending_events.push(PlayerEvent::StateChanged { state });
    }

    /// Emit a track changed event
    fn emit_track_changed(&mut self, track_id: String, previous_track_id: Option<String>) {
        self.pending_events.push(PlayerEvent::TrackChanged {
            track_id,
            previous_track_id,
        });
    }

    /// Emit a track finished event
    fn emit_track_finished(&mut self, track_id: String) {
        self.pending_events
            .push(PlayerEvent::TrackFinished { track_id });
    }

    /// Emit a position update event
    fn emit_position_update(&mut self) {
        self.pending_events.push(PlayerEvent::PositionUpdate {
            position_ms: self.position.as_millis() as u64,
            duration_ms: self.duration.unwrap_or(Duration::ZERO).as_millis() as u64,
        });
    }

    /// Emit a volume changed event
    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlayerEvent::VolumeChanged {
            volume: self.volume,
            is_muted: self.muted,
        });
    }

    /// Emit a queue changed event
    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Emit a mode changed event
    fn emit_mode_changed(&mut self) {
        self.pending_events.push(PlayerEvent::ModeChanged {
            shuffle: self.shuffle,
            repeat: self.repeat,
        });
    }

    /// Emit an error event
    fn emit_error(&mut self, message: String) {
        self.pending_events.push(PlayerEvent::Error { message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::NullDevice;
    use muse_core::TrackId;

    fn create_player() -> Player {
        Player::new(Box::new(NullDevice::new()), PlayerConfig::default()).unwrap()
    }

    fn create_test_track(id: &str) -> Track {
        Track::new(format!("Track {id}"), "Test Artist")
            .with_id(TrackId::new(id))
            .with_source_url(format!("/audio/{id}.mp3"))
    }

    #[test]
    fn new_player_is_idle() {
        let player = create_player();
        assert_eq!(player.get_state(), PlaybackState::Idle);
        assert_eq!(player.get_volume(), 0.5);
        assert!(player.get_queue().is_empty());
        assert!(player.get_current_track().is_none());
    }

    #[test]
    fn set_volume_clamps() {
        let mut player = create_player();

        player.set_volume(1.5).unwrap();
        assert_eq!(player.get_volume(), 1.0);

        player.set_volume(-0.2).unwrap();
        assert_eq!(player.get_volume(), 0.0);
    }

    #[test]
    fn mute_preserves_level() {
        let mut player = create_player();
        player.set_volume(0.7).unwrap();

        player.toggle_mute().unwrap();
        assert!(player.is_muted());
        assert_eq!(player.get_volume(), 0.7);

        player.toggle_mute().unwrap();
        assert!(!player.is_muted());
        assert_eq!(player.get_volume(), 0.7);
    }

    #[test]
    fn toggle_play_pause_requires_track() {
        let mut player = create_player();
        let result = player.toggle_play_pause();
        assert!(matches!(result, Err(PlaybackError::NoTrackLoaded)));
    }

    #[test]
    fn load_track_without_source_fails_cleanly() {
        let mut player = create_player();
        let sourceless = Track::new("Unplayable", "Nobody");

        let result = player.load_track(sourceless);

        assert!(matches!(result, Err(PlaybackError::NoAudioSource)));
        assert_eq!(player.get_state(), PlaybackState::Idle);
        assert!(player.get_current_track().is_none());
    }

    #[test]
    fn load_empty_playlist_fails() {
        let mut player = create_player();
        let result = player.load_playlist(Vec::new());
        assert!(matches!(result, Err(PlaybackError::EmptyPlaylist)));
    }

    #[test]
    fn load_playlist_starts_first_track() {
        let mut player = create_player();
        let tracks = vec![create_test_track("a"), create_test_track("b")];

        player.load_playlist(tracks).unwrap();

        assert_eq!(player.get_state(), PlaybackState::Playing);
        assert_eq!(player.get_queue_index(), 0);
        assert_eq!(player.get_current_track().unwrap().id.as_str(), "a");
    }

    #[test]
    fn load_playlist_emits_queue_track_and_state_events() {
        let mut player = create_player();
        player
            .load_playlist(vec![create_test_track("a"), create_test_track("b")])
            .unwrap();

        let events = player.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, PlayerEvent::QueueChanged { length: 2 })));
        assert!(events
            .iter()
            .any(|e| matches!(e, PlayerEvent::TrackChanged { track_id, .. } if track_id == "a")));
        assert!(events.iter().any(|e| matches!(
            e,
            PlayerEvent::StateChanged {
                state: PlaybackState::Playing
            }
        )));
        assert!(!player.has_pending_events());
    }

    #[test]
    fn advance_on_empty_queue_is_noop() {
        let mut player = create_player();

        player.next().unwrap();
        player.previous().unwrap();

        assert_eq!(player.get_state(), PlaybackState::Idle);
    }

    #[test]
    fn cycle_repeat_modes() {
        let mut player = create_player();
        assert_eq!(player.get_repeat(), RepeatMode::Off);

        player.cycle_repeat_mode();
        assert_eq!(player.get_repeat(), RepeatMode::All);

        player.cycle_repeat_mode();
        assert_eq!(player.get_repeat(), RepeatMode::One);

        player.cycle_repeat_mode();
        assert_eq!(player.get_repeat(), RepeatMode::Off);
    }

    #[test]
    fn seek_requires_known_duration() {
        let mut player = create_player();
        player.load_playlist(vec![create_test_track("a")]).unwrap();

        let result = player.seek_to_fraction(0.5);
        assert!(matches!(result, Err(PlaybackError::NoTrackLoaded)));

        player
            .handle_signal(DeviceSignal::MetadataLoaded {
                duration: Duration::from_secs(200),
            })
            .unwrap();

        player.seek_to_fraction(0.5).unwrap();
        assert_eq!(player.get_position(), Duration::from_secs(100));
    }

    #[test]
    fn device_error_signal_is_a_notice() {
        let mut player = create_player();
        player.load_playlist(vec![create_test_track("a")]).unwrap();
        player.drain_events();

        player
            .handle_signal(DeviceSignal::Error {
                message: "decode failed".to_string(),
            })
            .unwrap();

        assert_eq!(player.get_state(), PlaybackState::Playing);
        let events = player.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], PlayerEvent::Error { message } if message == "decode failed"));
    }
}
