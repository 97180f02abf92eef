//! Background music player.
//!
//! DESIGN
//! ======
//! `MediaPlayer` owns the audio sink and the `PlayerState` snapshot and is the
//! only code that mutates either. Starting playback is asynchronous in the
//! browser (the element's `play()` promise may be refused by autoplay
//! policy), so it is split into `request_play`, which issues the start and
//! hands back a `PlayRequest` that borrows nothing, and `resolve_play`, which
//! applies the outcome. Callers can therefore await the request without
//! holding a borrow of the player.
//!
//! Every request and every pause bumps a generation counter. A resolution
//! carrying an older generation was superseded; it only resynchronises
//! `is_playing` from the sink and persists nothing.
//!
//! A pause caused by dragging the volume to zero is a mute: it stops the sink
//! but keeps the persisted `musicEnabled` flag so raising the volume again
//! resumes the music.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use futures::future::LocalBoxFuture;

use crate::config::{MusicConfig, Track};
use crate::prefs::Preferences;
use crate::util::audio::AudioSink;
use crate::util::schedule::{Scheduler, with_timeout};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlayerError {
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),
    #[error("track {index} is out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("volume {0} is not a number")]
    VolumeOutOfRange(f64),
}

/// Observable player state.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub current_track_index: usize,
    pub volume: f64,
    pub is_playing: bool,
    pub position_seconds: f64,
}

/// Identifies the play request a resolution belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayTicket(u64);

/// An issued playback start awaiting its outcome.
pub struct PlayRequest {
    pub ticket: PlayTicket,
    pub outcome: LocalBoxFuture<'static, Result<(), String>>,
}

impl PlayRequest {
    /// Await the outcome, turning a start that takes longer than
    /// `timeout_ms` into a rejection.
    pub async fn settle(self, scheduler: &dyn Scheduler, timeout_ms: u32) -> (PlayTicket, Result<(), String>) {
        let outcome = match with_timeout(scheduler, timeout_ms, self.outcome).await {
            Ok(outcome) => outcome,
            Err(elapsed) => Err(elapsed.to_string()),
        };
        (self.ticket, outcome)
    }
}

pub struct MediaPlayer {
    sink: Box<dyn AudioSink>,
    prefs: Preferences,
    tracks: Vec<Track>,
    default_track_index: usize,
    default_volume: f64,
    state: PlayerState,
    generation: u64,
    resume_armed: bool,
}

impl MediaPlayer {
    pub fn new(sink: Box<dyn AudioSink>, prefs: Preferences, music: &MusicConfig) -> Self {
        let default_track_index =
            if music.default_track_index < music.tracks.len() { music.default_track_index } else { 0 };
        Self {
            sink,
            prefs,
            tracks: music.tracks.clone(),
            default_track_index,
            default_volume: music.default_volume,
            state: PlayerState {
                current_track_index: default_track_index,
                volume: music.default_volume,
                is_playing: false,
                position_seconds: 0.0,
            },
            generation: 0,
            resume_armed: false,
        }
    }

    /// Restore volume and track from preferences and bind the track source.
    ///
    /// Returns `true` when music was enabled on the previous visit and the
    /// restored volume is audible; the first user interaction will then
    /// attempt to resume it (see `on_user_interaction`), since browsers
    /// refuse unsolicited playback. A muted player stays stopped.
    pub fn initialize(&mut self) -> bool {
        let volume = self.prefs.music_volume().unwrap_or(self.default_volume);
        self.sink.set_volume(volume);
        self.state.volume = volume;

        let index = self
            .prefs
            .track_index()
            .filter(|i| *i < self.tracks.len())
            .unwrap_or(self.default_track_index);
        if let Some(track) = self.tracks.get(index) {
            self.sink.set_src(&track.src);
        }
        self.state.current_track_index = index;
        self.state.is_playing = !self.sink.is_paused();

        self.resume_armed = self.prefs.music_enabled() && volume > 0.0;
        log::debug!("music player ready: track={index} volume={volume} resume_armed={}", self.resume_armed);
        self.resume_armed
    }

    /// Current state, with the position read from the sink.
    #[must_use]
    pub fn state(&self) -> PlayerState {
        PlayerState { position_seconds: self.sink.current_time(), ..self.state.clone() }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[must_use]
    pub fn active_track(&self) -> Option<&Track> {
        self.tracks.get(self.state.current_track_index)
    }

    #[must_use]
    pub fn resume_armed(&self) -> bool {
        self.resume_armed
    }

    /// Issue a playback start. Apply the outcome with `resolve_play`.
    pub fn request_play(&mut self) -> PlayRequest {
        self.generation += 1;
        self.resume_armed = false;
        PlayRequest { ticket: PlayTicket(self.generation), outcome: self.sink.play() }
    }

    /// Apply the outcome of a playback start.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::PlaybackRejected` when the start was refused or
    /// timed out; the player is then stopped and music is marked disabled.
    pub fn resolve_play(&mut self, ticket: PlayTicket, outcome: Result<(), String>) -> Result<(), PlayerError> {
        if ticket.0 != self.generation {
            self.state.is_playing = !self.sink.is_paused();
            log::debug!("superseded play request resolved; playing={}", self.state.is_playing);
            return Ok(());
        }
        match outcome {
            Ok(()) => {
                self.state.is_playing = true;
                self.prefs.set_music_enabled(true);
                Ok(())
            }
            Err(reason) => {
                log::info!("playback prevented: {reason}");
                self.sink.pause();
                self.state.is_playing = false;
                self.prefs.set_music_enabled(false);
                Err(PlayerError::PlaybackRejected(reason))
            }
        }
    }

    /// Stop playback and remember that music is off.
    pub fn pause(&mut self) {
        self.halt();
        self.prefs.set_music_enabled(false);
    }

    /// Music toggle button: pause when playing, otherwise start.
    pub fn toggle(&mut self) -> Option<PlayRequest> {
        if self.sink.is_paused() {
            Some(self.request_play())
        } else {
            self.pause();
            None
        }
    }

    /// Switch to track `index`, keeping the playhead and resuming playback if
    /// it was active.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::IndexOutOfRange` without touching any state when
    /// `index` does not address a track.
    pub fn select_track(&mut self, index: usize) -> Result<Option<PlayRequest>, PlayerError> {
        let len = self.tracks.len();
        let Some(track) = self.tracks.get(index) else {
            return Err(PlayerError::IndexOutOfRange { index, len });
        };

        let was_playing = !self.sink.is_paused();
        let position = self.sink.current_time();
        self.sink.set_src(&track.src);
        self.sink.set_current_time(position);
        self.state.current_track_index = index;
        self.state.is_playing = !self.sink.is_paused();
        self.prefs.set_track_index(index);

        if was_playing { Ok(Some(self.request_play())) } else { Ok(None) }
    }

    /// Track list click: select the track and make sure music is playing.
    ///
    /// # Errors
    ///
    /// Same as `select_track`.
    pub fn choose_track(&mut self, index: usize) -> Result<Option<PlayRequest>, PlayerError> {
        let request = self.select_track(index)?;
        if request.is_none() && self.sink.is_paused() {
            return Ok(Some(self.request_play()));
        }
        Ok(request)
    }

    /// Apply and persist a new volume. Zero mutes (pauses without disabling
    /// music); any positive volume resumes music that was enabled but paused.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::VolumeOutOfRange` for NaN or infinite input.
    pub fn set_volume(&mut self, volume: f64) -> Result<Option<PlayRequest>, PlayerError> {
        if !volume.is_finite() {
            return Err(PlayerError::VolumeOutOfRange(volume));
        }
        let volume = volume.clamp(0.0, 1.0);
        self.sink.set_volume(volume);
        self.state.volume = volume;
        self.prefs.set_music_volume(volume);

        if volume <= 0.0 {
            self.resume_armed = false;
            self.halt();
            return Ok(None);
        }
        if self.sink.is_paused() && self.prefs.music_enabled() {
            return Ok(Some(self.request_play()));
        }
        Ok(None)
    }

    /// First user gesture on the page. Yields the deferred resume attempt
    /// once, if `initialize` armed one and nothing started playback since.
    pub fn on_user_interaction(&mut self) -> Option<PlayRequest> {
        if !self.resume_armed {
            return None;
        }
        Some(self.request_play())
    }

    fn halt(&mut self) {
        self.generation += 1;
        self.sink.pause();
        self.state.is_playing = false;
    }
}
