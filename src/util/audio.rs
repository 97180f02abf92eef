//! Audio output behind a small trait so the player runs without a browser.
//!
//! Browser (`csr`): `ElementSink` drives an `HTMLAudioElement`, whose
//! `play()` promise rejects under autoplay policy until the user interacts.
//! Headless and tests: `MemorySink` mimics the element's observable state
//! (paused flag, volume, position, source) with a configurable play outcome.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

use std::cell::{Cell, RefCell};

use futures::future::LocalBoxFuture;

/// The audio element operations the media player depends on.
pub trait AudioSink {
    /// Request playback. Resolves once the start succeeded or was refused.
    fn play(&self) -> LocalBoxFuture<'static, Result<(), String>>;
    fn pause(&self);
    fn is_paused(&self) -> bool;
    fn volume(&self) -> f64;
    fn set_volume(&self, volume: f64);
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    fn src(&self) -> String;
    /// Rebind the source. Like a media element, this stops playback and
    /// rewinds to the start.
    fn set_src(&self, src: &str);
}

/// How `MemorySink::play` answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    Accept,
    Reject(String),
    /// Never resolves, like a stalled network source.
    Hang,
}

/// In-memory audio sink.
#[derive(Debug)]
pub struct MemorySink {
    paused: Cell<bool>,
    volume: Cell<f64>,
    current_time: Cell<f64>,
    src: RefCell<String>,
    outcome: RefCell<PlayOutcome>,
    play_calls: Cell<usize>,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self {
            paused: Cell::new(true),
            volume: Cell::new(1.0),
            current_time: Cell::new(0.0),
            src: RefCell::new(String::new()),
            outcome: RefCell::new(PlayOutcome::Accept),
            play_calls: Cell::new(0),
        }
    }
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_outcome(&self, outcome: PlayOutcome) {
        *self.outcome.borrow_mut() = outcome;
    }

    /// Advance the playhead, as if audio had been playing for `seconds`.
    pub fn advance(&self, seconds: f64) {
        self.current_time.set(self.current_time.get() + seconds);
    }

    #[must_use]
    pub fn play_calls(&self) -> usize {
        self.play_calls.get()
    }
}

impl AudioSink for MemorySink {
    fn play(&self) -> LocalBoxFuture<'static, Result<(), String>> {
        self.play_calls.set(self.play_calls.get() + 1);
        match self.outcome.borrow().clone() {
            PlayOutcome::Accept => {
                self.paused.set(false);
                Box::pin(futures::future::ready(Ok(())))
            }
            PlayOutcome::Reject(reason) => Box::pin(futures::future::ready(Err(reason))),
            PlayOutcome::Hang => Box::pin(futures::future::pending()),
        }
    }

    fn pause(&self) {
        self.paused.set(true);
    }

    fn is_paused(&self) -> bool {
        self.paused.get()
    }

    fn volume(&self) -> f64 {
        self.volume.get()
    }

    fn set_volume(&self, volume: f64) {
        self.volume.set(volume);
    }

    fn current_time(&self) -> f64 {
        self.current_time.get()
    }

    fn set_current_time(&self, seconds: f64) {
        self.current_time.set(seconds);
    }

    fn src(&self) -> String {
        self.src.borrow().clone()
    }

    fn set_src(&self, src: &str) {
        *self.src.borrow_mut() = src.to_owned();
        self.paused.set(true);
        self.current_time.set(0.0);
    }
}

/// `HTMLAudioElement` backed sink.
#[cfg(feature = "csr")]
#[derive(Debug, Clone)]
pub struct ElementSink {
    audio: web_sys::HtmlAudioElement,
}

#[cfg(feature = "csr")]
impl ElementSink {
    /// Create a detached, looping audio element.
    ///
    /// # Errors
    ///
    /// Returns the DOM error message if the element cannot be constructed.
    pub fn new() -> Result<Self, String> {
        let audio = web_sys::HtmlAudioElement::new().map_err(|e| format!("{e:?}"))?;
        audio.set_loop(true);
        audio.set_preload("auto");
        Ok(Self { audio })
    }
}

#[cfg(feature = "csr")]
impl AudioSink for ElementSink {
    fn play(&self) -> LocalBoxFuture<'static, Result<(), String>> {
        match self.audio.play() {
            Ok(promise) => Box::pin(async move {
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|e| format!("{e:?}"))
            }),
            Err(e) => Box::pin(futures::future::ready(Err(format!("{e:?}")))),
        }
    }

    fn pause(&self) {
        if let Err(e) = self.audio.pause() {
            log::warn!("audio pause failed: {e:?}");
        }
    }

    fn is_paused(&self) -> bool {
        self.audio.paused()
    }

    fn volume(&self) -> f64 {
        self.audio.volume()
    }

    fn set_volume(&self, volume: f64) {
        self.audio.set_volume(volume);
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn src(&self) -> String {
        self.audio.src()
    }

    fn set_src(&self, src: &str) {
        self.audio.set_src(src);
    }
}
