//! Site configuration parsed from the embedded `config/site.json`.
//!
//! DESIGN
//! ======
//! Every field carries a default so a partial file still yields a usable
//! config. Parsing is followed by validation of the invariants the player
//! relies on (a non-empty track list and an in-range default track).
//!
//! ERROR HANDLING
//! ==============
//! `SiteConfig::load` never fails: a broken embedded file logs a warning and
//! falls back to `SiteConfig::default()` so the page keeps working.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

const EMBEDDED_SITE_CONFIG: &str = include_str!("../config/site.json");

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_TRACK_INDEX: usize = 4;
pub const DEFAULT_VOLUME: f64 = 0.5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config declares no music tracks")]
    NoTracks,
    #[error("default track {index} is outside the {len} configured tracks")]
    DefaultTrackOutOfRange { index: usize, len: usize },
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub headline: String,
    pub relay: RelayConfig,
    pub music: MusicConfig,
    pub scroll: ScrollConfig,
    pub timings: Timings,
    pub sections: Vec<SectionLink>,
    pub filters: Vec<FilterButton>,
    pub particles: ParticleConfig,
}

impl SiteConfig {
    /// Load the embedded site config, falling back to defaults when it is
    /// unusable.
    #[must_use]
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_SITE_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("falling back to default site config: {e}");
                Self::default()
            }
        }
    }

    /// Parse and validate a site config document.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the JSON is malformed, the track list is
    /// empty, or the default track index does not address a track.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        config.music.default_volume = clamp_volume(config.music.default_volume);
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let len = self.music.tracks.len();
        if len == 0 {
            return Err(ConfigError::NoTracks);
        }
        if self.music.default_track_index >= len {
            return Err(ConfigError::DefaultTrackOutOfRange { index: self.music.default_track_index, len });
        }
        Ok(())
    }
}

fn clamp_volume(volume: f64) -> f64 {
    if volume.is_finite() { volume.clamp(0.0, 1.0) } else { DEFAULT_VOLUME }
}

/// Mail relay (EmailJS) credentials and limits.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub timeout_ms: u32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_owned(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_ms: 15_000,
        }
    }
}

impl RelayConfig {
    /// True when every credential needed by the real relay is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.service_id.trim().is_empty()
            && !self.template_id.trim().is_empty()
            && !self.public_key.trim().is_empty()
    }
}

/// One entry of the background music track list.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub src: String,
}

impl Track {
    fn new(title: &str, src: &str) -> Self {
        Self { title: title.to_owned(), src: src.to_owned() }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MusicConfig {
    pub tracks: Vec<Track>,
    pub default_track_index: usize,
    pub default_volume: f64,
    pub play_timeout_ms: u32,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            tracks: vec![
                Track::new("Lo-Fi Study", "assets/audio/lofi-study.mp3"),
                Track::new("Ambient Drift", "assets/audio/ambient-drift.mp3"),
                Track::new("Synthwave Nights", "assets/audio/synthwave-nights.mp3"),
                Track::new("Acoustic Morning", "assets/audio/acoustic-morning.mp3"),
                Track::new("Chill Beats", "assets/audio/chill-beats.mp3"),
                Track::new("Late Night Jazz", "assets/audio/late-night-jazz.mp3"),
            ],
            default_track_index: DEFAULT_TRACK_INDEX,
            default_volume: DEFAULT_VOLUME,
            play_timeout_ms: 10_000,
        }
    }
}

/// Offsets used by the scroll tracker and anchor navigation.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    pub section_threshold: f64,
    pub reveal_margin: f64,
    pub nav_offset: f64,
    pub compact_after: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { section_threshold: 200.0, reveal_margin: 50.0, nav_offset: 70.0, compact_after: 50.0 }
    }
}

/// Delays (milliseconds) for staged UI transitions.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Timings {
    pub loader_ms: u32,
    pub theme_icon_ms: u32,
    pub typing_start_ms: u32,
    pub typing_char_ms: u32,
    pub status_visible_ms: u32,
    pub status_fade_ms: u32,
    pub filter_hide_ms: u32,
    pub filter_show_ms: u32,
    pub simulated_relay_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            loader_ms: 500,
            theme_icon_ms: 150,
            typing_start_ms: 1000,
            typing_char_ms: 75,
            status_visible_ms: 3000,
            status_fade_ms: 500,
            filter_hide_ms: 300,
            filter_show_ms: 50,
            simulated_relay_ms: 1500,
        }
    }
}

/// A navigation link pointing at a page section.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SectionLink {
    pub id: String,
    pub label: String,
}

impl SectionLink {
    /// The in-page anchor (`#id`) this link navigates to.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// A portfolio filter button.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FilterButton {
    pub label: String,
    pub filter: String,
}

/// Background particle field tuning.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: u32,
    pub density_area: f64,
    pub max_speed: f64,
    pub max_radius: f64,
    pub link_distance: f64,
    pub link_opacity: f64,
    pub grab_distance: f64,
    pub push_count: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 80,
            density_area: 800.0,
            max_speed: 2.0,
            max_radius: 3.0,
            link_distance: 150.0,
            link_opacity: 0.2,
            grab_distance: 140.0,
            push_count: 4,
        }
    }
}
