//! Typed accessors over the preference store.
//!
//! Values are stored as strings: booleans as `"true"`/`"false"`, the volume
//! as a decimal float and the track index as a decimal integer. Reads never
//! fail; anything missing or unparsable reads as "no preference" and callers
//! substitute their configured default. Write failures are logged and
//! absorbed so a full or blocked storage never breaks the page.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::rc::Rc;

use super::store::PreferenceStore;

pub const DARK_MODE_KEY: &str = "darkMode";
pub const MUSIC_ENABLED_KEY: &str = "musicEnabled";
pub const MUSIC_VOLUME_KEY: &str = "musicVolume";
pub const TRACK_INDEX_KEY: &str = "trackIndex";

/// Legacy spelling of an enabled dark mode written by older page versions.
const LEGACY_DARK_MODE_ENABLED: &str = "enabled";

#[derive(Clone)]
pub struct Preferences {
    store: Rc<dyn PreferenceStore>,
}

impl Preferences {
    pub fn new(store: Rc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        matches!(self.store.get(DARK_MODE_KEY).as_deref(), Some("true" | LEGACY_DARK_MODE_ENABLED))
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        self.write(DARK_MODE_KEY, bool_str(enabled));
    }

    #[must_use]
    pub fn music_enabled(&self) -> bool {
        self.store.get(MUSIC_ENABLED_KEY).as_deref() == Some("true")
    }

    pub fn set_music_enabled(&self, enabled: bool) {
        self.write(MUSIC_ENABLED_KEY, bool_str(enabled));
    }

    /// Stored volume clamped to `[0, 1]`, or `None` if absent or not a number.
    #[must_use]
    pub fn music_volume(&self) -> Option<f64> {
        let raw = self.store.get(MUSIC_VOLUME_KEY)?;
        let volume = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(volume.clamp(0.0, 1.0))
    }

    pub fn set_music_volume(&self, volume: f64) {
        self.write(MUSIC_VOLUME_KEY, &volume.to_string());
    }

    /// Stored track index, or `None` if absent or not a non-negative integer.
    #[must_use]
    pub fn track_index(&self) -> Option<usize> {
        self.store.get(TRACK_INDEX_KEY)?.trim().parse::<usize>().ok()
    }

    pub fn set_track_index(&self, index: usize) {
        self.write(TRACK_INDEX_KEY, &index.to_string());
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            log::warn!("preference not persisted: {e}");
        }
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
