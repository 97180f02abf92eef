#![allow(clippy::float_cmp)]

use std::rc::Rc;

use super::*;
use crate::prefs::store::{MemoryStore, StoreError};

fn prefs_with(entries: &[(&str, &str)]) -> (Rc<MemoryStore>, Preferences) {
    let store = Rc::new(MemoryStore::with_entries(entries.iter().copied()));
    let prefs = Preferences::new(store.clone());
    (store, prefs)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn missing_keys_read_as_no_preference() {
    let (_, prefs) = prefs_with(&[]);
    assert!(!prefs.dark_mode());
    assert!(!prefs.music_enabled());
    assert_eq!(prefs.music_volume(), None);
    assert_eq!(prefs.track_index(), None);
}

#[test]
fn unparsable_values_read_as_no_preference() {
    let (_, prefs) = prefs_with(&[("musicVolume", "loud"), ("trackIndex", "-2"), ("musicEnabled", "yes")]);
    assert_eq!(prefs.music_volume(), None);
    assert_eq!(prefs.track_index(), None);
    assert!(!prefs.music_enabled());
}

#[test]
fn nan_volume_reads_as_no_preference() {
    let (_, prefs) = prefs_with(&[("musicVolume", "NaN")]);
    assert_eq!(prefs.music_volume(), None);
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn dark_mode_accepts_legacy_enabled_value() {
    let (_, prefs) = prefs_with(&[("darkMode", "enabled")]);
    assert!(prefs.dark_mode());
}

#[test]
fn volume_is_clamped_into_unit_range() {
    let (_, prefs) = prefs_with(&[("musicVolume", "1.7")]);
    assert_eq!(prefs.music_volume(), Some(1.0));
}

#[test]
fn track_index_parses_trimmed_integer() {
    let (_, prefs) = prefs_with(&[("trackIndex", " 2 ")]);
    assert_eq!(prefs.track_index(), Some(2));
}

// =============================================================
// Writes
// =============================================================

#[test]
fn writes_use_string_encoding() {
    let (store, prefs) = prefs_with(&[]);
    prefs.set_dark_mode(true);
    prefs.set_music_enabled(false);
    prefs.set_music_volume(0.25);
    prefs.set_track_index(3);
    assert_eq!(store.get("darkMode").as_deref(), Some("true"));
    assert_eq!(store.get("musicEnabled").as_deref(), Some("false"));
    assert_eq!(store.get("musicVolume").as_deref(), Some("0.25"));
    assert_eq!(store.get("trackIndex").as_deref(), Some("3"));
}

struct FullStore;

impl PreferenceStore for FullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write { key: key.to_owned(), reason: "quota".to_owned() })
    }
}

#[test]
fn failed_writes_are_absorbed() {
    let prefs = Preferences::new(Rc::new(FullStore));
    prefs.set_dark_mode(true);
    prefs.set_music_volume(0.1);
    assert!(!prefs.dark_mode());
}
