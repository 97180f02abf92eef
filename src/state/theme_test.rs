use std::rc::Rc;

use super::*;
use crate::prefs::{MemoryStore, PreferenceStore};

fn controller(entries: &[(&str, &str)]) -> (Rc<MemoryStore>, ThemeController) {
    let store = Rc::new(MemoryStore::with_entries(entries.iter().copied()));
    let theme = ThemeController::new(Preferences::new(store.clone()));
    (store, theme)
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn defaults_to_light_with_moon_icon() {
    let (_, theme) = controller(&[]);
    let view = theme.view();
    assert!(!view.dark);
    assert_eq!(view.icon, ThemeIcon::Moon);
    assert_eq!(view.body_class(), None);
}

#[test]
fn restores_saved_dark_mode() {
    let (_, theme) = controller(&[("darkMode", "true")]);
    assert_eq!(theme.view(), ThemeView { dark: true, icon: ThemeIcon::Sun });
    assert_eq!(theme.view().body_class(), Some(DARK_CLASS));
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_and_persists() {
    let (store, mut theme) = controller(&[]);
    let view = theme.toggle();
    assert!(view.dark);
    assert_eq!(view.icon.class(), "fa-sun");
    assert_eq!(store.get("darkMode").as_deref(), Some("true"));
}

#[test]
fn toggling_twice_round_trips() {
    let (store, mut theme) = controller(&[("darkMode", "false")]);
    let original = theme.view();
    theme.toggle();
    let after = theme.toggle();
    assert_eq!(after, original);
    assert_eq!(after.body_class(), None);
    assert_eq!(store.get("darkMode").as_deref(), Some("false"));
}

#[test]
fn icon_timeline_settles_after_delay() {
    let timeline = ThemeController::icon_timeline(150);
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.steps()[1].delay_ms, 150);
    assert_eq!(timeline.steps()[1].action, IconAnimation::Settle);
}

#[test]
fn apply_to_document_is_callable_headless() {
    apply_to_document(ThemeView::for_mode(true));
}
