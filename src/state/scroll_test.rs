use super::*;

fn tracker() -> ScrollTracker {
    let mut tracker = ScrollTracker::new(ScrollConfig::default());
    tracker.set_sections(vec![
        Section::new("home", 0.0),
        Section::new("about", 800.0),
        Section::new("portfolio", 1600.0),
        Section::new("contact", 2400.0),
    ]);
    tracker
}

// =============================================================
// Active section
// =============================================================

#[test]
fn top_of_page_activates_first_section() {
    let mut t = tracker();
    assert_eq!(t.tick(0.0, 900.0).active_section.as_deref(), Some("home"));
}

#[test]
fn threshold_activates_section_early() {
    let mut t = tracker();
    assert_eq!(t.tick(599.0, 900.0).active_section.as_deref(), Some("home"));
    assert_eq!(t.tick(600.0, 900.0).active_section.as_deref(), Some("about"));
}

#[test]
fn no_section_active_before_first_qualifies() {
    let mut t = ScrollTracker::new(ScrollConfig::default());
    t.set_sections(vec![Section::new("about", 500.0)]);
    let tick = t.tick(100.0, 900.0);
    assert_eq!(tick.active_section, None);
    assert!(!t.link_is_active("#about"));
}

#[test]
fn last_qualifying_section_in_document_order_wins() {
    let sections = vec![Section::new("a", 0.0), Section::new("b", 300.0), Section::new("c", 100.0)];
    assert_eq!(active_section_index(&sections, 150.0, 200.0), Some(2));
}

#[test]
fn at_most_one_link_is_active_for_every_position() {
    let mut t = tracker();
    let hrefs = ["#home", "#about", "#portfolio", "#contact"];
    for step in 0..40 {
        let y = f64::from(step) * 75.0;
        let tick = t.tick(y, 900.0);
        let active = hrefs.iter().filter(|h| t.link_is_active(h)).count();
        assert!(active <= 1);
        assert_eq!(active, usize::from(tick.active_section.is_some()));
    }
}

#[test]
fn ticks_are_idempotent() {
    let mut t = tracker();
    let first = t.tick(1700.0, 900.0);
    let second = t.tick(1700.0, 900.0);
    assert_eq!(first.active_section, second.active_section);
    assert!(second.newly_revealed.is_empty());
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn reveal_triggers_inside_margin() {
    let mut t = tracker();
    let near = t.register_reveal(849.0);
    let far = t.register_reveal(850.0);
    let tick = t.tick(0.0, 900.0);
    assert_eq!(tick.newly_revealed, vec![near]);
    assert!(t.is_revealed(near));
    assert!(!t.is_revealed(far));
}

#[test]
fn reveal_is_monotonic() {
    let mut t = tracker();
    let idx = t.register_reveal(1200.0);
    t.tick(1000.0, 900.0);
    assert!(t.is_revealed(idx));
    for y in [0.0, 5000.0, 10.0] {
        t.tick(y, 900.0);
        assert!(t.is_revealed(idx));
    }
    assert_eq!(t.revealed_count(), 1);
}

#[test]
fn update_reveal_tops_keeps_activation_and_adds_new() {
    let mut t = tracker();
    let idx = t.register_reveal(100.0);
    t.tick(0.0, 900.0);
    t.update_reveal_tops(&[4000.0, 4100.0]);
    assert!(t.is_revealed(idx));
    assert!(!t.is_revealed(1));
}

// =============================================================
// Navbar
// =============================================================

#[test]
fn navbar_compacts_past_threshold() {
    let mut t = tracker();
    assert!(!t.tick(50.0, 900.0).navbar_compact);
    assert!(t.tick(51.0, 900.0).navbar_compact);
}
