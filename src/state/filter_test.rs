use futures::executor::block_on;

use super::*;
use crate::util::schedule::{ImmediateScheduler, run_timeline};

fn buttons() -> Vec<FilterButton> {
    ["all", "web", "mobile", "design"]
        .into_iter()
        .map(|f| FilterButton { label: f.to_owned(), filter: f.to_owned() })
        .collect()
}

fn filter() -> PortfolioFilter {
    PortfolioFilter::new(
        buttons(),
        vec![
            PortfolioItem::new("Shop", "web"),
            PortfolioItem::new("Tracker", "mobile"),
            PortfolioItem::new("Brand", "design"),
            PortfolioItem::new("Blog", "web"),
        ],
    )
}

fn run(filter: &mut PortfolioFilter, value: &str) -> Vec<u32> {
    let scheduler = ImmediateScheduler::new();
    let timeline = filter.apply(value, &Timings::default());
    block_on(run_timeline(&scheduler, timeline, |step| filter.advance(step)));
    scheduler.requested()
}

// =============================================================
// Matching
// =============================================================

#[test]
fn all_matches_every_category() {
    assert!(matches("all", "web"));
    assert!(matches("web", "web"));
    assert!(!matches("web", "mobile"));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn starts_with_all_active_and_items_shown() {
    let f = filter();
    assert!(f.is_active("all"));
    assert_eq!(f.phase(0), Some(ItemPhase::Shown));
    assert_eq!(f.phase(9), None);
}

#[test]
fn apply_stages_hide_display_reveal() {
    let mut f = filter();
    let timeline = f.apply("web", &Timings::default());
    let delays: Vec<u32> = timeline.steps().iter().map(|s| s.delay_ms).collect();
    assert_eq!(delays, vec![0, 300, 50]);
    assert!(f.is_active("web"));
}

#[test]
fn hide_all_hides_everything_first() {
    let mut f = filter();
    f.apply("mobile", &Timings::default());
    f.advance(FilterStep::HideAll);
    assert!((0..4).all(|i| f.phase(i) == Some(ItemPhase::Hidden)));
}

#[test]
fn display_step_removes_non_matching_items() {
    let mut f = filter();
    f.apply("web", &Timings::default());
    f.advance(FilterStep::HideAll);
    f.advance(FilterStep::Display);
    assert_eq!(f.phase(0), Some(ItemPhase::Pending));
    assert_eq!(f.phase(1), Some(ItemPhase::Removed));
}

#[test]
fn full_run_shows_only_matches() {
    let mut f = filter();
    let requested = run(&mut f, "web");
    assert_eq!(requested, vec![300, 50]);
    let phases: Vec<_> = (0..4).filter_map(|i| f.phase(i)).collect();
    assert_eq!(phases, vec![ItemPhase::Shown, ItemPhase::Removed, ItemPhase::Removed, ItemPhase::Shown]);
}

#[test]
fn returning_to_all_shows_everything() {
    let mut f = filter();
    run(&mut f, "design");
    run(&mut f, "all");
    assert!((0..4).all(|i| f.phase(i) == Some(ItemPhase::Shown)));
}

#[test]
fn removed_style_hides_item() {
    assert!(ItemPhase::Removed.style().starts_with("display: none"));
    assert!(ItemPhase::Hidden.style().contains("scale(0.8)"));
}
