//! Page loader and skill bar levels.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::Timings;
use crate::util::schedule::Timeline;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageStep {
    /// Fade out the loader overlay.
    HideLoader,
    /// Grow skill bars to their level.
    AnimateSkills,
    /// Begin typing the hero headline.
    StartTyping,
}

/// Steps run once the window `load` event fires.
#[must_use]
pub fn load_timeline(timings: &Timings) -> Timeline<PageStep> {
    Timeline::new()
        .then(timings.loader_ms, PageStep::HideLoader)
        .then(0, PageStep::AnimateSkills)
        .then(0, PageStep::StartTyping)
}

/// Bar level (0-100) for a label such as `"85%"`.
#[must_use]
pub fn skill_percent(label: &str) -> Option<f64> {
    let value: f64 = label.trim().trim_end_matches('%').trim().parse().ok()?;
    value.is_finite().then(|| value.clamp(0.0, 100.0))
}

/// Width style for a skill bar, collapsed until skills animate.
#[must_use]
pub fn skill_bar_style(percent: f64, animated: bool) -> String {
    if animated { format!("width: {percent}%;") } else { "width: 0%;".to_owned() }
}
