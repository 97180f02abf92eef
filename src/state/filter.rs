//! Portfolio category filter.
//!
//! Applying a filter marks its button active and stages the item transition:
//! every item shrinks and fades, matching items are displayed after
//! `filter_hide_ms`, then faded back in after `filter_show_ms`.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::config::{FilterButton, Timings};
use crate::util::schedule::Timeline;

/// Filter value that matches every item.
pub const ALL: &str = "all";

/// Visual state of one portfolio item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemPhase {
    /// Displayed at full size and opacity.
    Shown,
    /// Still laid out but scaled to 0.8 and transparent.
    Hidden,
    /// `display: none`.
    Removed,
    /// Displayed but not yet faded in.
    Pending,
}

impl ItemPhase {
    #[must_use]
    pub fn style(self) -> &'static str {
        match self {
            Self::Shown => "display: block; opacity: 1; transform: scale(1);",
            Self::Hidden => "display: block; opacity: 0; transform: scale(0.8);",
            Self::Removed => "display: none; opacity: 0; transform: scale(0.8);",
            Self::Pending => "display: block; opacity: 0; transform: scale(0.8);",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterStep {
    HideAll,
    Display,
    Reveal,
}

/// One portfolio item and its category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub title: String,
    pub category: String,
}

impl PortfolioItem {
    #[must_use]
    pub fn new(title: &str, category: &str) -> Self {
        Self { title: title.to_owned(), category: category.to_owned() }
    }
}

#[must_use]
pub fn matches(filter: &str, category: &str) -> bool {
    filter == ALL || filter == category
}

pub struct PortfolioFilter {
    buttons: Vec<FilterButton>,
    items: Vec<PortfolioItem>,
    phases: Vec<ItemPhase>,
    active: String,
}

impl PortfolioFilter {
    pub fn new(buttons: Vec<FilterButton>, items: Vec<PortfolioItem>) -> Self {
        let phases = vec![ItemPhase::Shown; items.len()];
        Self { buttons, items, phases, active: ALL.to_owned() }
    }

    #[must_use]
    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    #[must_use]
    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    #[must_use]
    pub fn is_active(&self, filter: &str) -> bool {
        self.active == filter
    }

    #[must_use]
    pub fn phase(&self, index: usize) -> Option<ItemPhase> {
        self.phases.get(index).copied()
    }

    /// Activate `filter` and return the staged item transition.
    pub fn apply(&mut self, filter: &str, timings: &Timings) -> Timeline<FilterStep> {
        if !self.buttons.iter().any(|b| b.filter == filter) && filter != ALL {
            log::warn!("unknown portfolio filter '{filter}'");
        }
        self.active = filter.to_owned();
        Timeline::new()
            .then(0, FilterStep::HideAll)
            .then(timings.filter_hide_ms, FilterStep::Display)
            .then(timings.filter_show_ms, FilterStep::Reveal)
    }

    /// Move every item to the phase `step` calls for under the active filter.
    pub fn advance(&mut self, step: FilterStep) {
        for (item, phase) in self.items.iter().zip(self.phases.iter_mut()) {
            let hit = matches(&self.active, &item.category);
            *phase = match (step, hit) {
                (FilterStep::HideAll, _) => ItemPhase::Hidden,
                (FilterStep::Display, true) => ItemPhase::Pending,
                (FilterStep::Reveal, true) => ItemPhase::Shown,
                (FilterStep::Display | FilterStep::Reveal, false) => ItemPhase::Removed,
            };
        }
    }
}
