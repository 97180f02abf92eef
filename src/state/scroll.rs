//! Scroll-linked navigation highlighting and reveal animations.
//!
//! Each scroll or resize tick recomputes:
//! - the active section: the last section, in document order, whose top
//!   minus `section_threshold` is at or above the scroll position;
//! - reveal elements whose top edge came within `viewport_height -
//!   reveal_margin` of the viewport top (one-way: once revealed, always
//!   revealed);
//! - whether the navbar should use its compact style.
//!
//! Positions are document coordinates measured by the caller, so the tracker
//! is pure state and ticks are idempotent for an unchanged scroll position.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollConfig;

/// A page section and its document offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct RevealElement {
    top: f64,
    active: bool,
}

/// Result of one scroll tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollTick {
    pub active_section: Option<String>,
    pub newly_revealed: Vec<usize>,
    pub navbar_compact: bool,
}

#[derive(Debug, Default)]
pub struct ScrollTracker {
    config: ScrollConfig,
    sections: Vec<Section>,
    reveals: Vec<RevealElement>,
    active: Option<usize>,
}

impl ScrollTracker {
    #[must_use]
    pub fn new(config: ScrollConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Replace the section layout (initial measurement or after a resize).
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
        self.active = None;
    }

    /// Track a reveal element at document offset `top`; returns its index.
    pub fn register_reveal(&mut self, top: f64) -> usize {
        self.reveals.push(RevealElement { top, active: false });
        self.reveals.len() - 1
    }

    /// Update reveal offsets after a layout change. Revealed elements stay
    /// revealed; extra offsets register new elements.
    pub fn update_reveal_tops(&mut self, tops: &[f64]) {
        for (i, top) in tops.iter().enumerate() {
            match self.reveals.get_mut(i) {
                Some(element) => element.top = *top,
                None => {
                    self.register_reveal(*top);
                }
            }
        }
    }

    /// Recompute active section, reveals and navbar style for a scroll
    /// position and viewport height.
    pub fn tick(&mut self, scroll_y: f64, viewport_height: f64) -> ScrollTick {
        self.active = active_section_index(&self.sections, scroll_y, self.config.section_threshold);

        let reveal_line = viewport_height - self.config.reveal_margin;
        let mut newly_revealed = Vec::new();
        for (i, element) in self.reveals.iter_mut().enumerate() {
            if !element.active && element.top - scroll_y < reveal_line {
                element.active = true;
                newly_revealed.push(i);
            }
        }

        ScrollTick {
            active_section: self.active_section().map(|s| s.id.clone()),
            newly_revealed,
            navbar_compact: scroll_y > self.config.compact_after,
        }
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&Section> {
        self.active.and_then(|i| self.sections.get(i))
    }

    /// True if the navigation link `href` (`#id`) targets the active section.
    #[must_use]
    pub fn link_is_active(&self, href: &str) -> bool {
        match (self.active_section(), href.strip_prefix('#')) {
            (Some(section), Some(id)) => section.id == id,
            _ => false,
        }
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.reveals.get(index).is_some_and(|e| e.active)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.reveals.iter().filter(|e| e.active).count()
    }

    #[must_use]
    pub fn config(&self) -> ScrollConfig {
        self.config
    }
}

/// Index of the last section (document order) with `top - threshold <=
/// scroll_y`.
#[must_use]
pub fn active_section_index(sections: &[Section], scroll_y: f64, threshold: f64) -> Option<usize> {
    sections
        .iter()
        .enumerate()
        .filter(|(_, s)| s.top - threshold <= scroll_y)
        .map(|(i, _)| i)
        .last()
}
