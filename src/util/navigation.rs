//! In-page anchor navigation.
//!
//! A plain anchor jump would reload nothing, but some browsers stop a
//! playing `<audio>` element when the fragment changes. While music plays,
//! and always for navbar links, clicks are intercepted and replaced with a
//! smooth scroll that leaves room for the fixed navbar.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Where the click came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorKind {
    NavLink,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    /// Prevent the default jump and scroll to `top` instead.
    SmoothScroll { top: f64, collapse_menu: bool },
    /// Let the browser handle the click.
    Default,
}

/// Section id an in-page href points at, or `None` for `#` and external links.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Decide how to handle a click on an anchor.
///
/// `target_top` is the document offset of the referenced element when it
/// exists.
#[must_use]
pub fn resolve_anchor(kind: AnchorKind, music_playing: bool, target_top: Option<f64>, nav_offset: f64) -> NavAction {
    let intercept = kind == AnchorKind::NavLink || music_playing;
    match (intercept, target_top) {
        (true, Some(top)) => NavAction::SmoothScroll {
            top: (top - nav_offset).max(0.0),
            collapse_menu: kind == AnchorKind::NavLink,
        },
        _ => NavAction::Default,
    }
}

/// Document offset of the element with `id`.
#[cfg(feature = "csr")]
#[must_use]
pub fn element_top(id: &str) -> Option<f64> {
    let window = web_sys::window()?;
    let element = window.document()?.get_element_by_id(id)?;
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    Some(element.get_bounding_client_rect().top() + scroll_y)
}

/// Smoothly scroll the window to `top`.
#[cfg(feature = "csr")]
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
