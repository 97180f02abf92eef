//! Dark mode preference, body class and toggle icon.
//!
//! The theme class goes on `<body>` and the toggle shows a sun while dark
//! mode is on, a moon otherwise. The preference is read once at startup and
//! written on every toggle. `apply_to_document` is the only browser-facing
//! piece and no-ops outside `csr` builds.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::prefs::Preferences;
use crate::util::schedule::Timeline;

/// Class toggled on `<body>` while dark mode is enabled.
pub const DARK_CLASS: &str = "auto-dark-mode";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl ThemeIcon {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Moon => "fa-moon",
            Self::Sun => "fa-sun",
        }
    }
}

/// What the page should show for the current theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeView {
    pub dark: bool,
    pub icon: ThemeIcon,
}

impl ThemeView {
    fn for_mode(dark: bool) -> Self {
        Self { dark, icon: if dark { ThemeIcon::Sun } else { ThemeIcon::Moon } }
    }

    /// Body class to apply, if any.
    #[must_use]
    pub fn body_class(self) -> Option<&'static str> {
        self.dark.then_some(DARK_CLASS)
    }
}

/// Steps of the toggle icon spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconAnimation {
    Start,
    Settle,
}

pub struct ThemeController {
    prefs: Preferences,
    dark: bool,
}

impl ThemeController {
    pub fn new(prefs: Preferences) -> Self {
        let dark = prefs.dark_mode();
        Self { prefs, dark }
    }

    #[must_use]
    pub fn view(&self) -> ThemeView {
        ThemeView::for_mode(self.dark)
    }

    /// Flip the theme, persist it and return what to show.
    pub fn toggle(&mut self) -> ThemeView {
        self.dark = !self.dark;
        self.prefs.set_dark_mode(self.dark);
        log::debug!("dark mode {}", if self.dark { "on" } else { "off" });
        self.view()
    }

    /// Icon spin: starts immediately and settles after `settle_ms`.
    #[must_use]
    pub fn icon_timeline(settle_ms: u32) -> Timeline<IconAnimation> {
        Timeline::new().then(0, IconAnimation::Start).then(settle_ms, IconAnimation::Settle)
    }
}

/// Add or remove the dark theme class on `<body>`.
pub fn apply_to_document(view: ThemeView) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let class_list = body.class_list();
        let result = if view.dark { class_list.add_1(DARK_CLASS) } else { class_list.remove_1(DARK_CLASS) };
        if let Err(e) = result {
            log::warn!("theme class not applied: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("theme view {view:?} not applied without a document");
    }
}
