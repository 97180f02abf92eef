//! Custom cursor and parallax pointer effects.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

pub const HOVER_SCALE: f64 = 1.5;
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.1;

/// Custom cursor position and visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    hovering: bool,
    outside: bool,
    modal_open: bool,
}

impl CursorState {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.outside = false;
    }

    /// Pointer entered or left an interactive element.
    pub fn set_hover(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn leave_window(&mut self) {
        self.outside = true;
    }

    pub fn enter_window(&mut self) {
        self.outside = false;
    }

    pub fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        !self.outside && !self.modal_open
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        if self.hovering { HOVER_SCALE } else { 1.0 }
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.hovering
    }

    /// Inline style for the cursor element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; opacity: {}; transform: translate(-50%, -50%) scale({});",
            self.x,
            self.y,
            if self.visible() { 1 } else { 0 },
            self.scale()
        )
    }
}

/// Background offset for a pointer at `(x, y)` in a `width` x `height`
/// viewport.
#[must_use]
pub fn parallax_offset(width: f64, height: f64, x: f64, y: f64, speed: f64) -> (f64, f64) {
    ((width - x * speed) / 100.0, (height - y * speed) / 100.0)
}
