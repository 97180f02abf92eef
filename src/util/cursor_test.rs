#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Cursor
// =============================================================

#[test]
fn hover_scales_and_fills() {
    let mut cursor = CursorState::default();
    assert_eq!(cursor.scale(), 1.0);
    cursor.set_hover(true);
    assert_eq!(cursor.scale(), 1.5);
    assert!(cursor.is_filled());
    cursor.set_hover(false);
    assert!(!cursor.is_filled());
}

#[test]
fn leaving_window_hides_until_reentry() {
    let mut cursor = CursorState::default();
    cursor.leave_window();
    assert!(!cursor.visible());
    cursor.enter_window();
    assert!(cursor.visible());
}

#[test]
fn modal_hides_cursor_even_when_moving() {
    let mut cursor = CursorState::default();
    cursor.set_modal_open(true);
    cursor.move_to(10.0, 20.0);
    assert!(!cursor.visible());
    cursor.set_modal_open(false);
    assert!(cursor.visible());
}

#[test]
fn style_tracks_position() {
    let mut cursor = CursorState::default();
    cursor.move_to(12.0, 34.0);
    let style = cursor.style();
    assert!(style.starts_with("left: 12px; top: 34px; opacity: 1;"));
}

// =============================================================
// Parallax
// =============================================================

#[test]
fn parallax_uses_viewport_minus_scaled_pointer() {
    let (dx, dy) = parallax_offset(1000.0, 800.0, 500.0, 400.0, DEFAULT_PARALLAX_SPEED);
    assert_eq!(dx, 9.5);
    assert_eq!(dy, 7.6);
}
