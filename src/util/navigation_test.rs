use super::*;

#[test]
fn anchor_target_strips_hash() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("https://example.com"), None);
}

#[test]
fn nav_links_always_smooth_scroll_and_collapse_menu() {
    let action = resolve_anchor(AnchorKind::NavLink, false, Some(900.0), 70.0);
    assert_eq!(action, NavAction::SmoothScroll { top: 830.0, collapse_menu: true });
}

#[test]
fn other_anchors_intercepted_only_while_playing() {
    assert_eq!(resolve_anchor(AnchorKind::Other, false, Some(900.0), 70.0), NavAction::Default);
    assert_eq!(
        resolve_anchor(AnchorKind::Other, true, Some(900.0), 70.0),
        NavAction::SmoothScroll { top: 830.0, collapse_menu: false }
    );
}

#[test]
fn missing_target_falls_back_to_default() {
    assert_eq!(resolve_anchor(AnchorKind::NavLink, true, None, 70.0), NavAction::Default);
}

#[test]
fn scroll_target_never_negative() {
    assert_eq!(
        resolve_anchor(AnchorKind::NavLink, false, Some(20.0), 70.0),
        NavAction::SmoothScroll { top: 0.0, collapse_menu: true }
    );
}
