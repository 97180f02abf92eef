use super::*;

#[test]
fn loader_hides_after_delay_then_skills_animate_and_typing_starts() {
    let timeline = load_timeline(&Timings::default());
    let steps: Vec<_> = timeline.steps().iter().map(|s| (s.delay_ms, s.action)).collect();
    assert_eq!(
        steps,
        vec![(500, PageStep::HideLoader), (0, PageStep::AnimateSkills), (0, PageStep::StartTyping)]
    );
}

#[test]
fn skill_percent_parses_labels() {
    assert_eq!(skill_percent("85%"), Some(85.0));
    assert_eq!(skill_percent(" 40 % "), Some(40.0));
    assert_eq!(skill_percent("120%"), Some(100.0));
    assert_eq!(skill_percent("expert"), None);
}

#[test]
fn skill_bar_collapsed_until_animated() {
    assert_eq!(skill_bar_style(85.0, false), "width: 0%;");
    assert_eq!(skill_bar_style(85.0, true), "width: 85%;");
}
