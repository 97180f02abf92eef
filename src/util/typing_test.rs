use futures::executor::block_on;

use super::*;
use crate::util::schedule::{ImmediateScheduler, run_timeline};

#[test]
fn types_one_character_per_frame_then_completes() {
    let timeline = typing_timeline("Hi!", &Timings::default());
    let actions: Vec<TypingFrame> = timeline.steps().iter().map(|s| s.action.clone()).collect();
    assert_eq!(
        actions,
        vec![
            TypingFrame::Text("H".into()),
            TypingFrame::Text("Hi".into()),
            TypingFrame::Text("Hi!".into()),
            TypingFrame::Complete,
        ]
    );
}

#[test]
fn first_character_waits_for_start_delay() {
    let scheduler = ImmediateScheduler::new();
    let mut last = None;
    block_on(run_timeline(&scheduler, typing_timeline("ab", &Timings::default()), |f| last = Some(f)));
    assert_eq!(scheduler.requested(), vec![1000, 75, 75]);
    assert_eq!(last, Some(TypingFrame::Complete));
}

#[test]
fn multibyte_text_is_typed_by_character() {
    let timeline = typing_timeline("né", &Timings::default());
    assert_eq!(timeline.steps()[1].action, TypingFrame::Text("né".into()));
}

#[test]
fn empty_text_only_completes() {
    let timeline = typing_timeline("", &Timings::default());
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.steps()[0].delay_ms, 1000);
}
