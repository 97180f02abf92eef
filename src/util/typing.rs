//! Hero headline typing effect.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::config::Timings;
use crate::util::schedule::Timeline;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypingFrame {
    /// Text typed so far.
    Text(String),
    /// Typing finished; the caret stops blinking.
    Complete,
}

/// Frames for typing `text`: the first character after `typing_start_ms`,
/// each further one `typing_char_ms` later, then `Complete`.
#[must_use]
pub fn typing_timeline(text: &str, timings: &Timings) -> Timeline<TypingFrame> {
    let mut timeline = Timeline::new();
    let mut typed = String::with_capacity(text.len());
    let mut delay = timings.typing_start_ms;
    for ch in text.chars() {
        typed.push(ch);
        timeline.push(delay, TypingFrame::Text(typed.clone()));
        delay = timings.typing_char_ms;
    }
    timeline.push(delay, TypingFrame::Complete);
    timeline
}
