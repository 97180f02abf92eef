#![allow(clippy::float_cmp)]

use futures::executor::block_on;

use super::*;

// =============================================================
// MemorySink
// =============================================================

#[test]
fn memory_sink_starts_paused() {
    let sink = MemorySink::new();
    assert!(sink.is_paused());
    assert_eq!(sink.play_calls(), 0);
}

#[test]
fn accepted_play_unpauses() {
    let sink = MemorySink::new();
    assert_eq!(block_on(sink.play()), Ok(()));
    assert!(!sink.is_paused());
    assert_eq!(sink.play_calls(), 1);
}

#[test]
fn rejected_play_stays_paused() {
    let sink = MemorySink::new();
    sink.set_outcome(PlayOutcome::Reject("NotAllowedError".into()));
    assert_eq!(block_on(sink.play()), Err("NotAllowedError".to_owned()));
    assert!(sink.is_paused());
}

#[test]
fn set_src_stops_and_rewinds() {
    let sink = MemorySink::new();
    block_on(sink.play()).expect("accepted");
    sink.advance(42.0);
    sink.set_src("b.mp3");
    assert!(sink.is_paused());
    assert_eq!(sink.current_time(), 0.0);
    assert_eq!(sink.src(), "b.mp3");
}
