use futures::executor::block_on;

use super::*;

// =============================================================
// Timeline
// =============================================================

#[test]
fn timeline_keeps_steps_in_order() {
    let timeline = Timeline::new().then(300, "hide").then(50, "show");
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.steps()[0], Step { delay_ms: 300, action: "hide" });
    assert_eq!(timeline.total_ms(), 350);
}

#[test]
fn run_timeline_applies_every_action_in_order() {
    let scheduler = ImmediateScheduler::new();
    let timeline = Timeline::new().then(0, 1).then(3000, 2).then(500, 3);
    let mut seen = Vec::new();
    block_on(run_timeline(&scheduler, timeline, |n| seen.push(n)));
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn run_timeline_skips_zero_delays() {
    let scheduler = ImmediateScheduler::new();
    let timeline = Timeline::new().then(0, ()).then(150, ());
    block_on(run_timeline(&scheduler, timeline, |()| {}));
    assert_eq!(scheduler.requested(), vec![150]);
}

#[test]
fn empty_timeline_requests_nothing() {
    let scheduler = ImmediateScheduler::new();
    let timeline: Timeline<()> = Timeline::new();
    assert!(timeline.is_empty());
    block_on(run_timeline(&scheduler, timeline, |()| {}));
    assert!(scheduler.requested().is_empty());
}

// =============================================================
// with_timeout
// =============================================================

#[test]
fn ready_future_beats_the_deadline() {
    let scheduler = ImmediateScheduler::new();
    let result = block_on(with_timeout(&scheduler, 10, async { 7 }));
    assert_eq!(result, Ok(7));
}

#[test]
fn pending_future_times_out() {
    let scheduler = ImmediateScheduler::new();
    let result = block_on(with_timeout(&scheduler, 10_000, futures::future::pending::<()>()));
    assert_eq!(result, Err(Elapsed(10_000)));
    assert_eq!(Elapsed(10_000).to_string(), "timed out after 10000ms");
}
