//! Timer-staged transitions.
//!
//! DESIGN
//! ======
//! Staged UI effects (status fade-outs, filter transitions, typing) are
//! modelled as a `Timeline` of `(delay, action)` steps. A single `Scheduler`
//! supplies the delays, so tests substitute `ImmediateScheduler` and run the
//! whole sequence without waiting on a wall clock.
//!
//! The same scheduler bounds external calls through `with_timeout`; a hung
//! playback start or relay request resolves as `Elapsed` instead of leaving
//! the UI pending forever.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::RefCell;
use std::future::Future;

use futures::future::{Either, LocalBoxFuture, select};

/// Source of delays for staged transitions.
pub trait Scheduler {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Scheduler whose delays complete immediately. Records every request.
#[derive(Debug, Default)]
pub struct ImmediateScheduler {
    requested: RefCell<Vec<u32>>,
}

impl ImmediateScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in order.
    #[must_use]
    pub fn requested(&self) -> Vec<u32> {
        self.requested.borrow().clone()
    }
}

impl Scheduler for ImmediateScheduler {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        self.requested.borrow_mut().push(ms);
        Box::pin(futures::future::ready(()))
    }
}

/// Browser scheduler backed by `setTimeout`.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooScheduler;

#[cfg(feature = "csr")]
impl Scheduler for GlooScheduler {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// One staged transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<T> {
    pub delay_ms: u32,
    pub action: T,
}

/// Ordered sequence of delayed transitions.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<T> {
    steps: Vec<Step<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<T> Timeline<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `action`, applied `delay_ms` after the previous step.
    #[must_use]
    pub fn then(mut self, delay_ms: u32, action: T) -> Self {
        self.steps.push(Step { delay_ms, action });
        self
    }

    pub fn push(&mut self, delay_ms: u32, action: T) {
        self.steps.push(Step { delay_ms, action });
    }

    #[must_use]
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Wall-clock length of the whole sequence.
    #[must_use]
    pub fn total_ms(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.delay_ms)).sum()
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }
}

/// Run every step of `timeline`, waiting each step's delay before applying it.
/// Zero delays apply synchronously.
pub async fn run_timeline<T>(scheduler: &dyn Scheduler, timeline: Timeline<T>, mut apply: impl FnMut(T)) {
    for step in timeline.into_steps() {
        if step.delay_ms > 0 {
            scheduler.sleep(step.delay_ms).await;
        }
        apply(step.action);
    }
}

/// The deadline passed before the wrapped future resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("timed out after {0}ms")]
pub struct Elapsed(pub u32);

/// Resolve `future`, or `Elapsed` if `ms` passes first.
///
/// # Errors
///
/// Returns `Elapsed` when the scheduler's delay completes before `future`.
pub async fn with_timeout<F: Future>(scheduler: &dyn Scheduler, ms: u32, future: F) -> Result<F::Output, Elapsed> {
    let future = Box::pin(future);
    match select(future, scheduler.sleep(ms)).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(Elapsed(ms)),
    }
}
