//! Utility helpers shared across controllers and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (audio, timers,
//! scrolling) and the pure math behind visual effects from component logic
//! so both run and are tested without a DOM.

pub mod audio;
pub mod cursor;
pub mod events;
pub mod navigation;
pub mod page;
pub mod particles;
pub mod schedule;
pub mod typing;
