//! Page controllers.
//!
//! DESIGN
//! ======
//! Each controller owns one slice of UI state and talks to the browser only
//! through traits (`PreferenceStore`, `AudioSink`, `MailRelay`, `Scheduler`).
//! Components translate DOM events into controller calls and mirror the
//! results into signals.

pub mod app;
pub mod contact;
pub mod filter;
pub mod player;
pub mod scroll;
pub mod theme;
