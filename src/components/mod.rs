//! Page widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the interactive parts of the portfolio page. They read
//! view signals from the `AppContext` and forward DOM events to the
//! controllers it holds.

pub mod contact_form;
pub mod cursor;
pub mod hero;
pub mod loader;
pub mod music_player;
pub mod nav_bar;
pub mod portfolio;
pub mod theme_toggle;
