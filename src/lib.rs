//! Interactive behaviour for a static portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page state (theme, background music, navigation highlighting, contact
//! form, portfolio filter and effects) lives in plain controllers under
//! `state` and `util` that reach the browser only through small traits. The
//! `csr` feature adds the browser implementations, the Leptos widgets and
//! the WASM entry point; without it the whole core runs natively, which is
//! how it is tested.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod prefs;
pub mod state;
pub mod util;

/// WASM entry point: route logs and panics to the console and mount the
/// widgets.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
