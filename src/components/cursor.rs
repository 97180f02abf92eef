//! Custom cursor that follows the pointer, plus hero parallax.

use leptos::prelude::*;

use crate::app::AppContext;

/// Interactive elements that enlarge the cursor on hover.
#[cfg(feature = "csr")]
const HOVER_SELECTOR: &str = "a, button, input, textarea, .track-item, .portfolio-item";

#[component]
pub fn CustomCursor() -> impl IntoView {
    let app = expect_context::<AppContext>();

    #[cfg(feature = "csr")]
    pointer::install(app);

    view! {
        <div
            class="custom-cursor"
            class:hover=move || app.cursor.get().is_filled()
            style=move || app.cursor.get().style()
        ></div>
    }
}

#[cfg(feature = "csr")]
mod pointer {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast as _;

    use super::HOVER_SELECTOR;
    use crate::app::AppContext;
    use crate::util::cursor::{DEFAULT_PARALLAX_SPEED, parallax_offset};

    const PARALLAX_VAR_X: &str = "--parallax-x";
    const PARALLAX_VAR_Y: &str = "--parallax-y";
    const MODAL_SHOWN: &str = "show.bs.modal";
    const MODAL_HIDDEN: &str = "hidden.bs.modal";

    fn over_interactive(ev: &web_sys::MouseEvent) -> bool {
        ev.target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(HOVER_SELECTOR).ok().flatten())
            .is_some()
    }

    fn apply_parallax(ev: &web_sys::MouseEvent) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let (dx, dy) = parallax_offset(width, height, f64::from(ev.client_x()), f64::from(ev.client_y()), DEFAULT_PARALLAX_SPEED);
        let Some(root) = window.document().and_then(|d| d.document_element()) else {
            return;
        };
        let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let style = root.style();
        for (var, value) in [(PARALLAX_VAR_X, dx), (PARALLAX_VAR_Y, dy)] {
            if let Err(e) = style.set_property(var, &format!("{value}px")) {
                log::warn!("parallax offset not applied: {e:?}");
            }
        }
    }

    pub(super) fn install(app: AppContext) {
        let cursor = app.cursor;
        let handles = [
            window_event_listener(leptos::ev::mousemove, move |ev| {
                let hovering = over_interactive(&ev);
                cursor.update(|c| {
                    c.move_to(f64::from(ev.client_x()), f64::from(ev.client_y()));
                    c.set_hover(hovering);
                });
                apply_parallax(&ev);
            }),
            window_event_listener(leptos::ev::mouseout, move |ev| {
                if ev.related_target().is_none() {
                    cursor.update(|c| c.leave_window());
                }
            }),
            window_event_listener(leptos::ev::mouseover, move |_| cursor.update(|c| c.enter_window())),
            window_event_listener(leptos::ev::Custom::<leptos::ev::Event>::new(MODAL_SHOWN), move |_| {
                cursor.update(|c| c.set_modal_open(true));
            }),
            window_event_listener(leptos::ev::Custom::<leptos::ev::Event>::new(MODAL_HIDDEN), move |_| {
                cursor.update(|c| c.set_modal_open(false));
            }),
        ];
        on_cleanup(move || {
            for handle in handles {
                handle.remove();
            }
        });
    }
}
