//! Floating dark mode toggle.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::theme::{self, IconAnimation, ThemeController};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let app = expect_context::<AppContext>();

    let on_click = move |_| {
        let Some(view) = app.write(|s| s.theme.toggle()) else {
            return;
        };
        theme::apply_to_document(view);
        app.theme.set(view);

        let spinning = app.icon_spinning;
        let settle_ms = app.config().timings.theme_icon_ms;
        app.run_steps(ThemeController::icon_timeline(settle_ms), move |step| {
            spinning.set(step == IconAnimation::Start);
        });
    };

    view! {
        <button class="theme-toggle" on:click=on_click title="Toggle dark mode" aria-label="Toggle dark mode">
            <i
                class=move || format!("fas {}", app.theme.get().icon.class())
                class:rotating=move || app.icon_spinning.get()
            ></i>
        </button>
    }
}
