//! Page loader overlay and skill bars.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::util::page::{skill_bar_style, skill_percent};

const SKILLS: [(&str, &str); 5] =
    [("Rust", "85%"), ("TypeScript", "80%"), ("Web Design", "75%"), ("Databases", "70%"), ("DevOps", "60%")];

#[component]
pub fn PageLoader() -> impl IntoView {
    let app = expect_context::<AppContext>();
    view! {
        <div class="loader" class:loaded=move || app.loaded.get()>
            <div class="loader-spinner"></div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let app = expect_context::<AppContext>();
    view! {
        <section id="about" class="skills">
            {SKILLS
                .into_iter()
                .map(|(name, label)| {
                    let percent = skill_percent(label).unwrap_or(0.0);
                    view! {
                        <div class="skill reveal">
                            <span class="skill-name">{name}</span>
                            <span class="skill-percent">{label}</span>
                            <div class="skill-bar">
                                <div class="skill-level" style=move || skill_bar_style(percent, app.loaded.get())></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
