//! Filterable portfolio grid.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::filter::ItemPhase;

#[component]
pub fn Portfolio() -> impl IntoView {
    let app = expect_context::<AppContext>();
    let (buttons, items) = app
        .read(|s| (s.filter.buttons().to_vec(), s.filter.items().to_vec()))
        .unwrap_or_default();

    let apply = move |filter: String| {
        let timings = app.config().timings;
        let Some(timeline) = app.write(|s| s.filter.apply(&filter, &timings)) else {
            return;
        };
        app.active_filter.set(filter);
        app.run_steps(timeline, move |step| {
            if let Some(phases) = app.write(|s| {
                s.filter.advance(step);
                (0..s.filter.items().len()).filter_map(|i| s.filter.phase(i)).collect::<Vec<_>>()
            }) {
                app.portfolio.set(phases);
            }
        });
    };

    let phase = move |index: usize| app.portfolio.with(|p| p.get(index).copied().unwrap_or(ItemPhase::Shown));

    view! {
        <section id="portfolio" class="portfolio">
            <div class="portfolio-filters">
                {buttons
                    .into_iter()
                    .map(|button| {
                        let value = button.filter.clone();
                        let active_value = button.filter.clone();
                        view! {
                            <button
                                class="filter-btn"
                                class:active=move || app.active_filter.with(|f| *f == active_value)
                                on:click=move |_| apply(value.clone())
                            >
                                {button.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="portfolio-grid">
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        view! {
                            <div
                                class="portfolio-item reveal"
                                data-category=item.category
                                style=move || phase(index).style()
                            >
                                <h3>{item.title}</h3>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
