//! Root component and shared UI context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the single `AppState`, wraps it in a local stored value and
//! provides an `AppContext` holding that value plus one signal per widget.
//! Handlers mutate the state in short synchronous sections, then mirror the
//! result into the signals. Asynchronous work (playback starts, relay calls,
//! staged transitions) is spawned with no state borrow held across awaits.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::cursor::CustomCursor;
use crate::components::hero::Hero;
use crate::components::loader::{PageLoader, Skills};
use crate::components::music_player::MusicPlayer;
use crate::components::nav_bar::NavBar;
use crate::components::portfolio::Portfolio;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::SiteConfig;
use crate::state::app::{AppState, PageEvent, Platform, arm_first_interaction, default_portfolio};
use crate::state::contact::FormStatus;
use crate::state::filter::ItemPhase;
use crate::state::player::{PlayRequest, PlayerState};
use crate::state::scroll::ScrollTick;
use crate::state::theme::{self, ThemeView};
use crate::util::cursor::CursorState;
use crate::util::events::EventBus;
use crate::util::schedule::{Scheduler, Timeline, run_timeline};

/// Handles shared by every widget.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub state: StoredValue<AppState, LocalStorage>,
    pub bus: StoredValue<EventBus<PageEvent>, LocalStorage>,
    pub theme: RwSignal<ThemeView>,
    pub icon_spinning: RwSignal<bool>,
    pub player: RwSignal<PlayerState>,
    pub nav: RwSignal<ScrollTick>,
    pub form_status: RwSignal<Option<FormStatus>>,
    pub sending: RwSignal<bool>,
    pub portfolio: RwSignal<Vec<ItemPhase>>,
    pub active_filter: RwSignal<String>,
    pub cursor: RwSignal<CursorState>,
    pub loaded: RwSignal<bool>,
    /// Set once the loader is gone; the hero headline types from then on.
    pub typing_started: RwSignal<bool>,
}

impl AppContext {
    fn new(state: AppState) -> Self {
        let theme = state.theme.view();
        let player = state.player.state();
        let active_filter = state.filter.active().to_owned();
        let phases = (0..state.filter.items().len()).filter_map(|i| state.filter.phase(i)).collect();
        Self {
            state: StoredValue::new_local(state),
            bus: StoredValue::new_local(EventBus::new()),
            theme: RwSignal::new(theme),
            icon_spinning: RwSignal::new(false),
            player: RwSignal::new(player),
            nav: RwSignal::new(ScrollTick::default()),
            form_status: RwSignal::new(None),
            sending: RwSignal::new(false),
            portfolio: RwSignal::new(phases),
            active_filter: RwSignal::new(active_filter),
            cursor: RwSignal::new(CursorState::default()),
            loaded: RwSignal::new(false),
            typing_started: RwSignal::new(false),
        }
    }

    /// Read from the state; `None` once the owner is disposed.
    pub fn read<U>(&self, f: impl FnOnce(&AppState) -> U) -> Option<U> {
        self.state.try_with_value(f)
    }

    /// Mutate the state; `None` once the owner is disposed.
    pub fn write<U>(&self, f: impl FnOnce(&mut AppState) -> U) -> Option<U> {
        self.state.try_update_value(f)
    }

    pub fn config(&self) -> SiteConfig {
        self.read(|s| s.config.clone()).unwrap_or_default()
    }

    fn scheduler(&self) -> Option<Rc<dyn Scheduler>> {
        self.read(|s| Rc::clone(&s.scheduler))
    }

    /// Copy the player snapshot into its signal.
    pub fn sync_player(&self) {
        if let Some(state) = self.read(|s| s.player.state()) {
            self.player.set(state);
        }
    }

    /// Drive a playback start to completion and record its outcome.
    pub fn launch_play(self, request: PlayRequest) {
        let Some(scheduler) = self.scheduler() else {
            return;
        };
        let timeout_ms = self.config().music.play_timeout_ms;
        self.sync_player();
        spawn(async move {
            let (ticket, outcome) = request.settle(&*scheduler, timeout_ms).await;
            if let Some(Err(e)) = self.write(|s| s.player.resolve_play(ticket, outcome)) {
                log::debug!("music not started: {e}");
            }
            self.sync_player();
        });
    }

    /// Run `timeline` on the page scheduler, applying each step as it comes due.
    pub fn run_steps<T: 'static>(self, timeline: Timeline<T>, apply: impl FnMut(T) + 'static) {
        let Some(scheduler) = self.scheduler() else {
            return;
        };
        spawn(async move {
            run_timeline(&*scheduler, timeline, apply).await;
        });
    }

    /// Notify interaction subscribers (click, key press, touch).
    pub fn interact(self) {
        self.bus.update_value(|bus| {
            bus.emit(&PageEvent::Interaction);
        });
    }
}

/// Run a future on the UI thread. Headless builds have no event loop, so the
/// future is driven to completion in place.
pub fn spawn(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    futures::executor::block_on(task);
}

fn platform(config: &SiteConfig) -> Platform {
    #[cfg(feature = "csr")]
    {
        Platform::browser(config)
    }
    #[cfg(not(feature = "csr"))]
    {
        Platform::headless(config)
    }
}

/// Page root.
#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load();
    let platform = platform(&config);
    let mut state = AppState::new(config, platform, default_portfolio());
    let resume = state.start();
    theme::apply_to_document(state.theme.view());

    let app = AppContext::new(state);
    provide_context(app);

    if resume {
        app.bus.update_value(|bus| {
            arm_first_interaction(
                bus,
                move || app.write(|s| s.player.on_user_interaction()).flatten(),
                move |request| app.launch_play(request),
            );
        });
    }

    #[cfg(feature = "csr")]
    browser::install(app);

    view! {
        <PageLoader />
        <CustomCursor />
        <NavBar />
        <Hero />
        <Skills />
        <Portfolio />
        <ContactForm />
        <MusicPlayer />
        <ThemeToggle />
    }
}

#[cfg(feature = "csr")]
mod browser {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast as _;

    use super::AppContext;
    use crate::state::scroll::Section;
    use crate::util::navigation::{self, AnchorKind, NavAction};
    use crate::util::page::{PageStep, load_timeline};

    const REVEAL_SELECTOR: &str = ".reveal";

    /// Register window listeners for scroll tracking, interactions, anchor
    /// navigation and the page loader.
    pub(super) fn install(app: AppContext) {
        let mut handles = vec![
            window_event_listener(leptos::ev::scroll, move |_| scroll_tick(app)),
            window_event_listener(leptos::ev::resize, move |_| scroll_tick(app)),
            window_event_listener(leptos::ev::keydown, move |_| app.interact()),
            window_event_listener(leptos::ev::touchstart, move |_| app.interact()),
            window_event_listener(leptos::ev::click, move |ev| {
                app.interact();
                intercept_anchor(app, &ev);
            }),
        ];
        let complete = web_sys::window()
            .and_then(|w| w.document())
            .is_some_and(|d| d.ready_state() == "complete");
        if complete {
            start_loader(app);
        } else {
            handles.push(window_event_listener(leptos::ev::load, move |_| start_loader(app)));
        }
        // Initial measurement; content above the fold reveals immediately.
        request_scroll_tick(app);
        on_cleanup(move || {
            for handle in handles {
                handle.remove();
            }
        });
    }

    fn start_loader(app: AppContext) {
        scroll_tick(app);
        let timings = app.config().timings;
        app.run_steps(load_timeline(&timings), move |step| match step {
            PageStep::HideLoader => app.loaded.set(true),
            PageStep::StartTyping => app.typing_started.set(true),
            PageStep::AnimateSkills => {}
        });
    }

    fn request_scroll_tick(app: AppContext) {
        gloo_timers::callback::Timeout::new(0, move || scroll_tick(app)).forget();
    }

    fn reveal_elements() -> Vec<web_sys::Element> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }

    /// Measure sections and reveal elements and apply one scroll tick.
    fn scroll_tick(app: AppContext) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let sections: Vec<Section> = app
            .config()
            .sections
            .iter()
            .filter_map(|link| navigation::element_top(&link.id).map(|top| Section::new(link.id.clone(), top)))
            .collect();
        let reveals = reveal_elements();
        let tops: Vec<f64> = reveals.iter().map(|el| el.get_bounding_client_rect().top() + scroll_y).collect();

        let Some(tick) = app.write(|s| {
            s.scroll.set_sections(sections);
            s.scroll.update_reveal_tops(&tops);
            s.scroll.tick(scroll_y, viewport_height)
        }) else {
            return;
        };
        for index in &tick.newly_revealed {
            if let Some(el) = reveals.get(*index) {
                if let Err(e) = el.class_list().add_1("active") {
                    log::warn!("reveal class not applied: {e:?}");
                }
            }
        }
        app.nav.set(tick);
    }

    /// Keep music playing across in-page jumps: while it plays, anchor
    /// clicks outside the navbar become smooth scrolls.
    fn intercept_anchor(app: AppContext, ev: &web_sys::MouseEvent) {
        if ev.default_prevented() {
            return;
        }
        let Some(anchor) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a[href^='#']").ok().flatten())
        else {
            return;
        };
        if anchor.class_list().contains("nav-link") {
            return;
        }
        let Some(id) = anchor.get_attribute("href").and_then(|h| navigation::anchor_target(&h).map(str::to_owned)) else {
            return;
        };
        let playing = app.player.get_untracked().is_playing;
        let nav_offset = app.config().scroll.nav_offset;
        if let NavAction::SmoothScroll { top, .. } =
            navigation::resolve_anchor(AnchorKind::Other, playing, navigation::element_top(&id), nav_offset)
        {
            ev.prevent_default();
            navigation::smooth_scroll_to(top);
        }
    }
}
