//! Page-wide state.
//!
//! DESIGN
//! ======
//! One `AppState` owns every controller; components reach it through a
//! single local stored value and never hold a borrow across an await.
//! Collaborators are bundled in a `Platform`: browser implementations under
//! `csr`, in-memory ones otherwise, so the same wiring runs in tests.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::net::relay::{MailRelay, SimulatedRelay};
use crate::prefs::{MemoryStore, PreferenceStore, Preferences};
use crate::state::contact::ContactForm;
use crate::state::filter::{PortfolioFilter, PortfolioItem};
use crate::state::player::{MediaPlayer, PlayRequest};
use crate::state::scroll::ScrollTracker;
use crate::state::theme::ThemeController;
use crate::util::audio::{AudioSink, MemorySink};
use crate::util::events::{EventBus, SubscriptionId};
use crate::util::schedule::{ImmediateScheduler, Scheduler};

/// Collaborators the controllers talk to.
pub struct Platform {
    pub store: Rc<dyn PreferenceStore>,
    pub sink: Box<dyn AudioSink>,
    pub relay: Rc<dyn MailRelay>,
    pub scheduler: Rc<dyn Scheduler>,
}

impl Platform {
    /// In-memory collaborators with an immediate scheduler.
    #[must_use]
    pub fn headless(config: &SiteConfig) -> Self {
        let scheduler: Rc<dyn Scheduler> = Rc::new(ImmediateScheduler::new());
        Self {
            store: Rc::new(MemoryStore::new()),
            sink: Box::new(MemorySink::new()),
            relay: Rc::new(SimulatedRelay::new(Rc::clone(&scheduler), config.timings.simulated_relay_ms)),
            scheduler,
        }
    }

    /// Browser collaborators. Falls back to in-memory storage or audio when
    /// the page cannot provide them, and to the simulated relay when no
    /// relay credentials are configured.
    #[cfg(feature = "csr")]
    #[must_use]
    pub fn browser(config: &SiteConfig) -> Self {
        use crate::net::relay::EmailJsRelay;
        use crate::prefs::store::LocalStore;
        use crate::util::audio::ElementSink;
        use crate::util::schedule::GlooScheduler;

        let scheduler: Rc<dyn Scheduler> = Rc::new(GlooScheduler);
        let store: Rc<dyn PreferenceStore> = match LocalStore::open() {
            Ok(store) => Rc::new(store),
            Err(e) => {
                log::warn!("preferences will not persist: {e}");
                Rc::new(MemoryStore::new())
            }
        };
        let sink: Box<dyn AudioSink> = match ElementSink::new() {
            Ok(sink) => Box::new(sink),
            Err(e) => {
                log::warn!("audio element unavailable: {e}");
                Box::new(MemorySink::new())
            }
        };
        let relay: Rc<dyn MailRelay> = if config.relay.is_configured() {
            Rc::new(EmailJsRelay::new(config.relay.endpoint.clone()))
        } else {
            log::info!("mail relay not configured, contact form runs in demo mode");
            Rc::new(SimulatedRelay::new(Rc::clone(&scheduler), config.timings.simulated_relay_ms))
        };
        Self { store, sink, relay, scheduler }
    }
}

/// Page-level events delivered through the interaction bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    /// Click, key press or touch anywhere on the page.
    Interaction,
}

pub struct AppState {
    pub config: SiteConfig,
    pub scheduler: Rc<dyn Scheduler>,
    pub theme: ThemeController,
    pub player: MediaPlayer,
    pub scroll: ScrollTracker,
    pub contact: ContactForm,
    pub filter: PortfolioFilter,
}

impl AppState {
    pub fn new(config: SiteConfig, platform: Platform, portfolio: Vec<PortfolioItem>) -> Self {
        let prefs = Preferences::new(platform.store);
        Self {
            theme: ThemeController::new(prefs.clone()),
            player: MediaPlayer::new(platform.sink, prefs, &config.music),
            scroll: ScrollTracker::new(config.scroll),
            contact: ContactForm::new(platform.relay, config.relay.clone()),
            filter: PortfolioFilter::new(config.filters.clone(), portfolio),
            scheduler: platform.scheduler,
            config,
        }
    }

    /// Restore persisted preferences. Returns `true` when music should
    /// resume on the first interaction.
    pub fn start(&mut self) -> bool {
        let resume = self.player.initialize();
        log::info!("page state ready (dark mode {}, music resume {resume})", self.theme.view().dark);
        resume
    }
}

/// Register the deferred music resume on the first page interaction.
///
/// `take` asks the player for its armed request; `launch` drives it to
/// completion. The subscription removes itself after the first event.
pub fn arm_first_interaction(
    bus: &mut EventBus<PageEvent>,
    mut take: impl FnMut() -> Option<PlayRequest> + 'static,
    mut launch: impl FnMut(PlayRequest) + 'static,
) -> SubscriptionId {
    bus.subscribe_once(move |_| {
        if let Some(request) = take() {
            launch(request);
        }
    })
}

/// Sample portfolio shown by the filter.
#[must_use]
pub fn default_portfolio() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem::new("E-commerce Platform", "web"),
        PortfolioItem::new("Fitness Tracker", "mobile"),
        PortfolioItem::new("Brand Identity", "design"),
        PortfolioItem::new("Analytics Dashboard", "web"),
        PortfolioItem::new("Travel Companion", "mobile"),
        PortfolioItem::new("Editorial Layouts", "design"),
    ]
}
