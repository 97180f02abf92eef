//! Fixed navigation bar with scroll-linked highlighting.

use leptos::prelude::*;

use crate::app::AppContext;

#[component]
pub fn NavBar() -> impl IntoView {
    let app = expect_context::<AppContext>();
    let menu_open = RwSignal::new(false);

    let links = app
        .config()
        .sections
        .into_iter()
        .map(|link| {
            let href = link.href();
            let id = link.id.clone();
            let active_href = href.clone();
            let on_click = move |ev: leptos::ev::MouseEvent| {
                #[cfg(feature = "csr")]
                {
                    use crate::util::navigation::{self, AnchorKind, NavAction};

                    let playing = app.player.get_untracked().is_playing;
                    let nav_offset = app.config().scroll.nav_offset;
                    let target = navigation::element_top(&id);
                    if let NavAction::SmoothScroll { top, collapse_menu } =
                        navigation::resolve_anchor(AnchorKind::NavLink, playing, target, nav_offset)
                    {
                        ev.prevent_default();
                        navigation::smooth_scroll_to(top);
                        if collapse_menu {
                            menu_open.set(false);
                        }
                    }
                }
                #[cfg(not(feature = "csr"))]
                {
                    log::trace!("nav click on #{id} ({}) without a document", ev.type_());
                }
            };
            view! {
                <li class="nav-item">
                    <a
                        class="nav-link"
                        class:active=move || {
                            app.nav.track();
                            app.read(|s| s.scroll.link_is_active(&active_href)).unwrap_or(false)
                        }
                        href=href
                        on:click=on_click
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar fixed-top" class:scrolled=move || app.nav.get().navbar_compact>
            <a class="navbar-brand" href="#home">"Portfolio"</a>
            <button
                class="navbar-toggler"
                aria-label="Toggle navigation"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                <span class="navbar-toggler-icon"></span>
            </button>
            <div class="navbar-collapse" class:show=move || menu_open.get()>
                <ul class="navbar-nav">{links}</ul>
            </div>
        </nav>
    }
}
