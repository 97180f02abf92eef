//! Hero section: typed headline over the particle canvas.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::util::typing::{TypingFrame, typing_timeline};

#[component]
pub fn Hero() -> impl IntoView {
    let app = expect_context::<AppContext>();
    let config = app.config();
    let typed = RwSignal::new(String::new());
    let complete = RwSignal::new(false);
    let started = RwSignal::new(false);

    Effect::new(move || {
        if !app.typing_started.get() || started.get_untracked() {
            return;
        }
        started.set(true);
        app.run_steps(typing_timeline(&config.headline, &config.timings), move |frame| match frame {
            TypingFrame::Text(text) => typed.set(text),
            TypingFrame::Complete => complete.set(true),
        });
    });

    view! {
        <section id="home" class="hero">
            <ParticleCanvas />
            <h1 class="typing-text" class:complete=move || complete.get()>
                {move || typed.get()}
            </h1>
        </section>
    }
}

/// Full-size canvas running the particle field.
#[component]
pub fn ParticleCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    {
        let app = expect_context::<AppContext>();
        let started = RwSignal::new(false);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if started.get_untracked() {
                return;
            }
            started.set(true);
            animation::start(canvas, app.config().particles);
        });
    }

    view! { <canvas class="particles" node_ref=canvas_ref aria-hidden="true"></canvas> }
}

#[cfg(feature = "csr")]
mod animation {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Interval;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast as _;

    use crate::config::ParticleConfig;
    use crate::util::particles::{ParticleField, draw};

    const FRAME_MS: u32 = 16;

    /// Size the canvas to its box, seed the field and animate it until the
    /// component is dropped.
    pub(super) fn start(canvas: web_sys::HtmlCanvasElement, config: ParticleConfig) {
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
        else {
            log::warn!("particle canvas has no 2d context");
            return;
        };
        let (width, height) = fit(&canvas);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = js_sys::Date::now() as u64;
        let field = Rc::new(RefCell::new(ParticleField::new(config, width, height, seed)));
        let pointer = Rc::new(RefCell::new(None::<(f64, f64)>));

        let hover = {
            let pointer = Rc::clone(&pointer);
            let canvas = canvas.clone();
            window_event_listener(leptos::ev::mousemove, move |ev| {
                let rect = canvas.get_bounding_client_rect();
                let x = f64::from(ev.client_x()) - rect.left();
                let y = f64::from(ev.client_y()) - rect.top();
                let inside = x >= 0.0 && y >= 0.0 && x <= rect.width() && y <= rect.height();
                *pointer.borrow_mut() = inside.then_some((x, y));
            })
        };
        let push = {
            let field = Rc::clone(&field);
            let pointer = Rc::clone(&pointer);
            window_event_listener(leptos::ev::click, move |_| {
                if let Some((x, y)) = *pointer.borrow() {
                    field.borrow_mut().push(x, y);
                }
            })
        };
        let resize = {
            let field = Rc::clone(&field);
            let canvas = canvas.clone();
            window_event_listener(leptos::ev::resize, move |_| {
                let (w, h) = fit(&canvas);
                field.borrow_mut().resize(w, h);
            })
        };

        // The hero lives as long as the page, so the ticker is never cancelled.
        Interval::new(FRAME_MS, move || {
            let mut field = field.borrow_mut();
            field.step();
            draw(&field, &ctx, *pointer.borrow());
        })
        .forget();
        on_cleanup(move || {
            hover.remove();
            push.remove();
            resize.remove();
        });
    }

    fn fit(canvas: &web_sys::HtmlCanvasElement) -> (f64, f64) {
        let width = canvas.client_width().max(1).unsigned_abs();
        let height = canvas.client_height().max(1).unsigned_abs();
        canvas.set_width(width);
        canvas.set_height(height);
        (f64::from(width), f64::from(height))
    }
}
