//! Contact form with inline status.
//!
//! DESIGN
//! ======
//! The inputs edit a local `ContactFields` signal that is copied into the
//! controller on submit. Submission follows the controller's two phases:
//! `begin_submit` synchronously, then the relay call awaited in a spawned
//! task, then `finish_submit`. Result statuses retire themselves through the
//! status timeline.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::contact::{ContactFields, ContactForm as FormController, FormError, StatusTone};

/// Mirror the controller's status into the view and schedule its fade-out.
fn publish_status(app: AppContext) {
    let Some((status, generation)) = app.read(|s| (s.contact.status().cloned(), s.contact.status_generation())) else {
        return;
    };
    let retire = status.as_ref().is_some_and(|s| s.tone != StatusTone::Info);
    app.form_status.set(status);
    if !retire {
        return;
    }
    let timings = app.config().timings;
    app.run_steps(FormController::status_timeline(&timings), move |transition| {
        if let Some(status) = app.write(|s| {
            s.contact.apply_status_transition(generation, transition);
            s.contact.status().cloned()
        }) {
            app.form_status.set(status);
        }
    });
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let app = expect_context::<AppContext>();
    let fields = RwSignal::new(ContactFields::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((begun, timeout_ms)) = app.write(|s| {
            *s.contact.fields_mut() = fields.get_untracked();
            (s.contact.begin_submit(), s.config.relay.timeout_ms)
        }) else {
            return;
        };
        let pending = match begun {
            Ok(pending) => pending,
            Err(FormError::Busy) => return,
            Err(e) => {
                log::debug!("contact form invalid: {e}");
                publish_status(app);
                return;
            }
        };
        app.sending.set(true);
        publish_status(app);

        let Some(scheduler) = app.read(|s| std::rc::Rc::clone(&s.scheduler)) else {
            return;
        };
        crate::app::spawn(async move {
            let outcome = pending.settle(&*scheduler, timeout_ms).await;
            let finished = app.write(|s| {
                let result = s.contact.finish_submit(outcome);
                (result, s.contact.fields().clone())
            });
            app.sending.set(false);
            if let Some((result, cleared)) = finished {
                if result.is_ok() {
                    fields.set(cleared);
                }
                publish_status(app);
            }
        });
    };

    view! {
        <section id="contact" class="contact">
            <form class="contact-form" on:submit=on_submit novalidate=true>
                <input
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    prop:value=move || fields.get().name
                    on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    prop:value=move || fields.get().email
                    on:input=move |ev| fields.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    type="text"
                    name="subject"
                    placeholder="Subject"
                    prop:value=move || fields.get().subject
                    on:input=move |ev| fields.update(|f| f.subject = event_target_value(&ev))
                />
                <textarea
                    name="message"
                    rows="5"
                    placeholder="Your Message"
                    prop:value=move || fields.get().message
                    on:input=move |ev| fields.update(|f| f.message = event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn btn-primary" disabled=move || app.sending.get()>
                    {move || if app.sending.get() { "Sending..." } else { "Send Message" }}
                </button>
                {move || {
                    app.form_status
                        .get()
                        .map(|status| {
                            view! {
                                <div
                                    class=status.class()
                                    style=if status.faded { "opacity: 0; transition: opacity 0.5s;" } else { "opacity: 1;" }
                                >
                                    {status.text.clone()}
                                </div>
                            }
                        })
                }}
            </form>
        </section>
    }
}
