use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::components::time_slots::TimeSlots;
use crate::config;

#[derive(Clone, Copy, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Received,
}

/// Booking form with a scripted submission: the button walks through
/// "Sending…" and "Message Received", then the form resets. There is no
/// error path; submission always succeeds.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let state = use_state(|| SubmitState::Idle);
    let form_ref = use_node_ref();
    let date_ref = use_node_ref();

    // The booking date can't be in the past.
    {
        let date_ref = date_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(input) = date_ref.cast::<HtmlInputElement>() {
                    let today = Utc::now().format("%Y-%m-%d").to_string();
                    let _ = input.set_attribute("min", &today);
                }
                || ()
            },
            (),
        );
    }

    let onsubmit = {
        let state = state.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state != SubmitState::Idle {
                return;
            }
            state.set(SubmitState::Sending);
            let state = state.clone();
            let form_ref = form_ref.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::FORM_SEND_DELAY_MS).await;
                state.set(SubmitState::Received);
                TimeoutFuture::new(config::FORM_RESET_DELAY_MS).await;
                if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                    form.reset();
                }
                state.set(SubmitState::Idle);
            });
        })
    };

    let button_label = match *state {
        SubmitState::Idle => "Request My Quote",
        SubmitState::Sending => "Sending…",
        SubmitState::Received => "Message Received",
    };

    html! {
        <form id="contact-form" ref={form_ref} {onsubmit}>
            <div class="form-row">
                <label for="contact-name">{"Name"}</label>
                <input id="contact-name" name="name" type="text" required=true />
            </div>
            <div class="form-row">
                <label for="contact-phone">{"Phone"}</label>
                <input id="contact-phone" name="phone" type="tel" required=true />
            </div>
            <div class="form-row">
                <label for="booking-date">{"Preferred date"}</label>
                <input id="booking-date" name="date" type="date" ref={date_ref} />
            </div>
            <div class="form-row">
                <label>{"Arrival window"}</label>
                <TimeSlots slots={vec!["8–10 am", "10–12 am", "12–2 pm", "2–4 pm"]} />
            </div>
            <div class="form-row">
                <label for="contact-message">{"What needs cleaning?"}</label>
                <textarea id="contact-message" name="message" rows="4"></textarea>
            </div>
            <button
                type="submit"
                class={classes!("submit-button", (*state == SubmitState::Received).then(|| "success"))}
                disabled={*state != SubmitState::Idle}
            >
                { button_label }
            </button>
        </form>
    }
}
