use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::faq::Faq;
use crate::components::stats::StatCounter;
use crate::effects;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let hero_bg_ref = use_node_ref();

    // Parallax: the hero background trails the scroll.
    {
        let hero_bg_ref = hero_bg_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let callback = Closure::<dyn Fn()>::new(move || {
                    if let Some(bg) = hero_bg_ref.cast::<HtmlElement>() {
                        let offset = effects::parallax_offset(effects::current_scroll_y());
                        let _ = bg
                            .style()
                            .set_property("transform", &format!("translateY({offset}px)"));
                    }
                });
                window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let book_now = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit("contact");
        })
    };

    let jump_to = |id: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            effects::scroll_to_anchor(id);
        })
    };

    html! {
        <>
            <section id="hero" class="hero">
                <div class="hero-bg" ref={hero_bg_ref}></div>
                <div class="hero-content fade-up">
                    <h1>{"Carpets, rugs and upholstery — steamed back to life"}</h1>
                    <p>{"Salem Steamer is a family-run steam cleaning crew serving McLean and the close-in Virginia suburbs. Hot-water extraction, honest quotes, and floors you can walk on the same afternoon."}</p>
                    <button class="cta-button" onclick={book_now.clone()}>{"Book a Cleaning"}</button>
                    <a href="#stats" class="hero-scroll-hint" onclick={jump_to("stats")}>
                        {"See the numbers ↓"}
                    </a>
                </div>
            </section>

            <section id="stats" class="stats-section">
                <div class="stats-grid fade-up">
                    <StatCounter value={12480.0} label="Rooms steamed since 2009" />
                    <StatCounter value={42.5} suffix="%" label="Less residual moisture than rental machines" />
                    <StatCounter value={98.0} suffix="%" label="Customers who book again" />
                    <StatCounter value={4.9} label="Average review score" />
                </div>
            </section>

            <section id="why" class="why-section">
                <h2 class="fade-up">{"Why neighbors call us first"}</h2>
                <div class="card-grid">
                    <div class="card fade-up">
                        <h3>{"Truck-mounted steam"}</h3>
                        <p>{"220°F hot-water extraction pulls out what rental machines push deeper. No soapy residue, no crunchy carpet."}</p>
                    </div>
                    <div class="card fade-up">
                        <h3>{"Same-afternoon dry"}</h3>
                        <p>{"Air movers run while we clean. Most rooms are walk-on dry in four to six hours, not two days."}</p>
                    </div>
                    <div class="card fade-up">
                        <h3>{"The price on the phone"}</h3>
                        <p>{"The quote we give before we arrive is the invoice we leave behind. No upsells at the front door."}</p>
                    </div>
                </div>
            </section>

            <section id="faq" class="faq-section">
                <h2 class="fade-up">{"Common questions"}</h2>
                <div class="fade-up">
                    <Faq />
                </div>
            </section>

            <section id="cta" class="cta-section fade-up">
                <h2>{"Ready for cleaner floors?"}</h2>
                <button class="cta-button" onclick={book_now}>{"Get a Free Quote"}</button>
            </section>
        </>
    }
}
