use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub on_navigate: Callback<&'static str>,
}

struct Service {
    name: &'static str,
    blurb: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        name: "Carpet steam cleaning",
        blurb: "Whole-home or single room. Pre-treatment, 220°F extraction, pile grooming and air movers on every visit.",
    },
    Service {
        name: "Area & oriental rugs",
        blurb: "Wool, silk and synthetics, cleaned in place or picked up for a full wash and controlled dry at our shop.",
    },
    Service {
        name: "Upholstery & drapery",
        blurb: "Sofas, sectionals, dining chairs and curtains, with fiber-appropriate solutions and fast-dry tooling.",
    },
    Service {
        name: "Tile & grout",
        blurb: "High-pressure steam and extraction that lifts years out of kitchen and bathroom grout lines.",
    },
    Service {
        name: "Odor & spot treatment",
        blurb: "Pet accidents, wine, ink, rust. We treat the pad as well as the fiber so the stain does not wick back.",
    },
    Service {
        name: "Water damage response",
        blurb: "Standing-water extraction and structural drying, around the clock. See the dedicated page for how a call unfolds.",
    },
];

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let on_navigate = props.on_navigate.clone();
    let water_damage = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit("water-damage");
        })
    };
    let book = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit("contact");
    });

    html! {
        <>
            <section class="page-hero">
                <h1>{"What we clean"}</h1>
                <p>{"Every job starts with a walk-through and a fixed quote. No surprises on the invoice."}</p>
            </section>

            <section class="services-grid">
                {
                    SERVICES.iter().map(|service| html! {
                        <div class="card fade-up">
                            <h3>{ service.name }</h3>
                            <p>{ service.blurb }</p>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section class="cta-section fade-up">
                <p>
                    {"Dealing with a burst pipe or a flooded basement right now? "}
                    <a href="#page-water-damage" onclick={water_damage}>{"Go straight to water damage response."}</a>
                </p>
                <button class="cta-button" onclick={book}>{"Schedule a Visit"}</button>
            </section>
        </>
    }
}
