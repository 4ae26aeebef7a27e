use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WaterDamageProps {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(WaterDamage)]
pub fn water_damage(props: &WaterDamageProps) -> Html {
    let call_us = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit("contact");
        })
    };

    html! {
        <>
            <section class="page-hero emergency">
                <h1>{"Water damage? Every hour matters."}</h1>
                <p>{"Burst pipes, failed water heaters, storm intrusion — we extract, dry and document, day or night."}</p>
            </section>

            <section class="steps-section">
                <h2 class="fade-up">{"How a call unfolds"}</h2>
                <ol class="steps">
                    <li class="fade-up">
                        <h3>{"1. Stop and assess"}</h3>
                        <p>{"We help you isolate the source over the phone, then map the wet footprint with moisture meters on arrival."}</p>
                    </li>
                    <li class="fade-up">
                        <h3>{"2. Extract"}</h3>
                        <p>{"Truck-mounted vacuums pull standing water from carpet, pad and hard floors in a single pass."}</p>
                    </li>
                    <li class="fade-up">
                        <h3>{"3. Dry and monitor"}</h3>
                        <p>{"Air movers and dehumidifiers run until daily meter readings come back to baseline, not just until things feel dry."}</p>
                    </li>
                    <li class="fade-up">
                        <h3>{"4. Document"}</h3>
                        <p>{"Photos, readings and a drying log, packaged the way insurance adjusters want them."}</p>
                    </li>
                </ol>
            </section>

            <section class="cta-section fade-up">
                <h2>{"Standing water right now?"}</h2>
                <button class="cta-button" onclick={call_us}>{"Reach Us Immediately"}</button>
            </section>
        </>
    }
}
