use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let get_quote = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit("contact");
        })
    };

    html! {
        <>
            <section class="page-hero">
                <h1>{"A small crew that takes floors personally"}</h1>
            </section>

            <section class="about-story">
                <div class="fade-up">
                    <h2>{"From one van to all of McLean"}</h2>
                    <p>{"Salem Steamer started in 2009 with a single truck-mount unit and a short list of neighbors' houses. Word of mouth did the rest. Today we run three crews, and the founder still rides along on water-damage calls."}</p>
                </div>
                <div class="fade-up">
                    <h2>{"How we work"}</h2>
                    <p>{"We walk every job before we quote it, we pre-treat high-traffic lanes without being asked, and we groom the pile before we leave so it dries standing up. Small things, done every time."}</p>
                </div>
                <div class="fade-up">
                    <h2>{"Licensed, insured, local"}</h2>
                    <p>{"Fully bonded and insured in the Commonwealth of Virginia. Our technicians are employees, not day labor, and every one of them has steamed more rooms than they can count."}</p>
                </div>
            </section>

            <section class="cta-section fade-up">
                <h2>{"Have a room in mind already?"}</h2>
                <button class="cta-button" onclick={get_quote}>{"Get a Quote"}</button>
            </section>
        </>
    }
}
