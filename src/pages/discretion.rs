use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DiscretionProps {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Discretion)]
pub fn discretion(props: &DiscretionProps) -> Html {
    let contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit("contact");
        })
    };

    html! {
        <>
            <section class="page-hero">
                <h1>{"Quiet work, unmarked vans"}</h1>
                <p>{"Some jobs are nobody's business but yours. We built a service tier around that."}</p>
            </section>

            <section class="discretion-points">
                <div class="fade-up">
                    <h3>{"Unmarked vehicles on request"}</h3>
                    <p>{"No wraps, no magnet signs, plain coveralls. The neighbors see a tradesman's van and nothing more."}</p>
                </div>
                <div class="fade-up">
                    <h3>{"Flexible hours"}</h3>
                    <p>{"Early mornings, late evenings and weekends at no premium for discretion-tier bookings."}</p>
                </div>
                <div class="fade-up">
                    <h3>{"Paper-light"}</h3>
                    <p>{"Invoices read \"cleaning services.\" We keep no photos and share no before-and-afters from these jobs, ever."}</p>
                </div>
                <div class="fade-up">
                    <h3>{"One point of contact"}</h3>
                    <p>{"You deal with one senior technician from the first call to the final walk-through."}</p>
                </div>
            </section>

            <section class="cta-section fade-up">
                <h2>{"Tell us only what we need to know"}</h2>
                <button class="cta-button" onclick={contact}>{"Arrange a Discreet Visit"}</button>
            </section>
        </>
    }
}
