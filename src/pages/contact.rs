use yew::prelude::*;

use crate::components::contact_form::ContactForm;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <>
            <section class="page-hero">
                <h1>{"Book your cleaning"}</h1>
                <p>{"Tell us what needs attention and pick a window that suits you. We confirm every booking by phone the same day."}</p>
            </section>

            <section class="contact-section">
                <div class="contact-details fade-up">
                    <h3>{"Salem Steamer — McLean"}</h3>
                    <p>{"Serving McLean, Great Falls, Falls Church and Arlington."}</p>
                    <p>{"Mon–Sat, 8 am–6 pm. Water damage response around the clock."}</p>
                </div>
                <div class="fade-up">
                    <ContactForm />
                </div>
            </section>
        </>
    }
}
