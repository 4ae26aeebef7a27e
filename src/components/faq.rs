use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: String,
    open: bool,
    on_toggle: Callback<usize>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

/// Accordion with at most one item open: opening an item closes the rest,
/// clicking the open item closes it.
#[function_component(Faq)]
pub fn faq() -> Html {
    let open_index = use_state(|| None::<usize>);

    let on_toggle = {
        let open_index = open_index.clone();
        Callback::from(move |index: usize| {
            if *open_index == Some(index) {
                open_index.set(None);
            } else {
                open_index.set(Some(index));
            }
        })
    };

    let item = |index: usize, question: &str, body: Html| {
        html! {
            <FaqItem
                {index}
                question={question.to_string()}
                open={*open_index == Some(index)}
                on_toggle={on_toggle.clone()}
            >
                { body }
            </FaqItem>
        }
    };

    html! {
        <div class="faq-list">
            { item(0, "How long does carpet take to dry?", html! {
                <p>{"Most carpets are walk-on dry in four to six hours. We run air movers while we work and use low-moisture steam, so drying time is usually shorter than people expect."}</p>
            }) }
            { item(1, "Do I need to move furniture before you arrive?", html! {
                <p>{"No. We move sofas, tables and light furniture ourselves and set everything back on protective blocks. We only ask that breakables and electronics are cleared from the rooms we clean."}</p>
            }) }
            { item(2, "Are your cleaning solutions safe for kids and pets?", html! {
                <p>{"Yes. We use hot-water extraction with plant-based, fragrance-free detergents. Once the carpet is dry there is no residue to worry about."}</p>
            }) }
            { item(3, "What does a typical visit cost?", html! {
                <p>{"Pricing is by room and by fiber type. A standard three-room clean in McLean runs well under what most homeowners expect, and the quote we give on the phone is the price you pay."}</p>
            }) }
            { item(4, "Can you remove pet odors completely?", html! {
                <p>{"In almost every case, yes. Odor lives in the pad as much as the fiber, so we treat both. Where the subfloor is affected we will tell you honestly before any work starts."}</p>
            }) }
        </div>
    }
}
