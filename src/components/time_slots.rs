use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct TimeSlotsProps {
    pub slots: Vec<&'static str>,
}

/// Arrival-window picker: one group of slots, at most one selected. Clicking
/// a slot selects it and deselects the rest of the group.
#[function_component(TimeSlots)]
pub fn time_slots(props: &TimeSlotsProps) -> Html {
    let selected = use_state(|| None::<usize>);

    html! {
        <div class="time-slots">
            {
                props.slots.iter().enumerate().map(|(index, slot)| {
                    let onclick = {
                        let selected = selected.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            selected.set(Some(index));
                        })
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("time-slot", (*selected == Some(index)).then(|| "selected"))}
                            {onclick}
                        >
                            { *slot }
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
