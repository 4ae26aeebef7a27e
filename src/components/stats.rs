use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::counter::{self, CounterSpec};

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: f64,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
}

/// One animated statistic. The count-up starts the first time half of the
/// number is visible and runs exactly once.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let value_ref = use_node_ref();
    let spec = CounterSpec::new(props.value, props.suffix.to_string());

    {
        let value_ref = value_ref.clone();
        let spec = spec.clone();
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
                if let Some(element) = value_ref.cast::<Element>() {
                    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    counter::animate(entry.target(), spec.clone());
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    );
                    let mut init = IntersectionObserverInit::new();
                    init.threshold(&JsValue::from(config::COUNTER_THRESHOLD));
                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &init,
                    ) {
                        observer.observe(&element);
                        cleanup = Box::new(move || {
                            observer.disconnect();
                            drop(callback);
                        });
                    }
                }
                move || cleanup()
            },
            (),
        );
    }

    let initial = if props.value.fract() != 0.0 { "0.0" } else { "0" };

    html! {
        <div class="stat">
            <span
                class="stat-value"
                ref={value_ref}
                data-count={props.value.to_string()}
                data-suffix={props.suffix.clone()}
            >
                { format!("{}{}", initial, props.suffix) }
            </span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}
