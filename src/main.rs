use yew::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod counter;
mod effects;
mod reveal;
mod router;
mod components {
    pub mod contact_form;
    pub mod faq;
    pub mod stats;
    pub mod time_slots;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod discretion;
    pub mod home;
    pub mod services;
    pub mod water_damage;
}

use gloo_timers::callback::Timeout;

use pages::{
    about::About,
    contact::Contact,
    discretion::Discretion,
    home::Home,
    services::Services,
    water_damage::WaterDamage,
};
use reveal::RevealCoordinator;
use router::{Page, Router};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: Page,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active_anchor = use_state(|| None::<String>);

    {
        let is_scrolled = is_scrolled.clone();
        let active_anchor = active_anchor.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let on_scroll = move || {
                    let scroll_y = effects::current_scroll_y();
                    is_scrolled.set(effects::nav_scrolled(scroll_y));

                    // Section offsets are re-read on every event: layout
                    // shifts as images load and reveals run.
                    let offsets = effects::visible_section_offsets();
                    let pairs: Vec<(&str, f64)> = offsets
                        .iter()
                        .map(|(id, top)| (id.as_str(), *top))
                        .collect();
                    active_anchor.set(
                        effects::active_section(scroll_y, &pairs).map(str::to_string),
                    );
                };
                on_scroll();

                let scroll_callback =
                    Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let page_link = |page: Page| {
        let menu_open = menu_open.clone();
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_navigate.emit(page.token());
        });
        html! {
            <a
                href={format!("#{}{}", config::ROUTE_PREFIX, page.token())}
                data-nav={page.token()}
                class={classes!("nav-link", (props.current == page).then(|| "active"))}
                {onclick}
            >
                { page.label() }
            </a>
        }
    };

    let anchor_link = |id: &'static str, text: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            effects::scroll_to_anchor(id);
        });
        html! {
            <a
                href={format!("#{id}")}
                class={classes!("nav-link", (active_anchor.as_deref() == Some(id)).then(|| "active"))}
                {onclick}
            >
                { text }
            </a>
        }
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    let brand_click = {
        let menu_open = menu_open.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_navigate.emit(Page::Home.token());
        })
    };

    html! {
        <nav
            id="site-nav"
            class={classes!(
                "top-nav",
                if *is_scrolled { "scrolled" } else { "transparent" },
            )}
        >
            <div class="nav-content">
                <a
                    href={format!("#{}home", config::ROUTE_PREFIX)}
                    data-nav="home"
                    class="nav-logo"
                    onclick={brand_click}
                >
                    {"Salem Steamer"}
                </a>

                <button
                    class="burger-menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for Page::ALL.into_iter().skip(1).map(page_link.clone()) }
                    {
                        if props.current == Page::Home {
                            html! {
                                <>
                                    { anchor_link("stats", "Results") }
                                    { anchor_link("faq", "FAQ") }
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let router = use_mut_ref(|| Router::new(&router::current_fragment()));
    let current = use_state(|| router.borrow().current());
    let coordinator = use_mut_ref(RevealCoordinator::new);

    // The show half of every routing event: reset scroll right away, then
    // once layout has settled ask the coordinator to pick up newly visible
    // revealables. Runs even when the requested page is already current.
    let show_page = {
        let coordinator = coordinator.clone();
        Callback::from(move |page: Page| {
            info!("Showing page {}", page.token());
            effects::scroll_to_top();
            let coordinator = coordinator.clone();
            Timeout::new(config::RESCAN_DELAY_MS, move || {
                if let Some(coordinator) = coordinator.borrow().as_ref() {
                    coordinator.rescan();
                }
            })
            .forget();
        })
    };

    // Back/forward re-derives the page from the restored fragment. No push,
    // or the stack would grow on every traversal.
    {
        let router = router.clone();
        let current = current.clone();
        let show_page = show_page.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let popstate_callback = Closure::wrap(Box::new(move || {
                    let transition = router
                        .borrow_mut()
                        .on_history_change(&router::current_fragment());
                    current.set(transition.page);
                    show_page.emit(transition.page);
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "popstate",
                        popstate_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback(
                            "popstate",
                            popstate_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Startup: show the page the initial fragment resolved to.
    {
        let current = current.clone();
        let show_page = show_page.clone();
        use_effect_with_deps(
            move |_| {
                show_page.emit(*current);
                || ()
            },
            (),
        );
    }

    let on_navigate = {
        let router = router.clone();
        let current = current.clone();
        Callback::from(move |token: &'static str| {
            if let Some(transition) = router.borrow_mut().navigate(token) {
                router::push_fragment(transition.page);
                current.set(transition.page);
                show_page.emit(transition.page);
            }
        })
    };

    // Hidden pages leave layout entirely, so their revealables can't
    // intersect and the scroll-spy ignores their sections.
    let hidden = |page: Page| !router.borrow().is_visible(page);

    html! {
        <>
            <Nav current={*current} on_navigate={on_navigate.clone()} />
            <main>
                <div class="page" data-page="home" hidden={hidden(Page::Home)}>
                    <Home on_navigate={on_navigate.clone()} />
                </div>
                <div class="page" data-page="about" hidden={hidden(Page::About)}>
                    <About on_navigate={on_navigate.clone()} />
                </div>
                <div class="page" data-page="services" hidden={hidden(Page::Services)}>
                    <Services on_navigate={on_navigate.clone()} />
                </div>
                <div class="page" data-page="water-damage" hidden={hidden(Page::WaterDamage)}>
                    <WaterDamage on_navigate={on_navigate.clone()} />
                </div>
                <div class="page" data-page="discretion" hidden={hidden(Page::Discretion)}>
                    <Discretion on_navigate={on_navigate.clone()} />
                </div>
                <div class="page" data-page="contact" hidden={hidden(Page::Contact)}>
                    <Contact />
                </div>
            </main>
            <footer class="site-footer">
                <p>{"© Salem Steamer, McLean VA. Family owned since 2009."}</p>
            </footer>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
