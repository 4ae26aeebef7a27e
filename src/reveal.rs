//! One-shot entrance reveals. Elements marked `fade-up` get the `visible`
//! class the first time enough of them enters the viewport, then stop being
//! watched for good. Pages that start hidden contribute their elements later,
//! via `rescan` after a page switch.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config;

const ID_ATTR: &str = "data-reveal-id";
const MARKER_SELECTOR: &str = ".fade-up:not(.visible)";

/// Pure bookkeeping for the coordinator: which element ids are under watch
/// and which have already been revealed. Reveals are monotonic; a revealed id
/// can never re-enter the watched set.
#[derive(Default)]
pub struct RevealRegistry {
    next_id: u64,
    watched: HashSet<u64>,
    revealed: HashSet<u64>,
}

impl RevealRegistry {
    pub fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// True when the caller should start observing this id. False for ids
    /// already watched or already revealed.
    pub fn begin_watch(&mut self, id: u64) -> bool {
        if self.revealed.contains(&id) {
            return false;
        }
        self.watched.insert(id)
    }

    /// True exactly once per id; the id leaves the watched set permanently.
    pub fn mark_revealed(&mut self, id: u64) -> bool {
        if !self.revealed.insert(id) {
            return false;
        }
        self.watched.remove(&id);
        true
    }

    pub fn is_revealed(&self, id: u64) -> bool {
        self.revealed.contains(&id)
    }

    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }
}

/// DOM side of the coordinator: one `IntersectionObserver` shared by every
/// revealable element, with the registry deciding what to observe and when
/// to let go.
pub struct RevealCoordinator {
    registry: Rc<RefCell<RevealRegistry>>,
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealCoordinator {
    pub fn new() -> Option<Self> {
        let registry = Rc::new(RefCell::new(RevealRegistry::default()));

        let callback = {
            let registry = registry.clone();
            Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        if let Some(id) = element_id(&target) {
                            if registry.borrow_mut().mark_revealed(id) {
                                let _ = target.class_list().add_1("visible");
                            }
                        }
                        observer.unobserve(&target);
                    }
                },
            )
        };

        let mut init = IntersectionObserverInit::new();
        init.threshold(&JsValue::from(config::REVEAL_THRESHOLD))
            .root_margin(config::REVEAL_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .ok()?;

        Some(RevealCoordinator {
            registry,
            observer,
            _callback: callback,
        })
    }

    /// Registers one element for visibility monitoring. No-op when the
    /// element is already watched or already revealed.
    pub fn watch(&self, element: &Element) {
        let id = self.ensure_id(element);
        if self.registry.borrow_mut().begin_watch(id) {
            self.observer.observe(element);
        }
    }

    /// Sweeps the document for revealable elements that are not yet revealed
    /// and watches each. Run after page transitions; idempotent, because
    /// `watch` refuses duplicates.
    pub fn rescan(&self) {
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(MARKER_SELECTOR) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                self.watch(&element);
            }
        }
    }

    fn ensure_id(&self, element: &Element) -> u64 {
        if let Some(id) = element_id(element) {
            return id;
        }
        let id = self.registry.borrow_mut().allocate();
        let _ = element.set_attribute(ID_ATTR, &id.to_string());
        id
    }
}

fn element_id(element: &Element) -> Option<u64> {
    element.get_attribute(ID_ATTR)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::RevealRegistry;

    #[test]
    fn reveal_happens_at_most_once() {
        let mut reg = RevealRegistry::default();
        let id = reg.allocate();
        assert!(reg.begin_watch(id));
        assert!(reg.mark_revealed(id));
        assert!(!reg.mark_revealed(id));
        assert!(reg.is_revealed(id));
        assert_eq!(reg.watched_count(), 0);
    }

    #[test]
    fn revealed_elements_are_never_watched_again() {
        let mut reg = RevealRegistry::default();
        let id = reg.allocate();
        assert!(reg.begin_watch(id));
        assert!(reg.mark_revealed(id));
        assert!(!reg.begin_watch(id));
        assert_eq!(reg.watched_count(), 0);
    }

    #[test]
    fn repeat_rescan_watches_nothing_new() {
        let mut reg = RevealRegistry::default();
        let ids: Vec<u64> = (0..3).map(|_| reg.allocate()).collect();

        let first: usize = ids.iter().filter(|id| reg.begin_watch(**id)).count();
        assert_eq!(first, 3);

        // Same sweep again with no intervening visibility change.
        let second: usize = ids.iter().filter(|id| reg.begin_watch(**id)).count();
        assert_eq!(second, 0);
        assert_eq!(reg.watched_count(), 3);
    }

    #[test]
    fn rescan_picks_up_only_unrevealed_newcomers() {
        let mut reg = RevealRegistry::default();
        let early = reg.allocate();
        assert!(reg.begin_watch(early));
        assert!(reg.mark_revealed(early));

        // A page switch exposes a new element; only it gets watched.
        let late = reg.allocate();
        assert!(reg.begin_watch(late));
        assert!(!reg.begin_watch(early));
        assert_eq!(reg.watched_count(), 1);
    }
}
