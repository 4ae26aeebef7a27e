//! Hash-based page router. Every logical page lives in the one document; the
//! router decides which section is visible and keeps the history stack in
//! step with it. Unknown fragments fall back to the home page so a stale or
//! hand-typed link never leaves the site blank.

use wasm_bindgen::JsValue;
use web_sys::window;

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Home,
    About,
    Services,
    WaterDamage,
    Discretion,
    Contact,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::WaterDamage,
        Page::Discretion,
        Page::Contact,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::WaterDamage => "water-damage",
            Page::Discretion => "discretion",
            Page::Contact => "contact",
        }
    }

    pub fn from_token(token: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.token() == token)
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::WaterDamage => "Water Damage",
            Page::Discretion => "Discretion",
            Page::Contact => "Contact",
        }
    }
}

/// Maps a location fragment (leading `#` tolerated) to a page. Only
/// fragments carrying the routing prefix can name a page; everything else,
/// including a bare token without the prefix, yields `Home`.
pub fn resolve_token(fragment: &str) -> Page {
    fragment
        .trim_start_matches('#')
        .strip_prefix(config::ROUTE_PREFIX)
        .and_then(Page::from_token)
        .unwrap_or(Page::Home)
}

/// Outcome of a routing event: which page to show and whether the caller
/// must push a history entry. History traversals never push; only explicit
/// navigation does.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transition {
    pub page: Page,
    pub push: bool,
}

/// Owns the "current page" state. Constructed once at startup and driven by
/// nav clicks and popstate events.
pub struct Router {
    current: Page,
}

impl Router {
    pub fn new(fragment: &str) -> Self {
        Router {
            current: resolve_token(fragment),
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_visible(&self, page: Page) -> bool {
        page == self.current
    }

    /// Explicit navigation from a control carrying a page token. Unknown
    /// tokens are silently ignored: no state change, no history entry.
    pub fn navigate(&mut self, token: &str) -> Option<Transition> {
        let page = Page::from_token(token)?;
        self.current = page;
        Some(Transition { page, push: true })
    }

    /// Back/forward traversal: re-derive the page from the fragment the
    /// browser restored. Never pushes, otherwise the stack would grow on
    /// every back press.
    pub fn on_history_change(&mut self, fragment: &str) -> Transition {
        let page = resolve_token(fragment);
        self.current = page;
        Transition { page, push: false }
    }
}

/// Current location fragment without the leading `#`, or empty when absent.
pub fn current_fragment() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| h.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

/// Pushes one history entry encoding the page in the fragment.
pub fn push_fragment(page: Page) {
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let url = format!("#{}{}", config::ROUTE_PREFIX, page.token());
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&url));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fragments_fall_back_to_home() {
        assert_eq!(resolve_token(""), Page::Home);
        assert_eq!(resolve_token("bogus"), Page::Home);
        assert_eq!(resolve_token("page-bogus"), Page::Home);
        assert_eq!(resolve_token("#page-nope"), Page::Home);
    }

    #[test]
    fn prefixed_tokens_resolve_to_their_page() {
        for page in Page::ALL {
            let fragment = format!("page-{}", page.token());
            assert_eq!(resolve_token(&fragment), page);
            assert_eq!(resolve_token(&format!("#{fragment}")), page);
        }
    }

    #[test]
    fn bare_tokens_without_prefix_fall_back_to_home() {
        // "#about" names an in-page anchor at most, never a page.
        assert_eq!(resolve_token("#about"), Page::Home);
        for page in Page::ALL {
            assert_eq!(resolve_token(page.token()), Page::Home);
        }
        // The prefixed form still routes.
        assert_eq!(resolve_token("#page-about"), Page::About);
    }

    #[test]
    fn startup_honors_initial_fragment() {
        assert_eq!(Router::new("page-contact").current(), Page::Contact);
        assert_eq!(Router::new("page-bogus").current(), Page::Home);
        assert_eq!(Router::new("").current(), Page::Home);
    }

    #[test]
    fn exactly_one_page_visible_after_any_transition() {
        let mut router = Router::new("");
        for token in ["services", "water-damage", "not-a-page", "contact"] {
            let _ = router.navigate(token);
            let visible = Page::ALL.iter().filter(|p| router.is_visible(**p)).count();
            assert_eq!(visible, 1);
            assert!(router.is_visible(router.current()));
        }
    }

    #[test]
    fn navigate_pushes_history_traversal_does_not() {
        let mut router = Router::new("");
        let nav = router.navigate("services").unwrap();
        assert!(nav.push);
        assert_eq!(nav.page, Page::Services);

        let back = router.on_history_change("page-home");
        assert!(!back.push);
        assert_eq!(back.page, Page::Home);
        assert_eq!(router.current(), Page::Home);
    }

    #[test]
    fn renavigating_to_the_current_page_still_transitions() {
        // Re-clicking the active nav link pushes an entry and re-shows the
        // page; it is not swallowed as a no-op.
        let mut router = Router::new("page-about");
        let again = router.navigate("about").unwrap();
        assert!(again.push);
        assert_eq!(again.page, Page::About);
        assert_eq!(router.current(), Page::About);
    }

    #[test]
    fn invalid_navigation_target_is_ignored() {
        let mut router = Router::new("page-about");
        assert!(router.navigate("basement-flooding").is_none());
        assert_eq!(router.current(), Page::About);
    }

    #[test]
    fn traversal_to_bad_fragment_falls_back_instead_of_ignoring() {
        let mut router = Router::new("page-services");
        let t = router.on_history_change("page-garbage");
        assert_eq!(t.page, Page::Home);
        assert_eq!(router.current(), Page::Home);
    }
}
