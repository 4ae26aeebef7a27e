//! Stateless scroll-driven behaviors: nav restyling, scroll-spy resolution,
//! smooth anchor scrolling and the hero parallax offset. The decisions are
//! pure functions; the DOM glue lives with the components that install the
//! listeners.

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;

/// Whether the top nav should render in its solid "scrolled" style.
pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

/// Vertical offset for the hero background at the given scroll depth.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * config::PARALLAX_FACTOR
}

/// Scroll-spy: the active section is the last one whose top the viewport has
/// reached, with a lead of [`config::SCROLLSPY_OFFSET`]. `sections` pairs an
/// anchor id with the section's document offset, in document order.
pub fn active_section<'a>(scroll_y: f64, sections: &[(&'a str, f64)]) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - config::SCROLLSPY_OFFSET)
        .map(|(id, _)| *id)
        .last()
}

pub fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(w) = window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Smoothly scrolls an in-page anchor target under the fixed nav.
pub fn scroll_to_anchor(id: &str) {
    let Some(w) = window() else { return };
    let Some(target) = w.document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let top = target.get_bounding_client_rect().top() + current_scroll_y()
        - config::NAV_ANCHOR_OFFSET;
    let mut opts = ScrollToOptions::new();
    opts.top(top).behavior(ScrollBehavior::Smooth);
    w.scroll_to_with_scroll_to_options(&opts);
}

/// Document offsets of the in-page sections of the currently visible page,
/// in document order. Hidden sections report no layout and are skipped.
pub fn visible_section_offsets() -> Vec<(String, f64)> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("[data-page]:not([hidden]) section[id]") else {
        return Vec::new();
    };
    let mut offsets = Vec::new();
    for i in 0..nodes.length() {
        let Some(section) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        if let Some(id) = section.get_attribute("id") {
            offsets.push((id, section.offset_top() as f64));
        }
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_restyles_only_past_the_threshold() {
        assert!(!nav_scrolled(0.0));
        assert!(!nav_scrolled(60.0));
        assert!(nav_scrolled(60.5));
    }

    #[test]
    fn parallax_tracks_a_fraction_of_scroll() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(500.0), 150.0);
    }

    #[test]
    fn last_reached_section_wins() {
        let sections = [("hero", 0.0), ("stats", 500.0), ("faq", 1200.0)];
        assert_eq!(active_section(0.0, &sections), Some("hero"));
        assert_eq!(active_section(379.0, &sections), Some("hero"));
        assert_eq!(active_section(380.0, &sections), Some("stats"));
        assert_eq!(active_section(1080.0, &sections), Some("faq"));
        assert_eq!(active_section(5000.0, &sections), Some("faq"));
    }

    #[test]
    fn no_sections_means_no_active_link() {
        assert_eq!(active_section(300.0, &[]), None);
    }
}
