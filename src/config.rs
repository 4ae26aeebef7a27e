//! Tuning knobs shared across the behavior layer. Values match the live site.

/// Fragment prefix for page routes: `#page-<token>`.
pub const ROUTE_PREFIX: &str = "page-";

/// Scroll depth (px) past which the top nav switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 60.0;

/// Fixed-nav height compensation for smooth in-page scrolling (px).
pub const NAV_ANCHOR_OFFSET: f64 = 80.0;

/// Lead distance for the scroll-spy: a section counts as active once the
/// viewport is within this many px of its top.
pub const SCROLLSPY_OFFSET: f64 = 120.0;

/// Hero background moves at this fraction of the scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.3;

/// Fraction of a revealable element that must be visible before it animates.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Bottom edge pulled up so reveals fire slightly before the element reaches
/// the literal viewport edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

/// Delay between a page switch and the reveal re-scan, so the newly unhidden
/// subtree has layout before the observer evaluates it.
pub const RESCAN_DELAY_MS: u32 = 50;

/// Stat counters start once half the element is visible.
pub const COUNTER_THRESHOLD: f64 = 0.5;

pub const COUNTER_DURATION_MS: f64 = 1800.0;

/// Simulated round trip for the contact form.
pub const FORM_SEND_DELAY_MS: u32 = 1200;

/// How long the success state lingers before the form resets.
pub const FORM_RESET_DELAY_MS: u32 = 4000;
