//! Stat counter animation: an eased count-up from zero to a declared target,
//! driven by animation frames. The easing math is a pure step function so it
//! can be tested without a frame scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::Element;

use crate::config;

/// What a counter animates toward, parsed from the element's `data-count`
/// and `data-suffix` attributes.
#[derive(Clone, PartialEq, Debug)]
pub struct CounterSpec {
    pub target: f64,
    pub suffix: String,
    pub duration_ms: f64,
}

impl CounterSpec {
    pub fn new(target: f64, suffix: impl Into<String>) -> Self {
        CounterSpec {
            target,
            suffix: suffix.into(),
            duration_ms: config::COUNTER_DURATION_MS,
        }
    }

    /// One animation step. Returns the text to display after `elapsed_ms`
    /// and whether the animation has finished. Fractional targets render
    /// with one decimal, integral targets floor to whole numbers; at
    /// completion the text equals the exact target.
    pub fn frame(&self, elapsed_ms: f64) -> (String, bool) {
        let progress = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - progress).powi(3);
        let value = eased * self.target;
        let text = if self.target.fract() != 0.0 {
            format!("{:.1}{}", value, self.suffix)
        } else {
            format!("{}{}", value.floor() as i64, self.suffix)
        };
        (text, progress >= 1.0)
    }
}

struct AnimState {
    start_ms: Option<f64>,
    frame: Option<AnimationFrame>,
}

/// Runs the count-up on `element`, re-scheduling itself each frame until the
/// progress ratio reaches 1. The frame handle lives in the shared state; the
/// whole loop drops itself once done.
pub fn animate(element: Element, spec: CounterSpec) {
    let state = Rc::new(RefCell::new(AnimState {
        start_ms: None,
        frame: None,
    }));
    schedule(element, spec, state);
}

fn schedule(element: Element, spec: CounterSpec, state: Rc<RefCell<AnimState>>) {
    let shared = state.clone();
    let handle = request_animation_frame(move |timestamp_ms| {
        let elapsed = {
            let mut st = shared.borrow_mut();
            st.frame.take();
            let start = *st.start_ms.get_or_insert(timestamp_ms);
            timestamp_ms - start
        };
        let (text, done) = spec.frame(elapsed);
        element.set_text_content(Some(&text));
        if !done {
            schedule(element, spec, shared);
        }
    });
    state.borrow_mut().frame = Some(handle);
}

#[cfg(test)]
mod tests {
    use super::CounterSpec;

    #[test]
    fn fractional_target_lands_exactly_on_its_value() {
        let spec = CounterSpec::new(42.5, "%");
        let (text, done) = spec.frame(spec.duration_ms);
        assert_eq!(text, "42.5%");
        assert!(done);

        // Past the duration the value stays pinned.
        let (text, done) = spec.frame(spec.duration_ms * 3.0);
        assert_eq!(text, "42.5%");
        assert!(done);
    }

    #[test]
    fn integral_target_floors_and_finishes_whole() {
        let spec = CounterSpec::new(1200.0, "+");
        let (start, done) = spec.frame(0.0);
        assert_eq!(start, "0+");
        assert!(!done);

        let (end, done) = spec.frame(spec.duration_ms);
        assert_eq!(end, "1200+");
        assert!(done);
    }

    #[test]
    fn count_never_decreases() {
        let spec = CounterSpec::new(98.0, "");
        let mut last = -1.0;
        for step in 0..=18 {
            let (text, _) = spec.frame(step as f64 * 100.0);
            let value: f64 = text.parse().unwrap();
            assert!(value >= last, "value regressed at step {step}");
            last = value;
        }
    }

    #[test]
    fn ease_out_front_loads_the_motion() {
        let spec = CounterSpec::new(100.0, "");
        let (halfway, done) = spec.frame(spec.duration_ms / 2.0);
        assert!(!done);
        let value: f64 = halfway.parse().unwrap();
        // Cubic ease-out has covered 87.5% of the distance at half time.
        assert_eq!(value, 87.0);
    }
}
