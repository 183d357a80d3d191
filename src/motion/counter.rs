//! Count-up animation for the stat numbers.
//!
//! A counter eases from 0 to its target with a cubic ease-out, one step per
//! display frame. The frame math is kept separate from the browser frame loop
//! so it can run against a synthetic clock.

use log::debug;

use crate::config::{
    COUNTER_DEFAULT_DURATION_MS, COUNTER_MAX_DECIMALS, LARGE_TARGET_MIN_DURATION_MS,
    LARGE_TARGET_THRESHOLD,
};
use crate::dom::{self, FrameLoop};
use crate::motion::number_format::{format_compact, format_fixed, round_to};

#[derive(Clone, Debug, PartialEq)]
pub struct CounterSpec {
    pub target: f64,
    pub duration_ms: f64,
    pub decimals: u32,
    pub compact: bool,
    pub prefix: String,
    pub suffix: String,
}

impl CounterSpec {
    /// Reads the `data-*` trigger attributes through `attr`.
    ///
    /// Returns `None` when `data-target` is missing or isn't a finite number.
    /// Every other attribute falls back to its default when malformed.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let target = attr("data-target").as_deref().and_then(parse_number)?;

        let duration_ms = attr("data-duration")
            .as_deref()
            .and_then(parse_number)
            .filter(|d| *d > 0.0)
            .unwrap_or(COUNTER_DEFAULT_DURATION_MS);

        let decimals = attr("data-decimals")
            .as_deref()
            .and_then(parse_number)
            .filter(|d| *d >= 0.0)
            .map(|d| (d.trunc() as u32).min(COUNTER_MAX_DECIMALS))
            .unwrap_or(0);

        Some(
            Self {
                target,
                duration_ms,
                decimals,
                compact: attr("data-compact").as_deref() == Some("1"),
                prefix: attr("data-prefix").unwrap_or_default(),
                suffix: attr("data-suffix").unwrap_or_default(),
            }
            .with_large_target_floor(),
        )
    }

    /// Big numbers race by too quickly, so they never get less than the floor.
    pub fn with_large_target_floor(mut self) -> Self {
        if self.target >= LARGE_TARGET_THRESHOLD {
            self.duration_ms = self.duration_ms.max(LARGE_TARGET_MIN_DURATION_MS);
        }
        self
    }

    pub fn format(&self, value: f64) -> String {
        let number = if self.compact {
            format_compact(value, self.decimals)
        } else {
            format_fixed(value, self.decimals)
        };
        format!("{}{}{}", self.prefix, number, self.suffix)
    }
}

/// Accepts what a browser would turn into a finite number: surrounding
/// whitespace is ignored, `NaN` and infinities are rejected.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub value: f64,
    pub text: String,
    pub done: bool,
}

/// One running animation: its settings plus the clock reading it started at.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    spec: CounterSpec,
    started_at: f64,
}

impl CounterAnimation {
    pub fn new(spec: CounterSpec, started_at: f64) -> Self {
        Self { spec, started_at }
    }

    pub fn frame(&self, now: f64) -> CounterFrame {
        let spec = &self.spec;
        let t = ((now - self.started_at) / spec.duration_ms).clamp(0.0, 1.0);

        if t >= 1.0 {
            return CounterFrame {
                value: spec.target,
                text: spec.format(spec.target),
                done: true,
            };
        }

        let current = spec.target * ease_out_cubic(t);
        let rounded = if spec.decimals == 0 {
            current.trunc()
        } else {
            round_to(current, spec.decimals)
        };
        // Rounding up past the target would make the final frame step backwards.
        let value = if spec.target >= 0.0 {
            rounded.min(spec.target)
        } else {
            rounded.max(spec.target)
        };

        CounterFrame {
            value,
            text: spec.format(value),
            done: false,
        }
    }
}

/// Runs `spec` on the display's frame loop, handing each formatted frame to
/// `on_frame`. The last frame is always the exact target. Dropping the
/// returned loop stops the animation.
pub fn animate(spec: CounterSpec, mut on_frame: impl FnMut(&str) + 'static) -> Option<FrameLoop> {
    let animation = CounterAnimation::new(spec, dom::now_ms());
    FrameLoop::start(move |now| {
        let frame = animation.frame(now);
        on_frame(&frame.text);
        if frame.done {
            debug!("Counter settled at {}", frame.value);
        }
        !frame.done
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn spec(target: f64, decimals: u32) -> CounterSpec {
        CounterSpec {
            target,
            duration_ms: 1000.0,
            decimals,
            compact: false,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn run(animation: &CounterAnimation, step_ms: f64) -> Vec<CounterFrame> {
        let mut frames = Vec::new();
        let mut now = 0.0;
        loop {
            let frame = animation.frame(now);
            let done = frame.done;
            frames.push(frame);
            if done {
                return frames;
            }
            now += step_ms;
        }
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_final_frame_is_exact_target() {
        for (target, decimals) in [(0.0, 0), (42.0, 0), (1.06, 1), (12300.0, 2), (98.7654, 3)] {
            let animation = CounterAnimation::new(spec(target, decimals), 0.0);
            let last = run(&animation, 16.0).pop().unwrap();
            assert!(last.done);
            assert_eq!(last.value, target);
        }
    }

    #[test]
    fn test_values_never_decrease() {
        for (target, decimals) in [(42.0, 0), (1.06, 1), (250_000.0, 0), (3.14159, 2)] {
            let animation = CounterAnimation::new(spec(target, decimals), 0.0);
            let frames = run(&animation, 7.0);
            for pair in frames.windows(2) {
                assert!(
                    pair[1].value >= pair[0].value,
                    "{} then {} for target {}",
                    pair[0].value,
                    pair[1].value,
                    target
                );
            }
        }
    }

    #[test]
    fn test_rounding_never_overshoots_target() {
        let animation = CounterAnimation::new(spec(1.06, 1), 0.0);
        let near_end = animation.frame(999.0);
        assert!(!near_end.done);
        assert!(near_end.value <= 1.06);
    }

    #[test]
    fn test_whole_numbers_truncate() {
        let animation = CounterAnimation::new(spec(10.0, 0), 0.0);
        // eased(0.5) = 0.875 -> 8.75
        assert_eq!(animation.frame(500.0).value, 8.0);
    }

    #[test]
    fn test_clock_before_start_shows_zero() {
        let animation = CounterAnimation::new(spec(10.0, 0), 100.0);
        let frame = animation.frame(90.0);
        assert_eq!(frame.value, 0.0);
        assert_eq!(frame.text, "0");
    }

    #[test]
    fn test_compact_final_text() {
        let spec = CounterSpec::from_attributes(attrs(&[
            ("data-target", "12300"),
            ("data-compact", "1"),
            ("data-decimals", "1"),
        ]))
        .unwrap();
        let last = run(&CounterAnimation::new(spec, 0.0), 50.0).pop().unwrap();
        assert_eq!(last.text, "12.3K");
    }

    #[test]
    fn test_prefix_final_text() {
        let spec = CounterSpec::from_attributes(attrs(&[
            ("data-target", "42"),
            ("data-decimals", "0"),
            ("data-prefix", "$"),
        ]))
        .unwrap();
        let last = run(&CounterAnimation::new(spec, 0.0), 50.0).pop().unwrap();
        assert_eq!(last.text, "$42");
    }

    #[test]
    fn test_suffix_and_fixed_decimals() {
        let spec = spec(4.5, 2);
        let spec = CounterSpec {
            suffix: "x".to_string(),
            ..spec
        };
        assert_eq!(spec.format(4.5), "4.50x");
    }

    #[test]
    fn test_non_numeric_target_aborts() {
        assert!(CounterSpec::from_attributes(attrs(&[("data-target", "lots")])).is_none());
        assert!(CounterSpec::from_attributes(attrs(&[("data-target", "")])).is_none());
        assert!(CounterSpec::from_attributes(attrs(&[("data-target", "Infinity")])).is_none());
        assert!(CounterSpec::from_attributes(attrs(&[])).is_none());
    }

    #[test]
    fn test_malformed_attributes_use_defaults() {
        let spec = CounterSpec::from_attributes(attrs(&[
            ("data-target", " 250 "),
            ("data-duration", "soon"),
            ("data-decimals", "-2"),
            ("data-compact", "yes"),
        ]))
        .unwrap();
        assert_eq!(spec.target, 250.0);
        assert_eq!(spec.duration_ms, COUNTER_DEFAULT_DURATION_MS);
        assert_eq!(spec.decimals, 0);
        assert!(!spec.compact);
        assert_eq!(spec.prefix, "");
    }

    #[test]
    fn test_decimals_are_capped() {
        let spec = CounterSpec::from_attributes(attrs(&[
            ("data-target", "1"),
            ("data-decimals", "99"),
        ]))
        .unwrap();
        assert_eq!(spec.decimals, COUNTER_MAX_DECIMALS);
    }

    #[test]
    fn test_large_targets_get_duration_floor() {
        let spec = CounterSpec::from_attributes(attrs(&[
            ("data-target", "150000"),
            ("data-duration", "800"),
        ]))
        .unwrap();
        assert_eq!(spec.duration_ms, LARGE_TARGET_MIN_DURATION_MS);

        let small = CounterSpec::from_attributes(attrs(&[
            ("data-target", "150"),
            ("data-duration", "800"),
        ]))
        .unwrap();
        assert_eq!(small.duration_ms, 800.0);
    }
}
