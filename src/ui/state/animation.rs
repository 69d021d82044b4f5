// SPDX-License-Identifier: MPL-2.0
//! Fixed-duration vertical slide animation.
//!
//! Iced has no retained animation primitive, so slides are sampled from a
//! start instant on every tick of a `time::every` subscription. A new slide
//! simply replaces an in-flight one; the last request wins.

use crate::ui::design_tokens::animation;
use std::time::{Duration, Instant};

/// An in-flight interpolation of a vertical coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Slide {
    /// Starts a slide of the standard caption duration.
    #[must_use]
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration: animation::CAPTION_SLIDE,
        }
    }

    /// Normalized progress in `[0, 1]` at the given instant.
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// The interpolated coordinate at the given instant.
    #[must_use]
    pub fn sample(&self, now: Instant) -> f32 {
        let t = smoothstep(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    /// Whether the slide has reached its target.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// The coordinate this slide is heading toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn starts_at_from() {
        let start = Instant::now();
        let slide = Slide::new(50.0, 200.0, start);
        assert_abs_diff_eq!(slide.sample(start), 50.0, epsilon = F32_EPSILON);
        assert!(!slide.is_finished(start));
    }

    #[test]
    fn lands_exactly_on_target() {
        let start = Instant::now();
        let slide = Slide::new(50.0, 200.0, start);
        let end = start + animation::CAPTION_SLIDE;
        assert_abs_diff_eq!(slide.sample(end), 200.0, epsilon = F32_EPSILON);
        assert!(slide.is_finished(end));
    }

    #[test]
    fn stays_on_target_after_the_duration() {
        let start = Instant::now();
        let slide = Slide::new(10.0, -30.0, start);
        let late = start + animation::CAPTION_SLIDE * 3;
        assert_abs_diff_eq!(slide.sample(late), -30.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn midpoint_is_halfway_for_smoothstep() {
        let start = Instant::now();
        let slide = Slide::new(0.0, 100.0, start);
        let mid = start + animation::CAPTION_SLIDE / 2;
        // smoothstep(0.5) == 0.5
        assert_abs_diff_eq!(slide.sample(mid), 50.0, epsilon = 1.0);
    }

    #[test]
    fn progress_is_monotonic() {
        let start = Instant::now();
        let slide = Slide::new(0.0, 100.0, start);
        let mut previous = slide.sample(start);
        for ms in (0..=300).step_by(30) {
            let value = slide.sample(start + Duration::from_millis(ms));
            assert!(value >= previous - F32_EPSILON);
            previous = value;
        }
    }

    #[test]
    fn instants_before_the_start_clamp_to_from() {
        let start = Instant::now() + Duration::from_secs(1);
        let slide = Slide::new(40.0, 80.0, start);
        assert_abs_diff_eq!(slide.sample(Instant::now()), 40.0, epsilon = F32_EPSILON);
    }
}
