// SPDX-License-Identifier: MPL-2.0
//! Opacity transition played before an expired toast is detached.

use std::time::{Duration, Instant};

/// A linear fade from fully opaque to transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    started_at: Instant,
    duration: Duration,
}

impl Fade {
    /// Starts a fade at `started_at` lasting `duration`.
    #[must_use]
    pub fn new(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Progress of the fade in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Opacity at `now`: 1.0 when the fade starts, 0.0 once it is over.
    #[must_use]
    pub fn opacity_at(&self, now: Instant) -> f32 {
        1.0 - self.progress(now)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn opacity_starts_opaque() {
        let start = Instant::now();
        let fade = Fade::new(start, Duration::from_secs(1));
        assert_abs_diff_eq!(fade.opacity_at(start), 1.0);
        assert!(!fade.is_finished(start));
    }

    #[test]
    fn opacity_is_linear() {
        let start = Instant::now();
        let fade = Fade::new(start, Duration::from_secs(2));
        let halfway = start + Duration::from_secs(1);
        assert_abs_diff_eq!(fade.opacity_at(halfway), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn opacity_clamps_after_the_end() {
        let start = Instant::now();
        let fade = Fade::new(start, Duration::from_millis(500));
        let later = start + Duration::from_secs(3);
        assert_abs_diff_eq!(fade.opacity_at(later), 0.0);
        assert!(fade.is_finished(later));
    }

    #[test]
    fn instants_before_the_start_are_opaque() {
        let before = Instant::now();
        let fade = Fade::new(before + Duration::from_secs(1), Duration::from_secs(1));
        assert_abs_diff_eq!(fade.opacity_at(before), 1.0);
    }
}
