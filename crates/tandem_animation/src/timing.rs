//! Animated scroll timing
//!
//! Programmatic animated scrolls (page up/down, non-immediate reveals) run at
//! a constant standard speed, capped so long jumps never drag on.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tandem_core::ScrollOffset;

/// Speed and duration cap for animated scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollAnimationTiming {
    /// Standard animated scroll speed in pixels per second.
    #[serde(default = "default_speed")]
    pub speed_px_per_sec: i32,
    /// Longest animated scroll in milliseconds.
    #[serde(default = "default_max_duration")]
    pub max_duration_ms: i32,
}

fn default_speed() -> i32 {
    480
}

fn default_max_duration() -> i32 {
    750
}

impl Default for ScrollAnimationTiming {
    fn default() -> Self {
        Self {
            speed_px_per_sec: default_speed(),
            max_duration_ms: default_max_duration(),
        }
    }
}

impl ScrollAnimationTiming {
    /// Duration for a scroll covering `delta`.
    ///
    /// The longer axis decides. A non-positive speed yields zero (snap).
    pub fn duration_for(&self, delta: ScrollOffset) -> Duration {
        if self.speed_px_per_sec <= 0 {
            return Duration::ZERO;
        }

        let distance = i64::from(delta.x)
            .abs()
            .max(i64::from(delta.y).abs());
        let millis = distance * 1000 / i64::from(self.speed_px_per_sec);
        let capped = millis.min(i64::from(self.max_duration_ms.max(0)));

        Duration::from_millis(capped as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_proportional_to_longest_axis() {
        let timing = ScrollAnimationTiming::default();

        // 240px at 480px/s
        assert_eq!(
            timing.duration_for(ScrollOffset::new(10, -240)),
            Duration::from_millis(500)
        );
        assert_eq!(timing.duration_for(ScrollOffset::ZERO), Duration::ZERO);
    }

    #[test]
    fn test_duration_is_capped() {
        let timing = ScrollAnimationTiming::default();

        assert_eq!(
            timing.duration_for(ScrollOffset::new(0, 100_000)),
            Duration::from_millis(750)
        );
        assert_eq!(
            timing.duration_for(ScrollOffset::new(i32::MIN, 0)),
            Duration::from_millis(750)
        );
    }

    #[test]
    fn test_zero_speed_snaps() {
        let timing = ScrollAnimationTiming {
            speed_px_per_sec: 0,
            ..Default::default()
        };

        assert_eq!(timing.duration_for(ScrollOffset::new(0, 300)), Duration::ZERO);
    }

    #[test]
    fn test_timing_defaults_fill_missing_fields() {
        let timing: ScrollAnimationTiming = toml::from_str("speed_px_per_sec = 960").unwrap();

        assert_eq!(timing.speed_px_per_sec, 960);
        assert_eq!(timing.max_duration_ms, 750);
    }
}
