//! Headless scroller
//!
//! Records how it was seeded and holds its position until told otherwise.
//! There is no curve: the caller (a test or a scenario step) moves the
//! position and finishes the animation explicitly.

use std::time::Duration;

use tandem_core::ScrollOffset;

use crate::scroller::Scroller;

/// Arguments of one [`Scroller::fling`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlingSeed {
    pub start: ScrollOffset,
    pub velocity_x: i32,
    pub velocity_y: i32,
    pub min: ScrollOffset,
    pub max: ScrollOffset,
}

/// Arguments of one [`Scroller::start_scroll`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSeed {
    pub start: ScrollOffset,
    pub delta: ScrollOffset,
    pub duration: Duration,
}

/// Headless [`Scroller`] implementation.
#[derive(Debug, Clone)]
pub struct RecordingScroller {
    flings: Vec<FlingSeed>,
    scrolls: Vec<ScrollSeed>,
    position: ScrollOffset,
    velocity: f32,
    finished: bool,
}

impl Default for RecordingScroller {
    fn default() -> Self {
        Self {
            flings: Vec::new(),
            scrolls: Vec::new(),
            position: ScrollOffset::ZERO,
            velocity: 0.0,
            finished: true,
        }
    }
}

impl RecordingScroller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flings(&self) -> &[FlingSeed] {
        &self.flings
    }

    pub fn last_fling(&self) -> Option<&FlingSeed> {
        self.flings.last()
    }

    pub fn scrolls(&self) -> &[ScrollSeed] {
        &self.scrolls
    }

    pub fn last_scroll(&self) -> Option<&ScrollSeed> {
        self.scrolls.last()
    }

    /// Move the current position, as a curve would between frames.
    pub fn set_position(&mut self, position: ScrollOffset) {
        self.position = position;
    }
}

impl Scroller for RecordingScroller {
    fn fling(
        &mut self,
        start: ScrollOffset,
        velocity_x: i32,
        velocity_y: i32,
        min: ScrollOffset,
        max: ScrollOffset,
    ) {
        tracing::trace!(
            "fling from ({}, {}) velocity=({}, {}) window=({}, {})..({}, {})",
            start.x,
            start.y,
            velocity_x,
            velocity_y,
            min.x,
            min.y,
            max.x,
            max.y
        );
        self.flings.push(FlingSeed {
            start,
            velocity_x,
            velocity_y,
            min,
            max,
        });
        self.position = start;
        self.velocity = (velocity_x as f32).hypot(velocity_y as f32);
        self.finished = false;
    }

    fn start_scroll(&mut self, start: ScrollOffset, delta: ScrollOffset, duration: Duration) {
        self.scrolls.push(ScrollSeed {
            start,
            delta,
            duration,
        });
        self.position = start;

        let distance = (delta.x as f32).hypot(delta.y as f32);
        let seconds = duration.as_secs_f32();
        self.velocity = if seconds > 0.0 { distance / seconds } else { 0.0 };
        self.finished = delta.is_zero();
    }

    fn compute_scroll_offset(&mut self) -> bool {
        !self.finished
    }

    fn current_position(&self) -> ScrollOffset {
        self.position
    }

    fn current_velocity(&self) -> f32 {
        if self.finished {
            0.0
        } else {
            self.velocity
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn force_finished(&mut self) {
        self.finished = true;
        self.velocity = 0.0;
    }
}
