//! Fling delegate interface

use std::time::Duration;

use tandem_core::ScrollOffset;

/// Produces a scroll-position curve over time.
///
/// Implementations own the physics. The scroll manager seeds them with
/// [`Scroller::fling`] or [`Scroller::start_scroll`], and the host's frame
/// driver advances them with [`Scroller::compute_scroll_offset`].
pub trait Scroller {
    /// Begin a fling from `start` with the given velocity (pixels per second).
    ///
    /// The curve must stay within `[min, max]` on each axis.
    fn fling(
        &mut self,
        start: ScrollOffset,
        velocity_x: i32,
        velocity_y: i32,
        min: ScrollOffset,
        max: ScrollOffset,
    );

    /// Begin a timed scroll from `start` covering `delta`.
    fn start_scroll(&mut self, start: ScrollOffset, delta: ScrollOffset, duration: Duration);

    /// Advance the curve to the current frame.
    ///
    /// Returns `true` while the animation is still producing positions.
    fn compute_scroll_offset(&mut self) -> bool;

    /// Position on the curve as of the last [`Scroller::compute_scroll_offset`].
    fn current_position(&self) -> ScrollOffset;

    /// Current speed in pixels per second.
    fn current_velocity(&self) -> f32;

    /// True once the curve has reached its end (or was stopped).
    fn is_finished(&self) -> bool;

    /// Stop the curve where it is.
    fn force_finished(&mut self);
}
