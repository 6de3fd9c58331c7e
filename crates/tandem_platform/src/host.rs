//! Host surface abstraction for embedded rendering engines.

use serde::{Deserialize, Serialize};
use tandem_core::{Axis, ScrollOffset};

/// Overscroll motion the manager asks the host to perform.
///
/// The host applies its own overscroll effects (edge glow, rubber-banding)
/// and decides where it actually settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverscrollRequest {
    /// Requested motion relative to `scroll`.
    pub delta: ScrollOffset,
    /// Host scroll position the delta is relative to.
    pub scroll: ScrollOffset,
    /// Scrollable extent per axis, for overscroll-effect parameters.
    pub scroll_range: ScrollOffset,
    /// Whether the motion originates from an in-progress touch gesture.
    pub is_touch_event: bool,
}

impl OverscrollRequest {
    /// Position the host would reach without any clamping.
    pub fn target(&self) -> ScrollOffset {
        self.scroll + self.delta
    }
}

/// Position the host settled at after an [`OverscrollRequest`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverscrollReport {
    pub x: i32,
    pub y: i32,
    /// Host clamped the horizontal motion.
    pub clamped_x: bool,
    /// Host clamped the vertical motion.
    pub clamped_y: bool,
}

impl OverscrollReport {
    /// Report an unclamped settle position.
    pub const fn at(offset: ScrollOffset) -> Self {
        Self {
            x: offset.x,
            y: offset.y,
            clamped_x: false,
            clamped_y: false,
        }
    }

    pub const fn offset(&self) -> ScrollOffset {
        ScrollOffset::new(self.x, self.y)
    }

    pub const fn clamped(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.clamped_x,
            Axis::Vertical => self.clamped_y,
        }
    }
}

/// Capability interface implemented by the embedding surface.
///
/// All calls happen on the UI thread. None of them fail: the host either
/// applies what it is told or reports its own position back.
pub trait HostSurface {
    /// Ask the host to move by `request.delta`, applying overscroll effects.
    ///
    /// A host that settles synchronously returns where it ended up and the
    /// manager confirms that position before its own call returns. A host
    /// that settles later returns `None` and reports through
    /// `ScrollOffsetManager::on_container_view_overscrolled` itself.
    fn request_overscroll(&mut self, request: OverscrollRequest) -> Option<OverscrollReport>;

    /// Set the host-visible scroll position exactly.
    fn commit_host_scroll_position(&mut self, offset: ScrollOffset);

    /// Set the rendering engine's internal scroll offset exactly.
    fn commit_rendering_offset(&mut self, offset: ScrollOffset);

    /// Current host horizontal scroll position.
    fn current_host_scroll_x(&self) -> i32;

    /// Current host vertical scroll position.
    fn current_host_scroll_y(&self) -> i32;

    /// Current host scroll position on both axes.
    fn host_scroll_offset(&self) -> ScrollOffset {
        ScrollOffset::new(self.current_host_scroll_x(), self.current_host_scroll_y())
    }

    /// Schedule a repaint/animation tick.
    fn request_redraw(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHost {
        scroll: ScrollOffset,
    }

    impl HostSurface for FixedHost {
        fn request_overscroll(&mut self, _request: OverscrollRequest) -> Option<OverscrollReport> {
            None
        }

        fn commit_host_scroll_position(&mut self, offset: ScrollOffset) {
            self.scroll = offset;
        }

        fn commit_rendering_offset(&mut self, _offset: ScrollOffset) {}

        fn current_host_scroll_x(&self) -> i32 {
            self.scroll.x
        }

        fn current_host_scroll_y(&self) -> i32 {
            self.scroll.y
        }

        fn request_redraw(&mut self) {}
    }

    #[test]
    fn test_request_target() {
        let request = OverscrollRequest {
            delta: ScrollOffset::new(-757, 10),
            scroll: ScrollOffset::new(757, 127),
            scroll_range: ScrollOffset::new(968, 439),
            is_touch_event: false,
        };

        assert_eq!(request.target(), ScrollOffset::new(0, 137));
    }

    #[test]
    fn test_report_accessors() {
        let report = OverscrollReport {
            x: 4,
            y: 5,
            clamped_x: true,
            clamped_y: false,
        };

        assert_eq!(report.offset(), ScrollOffset::new(4, 5));
        assert!(report.clamped(Axis::Horizontal));
        assert!(!report.clamped(Axis::Vertical));
        assert_eq!(
            OverscrollReport::at(ScrollOffset::new(1, 2)),
            OverscrollReport {
                x: 1,
                y: 2,
                clamped_x: false,
                clamped_y: false,
            }
        );
    }

    #[test]
    fn test_host_scroll_offset_combines_axes() {
        let mut host = FixedHost {
            scroll: ScrollOffset::ZERO,
        };
        host.commit_host_scroll_position(ScrollOffset::new(31, 41));

        assert_eq!(host.host_scroll_offset(), ScrollOffset::new(31, 41));
    }
}
