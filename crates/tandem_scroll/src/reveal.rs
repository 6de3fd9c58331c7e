//! Minimal scroll that brings a rectangle into view
//!
//! Each axis is solved independently:
//!
//! - already inside the visible window: no motion
//! - past the trailing edge: align trailing edges, except that a rectangle
//!   shorter than the viewport is placed a margin below the top so there is
//!   room under it (an input method usually appears there)
//! - past the leading edge: align leading edges
//!
//! The margin is vertical only.

use tandem_core::{Axis, Rect, ScrollOffset, Size};

/// Scroll delta that reveals `rect` (in content coordinates).
///
/// `scroll` is the current host offset and `viewport` the visible size. The
/// vertical margin reserve is `viewport.height / margin_divisor`.
pub fn reveal_delta(
    rect: Rect,
    scroll: ScrollOffset,
    viewport: Size,
    margin_divisor: i32,
) -> ScrollOffset {
    ScrollOffset::new(
        axis_delta(rect, scroll, viewport, Axis::Horizontal, margin_divisor),
        axis_delta(rect, scroll, viewport, Axis::Vertical, margin_divisor),
    )
}

fn axis_delta(
    rect: Rect,
    scroll: ScrollOffset,
    viewport: Size,
    axis: Axis,
    margin_divisor: i32,
) -> i32 {
    let (leading, trailing) = rect.span(axis);
    let extent = viewport.get(axis);
    let screen_leading = scroll.get(axis);
    let screen_trailing = screen_leading.saturating_add(extent);

    if leading >= screen_leading && trailing <= screen_trailing {
        return 0;
    }

    if trailing > screen_trailing {
        let align_trailing = trailing.saturating_sub(screen_trailing);
        if axis == Axis::Vertical && rect.extent(axis) < extent {
            let margin = extent / margin_divisor.max(1);
            let below_margin = leading
                .saturating_sub(margin)
                .saturating_sub(screen_leading);
            // Never move less than needed to show the trailing edge.
            return below_margin.max(align_trailing);
        }
        return align_trailing;
    }

    leading.saturating_sub(screen_leading)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Size = Size::new(211, 312);

    #[test]
    fn test_visible_rect_needs_no_motion() {
        let top_left = Rect::from_size(52, 78);
        assert_eq!(
            reveal_delta(top_left, ScrollOffset::ZERO, VIEW, 3),
            ScrollOffset::ZERO
        );

        // Flush against the bottom-right corner is still fully visible.
        let bottom_right = Rect::from_size(52, 78).offset(158, 234);
        assert_eq!(
            reveal_delta(bottom_right, ScrollOffset::ZERO, VIEW, 3),
            ScrollOffset::ZERO
        );
    }

    #[test]
    fn test_small_rect_below_gets_margin_vertically_only() {
        let rect = Rect::from_size(2, 3).offset(966, 436);

        let delta = reveal_delta(rect, ScrollOffset::ZERO, VIEW, 3);

        assert_eq!(delta.x, 968 - 211);
        assert_eq!(delta.y, 436 - 312 / 3);
    }

    #[test]
    fn test_viewport_sized_rect_aligns_trailing_edges() {
        let rect = Rect::from_size(211, 312).offset(757, 127);

        let delta = reveal_delta(rect, ScrollOffset::ZERO, VIEW, 3);

        assert_eq!(delta, ScrollOffset::new(757, 127));
    }

    #[test]
    fn test_rect_above_aligns_leading_edges() {
        let rect = Rect::from_size(2, 3);

        let delta = reveal_delta(rect, ScrollOffset::new(757, 127), VIEW, 3);

        assert_eq!(delta, ScrollOffset::new(-757, -127));
    }

    #[test]
    fn test_margin_relative_to_current_scroll() {
        // Scrolled down 100px; rect sits just below the visible window.
        let rect = Rect::new(10, 420, 20, 430);

        let delta = reveal_delta(rect, ScrollOffset::new(0, 100), VIEW, 3);

        assert_eq!(delta, ScrollOffset::new(0, 420 - 104 - 100));
    }

    #[test]
    fn test_margin_never_reverses_direction() {
        // Tall-but-not-full-height rect poking past the bottom: the margin
        // rule alone would scroll up by 84px.
        let rect = Rect::new(0, 20, 10, 320);

        let delta = reveal_delta(rect, ScrollOffset::ZERO, VIEW, 3);

        assert_eq!(delta.y, 320 - 312);
    }

    #[test]
    fn test_custom_margin_divisor() {
        let rect = Rect::from_size(2, 3).offset(0, 436);

        let delta = reveal_delta(rect, ScrollOffset::ZERO, VIEW, 4);

        assert_eq!(delta.y, 436 - 312 / 4);
    }

    #[test]
    fn test_wide_rect_past_right_edge_aligns_right() {
        let rect = Rect::new(100, 0, 400, 10);

        let delta = reveal_delta(rect, ScrollOffset::ZERO, VIEW, 3);

        assert_eq!(delta, ScrollOffset::new(400 - 211, 0));
    }
}
