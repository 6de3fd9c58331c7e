//! Scroll bounds
//!
//! Pure functions of the current content and viewport sizes.

use tandem_core::{Axis, ScrollOffset, Size};

/// Content and viewport sizes, and the scroll limits derived from them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollBounds {
    /// Size of the full renderable surface
    pub content: Size,
    /// Size of the visible window into the content
    pub viewport: Size,
}

impl ScrollBounds {
    pub const fn new(content: Size, viewport: Size) -> Self {
        Self { content, viewport }
    }

    /// Scrollable extent along `axis`.
    ///
    /// Co-extensive with the content size; only used to parameterise host
    /// overscroll effects, never for clamping.
    pub const fn scroll_range(&self, axis: Axis) -> i32 {
        self.content.get(axis)
    }

    /// Scroll range on both axes.
    pub const fn scroll_ranges(&self) -> ScrollOffset {
        ScrollOffset::new(
            self.scroll_range(Axis::Horizontal),
            self.scroll_range(Axis::Vertical),
        )
    }

    /// Largest valid committed offset along `axis` (never negative).
    pub fn max_offset(&self, axis: Axis) -> i32 {
        self.content
            .get(axis)
            .saturating_sub(self.viewport.get(axis))
            .max(0)
    }

    /// Largest valid committed offset on both axes.
    pub fn max_offsets(&self) -> ScrollOffset {
        ScrollOffset::new(
            self.max_offset(Axis::Horizontal),
            self.max_offset(Axis::Vertical),
        )
    }

    /// Clamp `offset` into `[0, max_offset]` per axis.
    pub fn clamp(&self, offset: ScrollOffset) -> ScrollOffset {
        offset.clamp_to(self.max_offsets())
    }

    /// Whether content geometry is known well enough to clamp against.
    pub const fn content_is_laid_out(&self) -> bool {
        self.content.is_laid_out()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Size = Size::new(211, 312);
    const CONTENT: Size = Size::new(968, 439);

    #[test]
    fn test_range_and_max_offset() {
        let bounds = ScrollBounds::new(CONTENT, VIEW);

        assert_eq!(bounds.scroll_range(Axis::Horizontal), 968);
        assert_eq!(bounds.scroll_range(Axis::Vertical), 439);
        assert_eq!(bounds.max_offsets(), ScrollOffset::new(757, 127));
    }

    #[test]
    fn test_content_matching_viewport_cannot_scroll() {
        let size = Size::new(132, 212);
        let bounds = ScrollBounds::new(size, size);

        assert_eq!(bounds.scroll_ranges(), ScrollOffset::new(132, 212));
        assert_eq!(bounds.max_offsets(), ScrollOffset::ZERO);
        assert_eq!(bounds.clamp(ScrollOffset::new(11, 13)), ScrollOffset::ZERO);
    }

    #[test]
    fn test_content_smaller_than_viewport() {
        let bounds = ScrollBounds::new(Size::new(100, 100), VIEW);

        assert_eq!(bounds.max_offsets(), ScrollOffset::ZERO);
    }

    #[test]
    fn test_unknown_content_pins_to_origin() {
        let bounds = ScrollBounds::new(Size::ZERO, VIEW);

        assert!(!bounds.content_is_laid_out());
        assert_eq!(
            bounds.clamp(ScrollOffset::new(767, 138)),
            ScrollOffset::ZERO
        );
    }

    #[test]
    fn test_clamp_both_directions() {
        let bounds = ScrollBounds::new(CONTENT, VIEW);

        assert_eq!(
            bounds.clamp(ScrollOffset::new(767, 138)),
            ScrollOffset::new(757, 127)
        );
        assert_eq!(
            bounds.clamp(ScrollOffset::new(-767, -138)),
            ScrollOffset::ZERO
        );
        assert_eq!(
            bounds.clamp(ScrollOffset::new(i32::MAX, i32::MIN)),
            ScrollOffset::new(757, 0)
        );
    }

    #[test]
    fn test_extreme_sizes_do_not_overflow() {
        let bounds = ScrollBounds::new(Size::new(i32::MAX, 10), Size::new(-10, i32::MAX));

        assert_eq!(bounds.max_offset(Axis::Horizontal), i32::MAX);
        assert_eq!(bounds.max_offset(Axis::Vertical), 0);
    }
}
