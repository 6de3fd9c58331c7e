//! Integer scroll geometry
//!
//! Host surfaces and rendering engines agree on whole-pixel offsets, so every
//! type here is `i32` based. Arithmetic saturates instead of overflowing;
//! out-of-range values are clamped by the scroll manager later on.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

// ============================================================================
// Axis
// ============================================================================

/// Scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left/right (x)
    Horizontal,
    /// Up/down (y)
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

// ============================================================================
// Size
// ============================================================================

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A size with both dimensions zero (nothing laid out yet).
    pub const ZERO: Size = Size::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Dimension along `axis`.
    pub const fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// True once both dimensions are known.
    ///
    /// A zero (or negative) dimension means layout has not produced a usable
    /// size, so nothing can be clamped against it yet.
    pub const fn is_laid_out(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

// ============================================================================
// Scroll Offset
// ============================================================================

/// A scroll position (or a delta between two positions).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: i32,
    pub y: i32,
}

impl ScrollOffset {
    pub const ZERO: ScrollOffset = ScrollOffset::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component along `axis`.
    pub const fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Copy with the `axis` component replaced.
    pub const fn with(self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::Horizontal => Self { x: value, y: self.y },
            Axis::Vertical => Self { x: self.x, y: value },
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Clamp each component into `[0, max.axis]`.
    ///
    /// `max` components below zero are treated as zero.
    pub fn clamp_to(self, max: ScrollOffset) -> Self {
        Self {
            x: self.x.clamp(0, max.x.max(0)),
            y: self.y.clamp(0, max.y.max(0)),
        }
    }
}

impl Add for ScrollOffset {
    type Output = ScrollOffset;

    fn add(self, rhs: ScrollOffset) -> ScrollOffset {
        ScrollOffset {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl Sub for ScrollOffset {
    type Output = ScrollOffset;

    fn sub(self, rhs: ScrollOffset) -> ScrollOffset {
        ScrollOffset {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

// ============================================================================
// Rect
// ============================================================================

/// Edge-based rectangle: `left`/`top` inclusive, `right`/`bottom` exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle of the given size anchored at the origin.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Extent along `axis`.
    pub const fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width(),
            Axis::Vertical => self.height(),
        }
    }

    /// `(leading, trailing)` edges along `axis`.
    pub const fn span(&self, axis: Axis) -> (i32, i32) {
        match axis {
            Axis::Horizontal => (self.left, self.right),
            Axis::Vertical => (self.top, self.bottom),
        }
    }

    /// Translate by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left.saturating_add(dx),
            top: self.top.saturating_add(dy),
            right: self.right.saturating_add(dx),
            bottom: self.bottom.saturating_add(dy),
        }
    }
}
