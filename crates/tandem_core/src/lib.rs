//! Tandem Core
//!
//! Foundational primitives shared by every Tandem crate:
//!
//! - **Geometry**: integer sizes, scroll offsets and rectangles expressed in
//!   the coordinate space both the host surface and the rendering engine use
//! - **Axes**: per-axis accessors so scroll rules can be written once
//!
//! # Example
//!
//! ```rust
//! use tandem_core::{Axis, Rect, ScrollOffset, Size};
//!
//! let viewport = Size::new(211, 312);
//! let rect = Rect::from_size(2, 3).offset(966, 436);
//!
//! assert_eq!(rect.span(Axis::Vertical), (436, 439));
//! assert_eq!(viewport.get(Axis::Horizontal), 211);
//! assert_eq!(ScrollOffset::new(3, 4) - ScrollOffset::new(1, 1), ScrollOffset::new(2, 3));
//! ```

pub mod geometry;

pub use geometry::{Axis, Rect, ScrollOffset, Size};
