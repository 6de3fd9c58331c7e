//! Tandem Animation
//!
//! The manager never integrates a motion curve itself. It seeds a
//! [`Scroller`] (the fling delegate) and reads positions back once per frame.
//!
//! # Features
//!
//! - **Scroller seam**: fling and timed-scroll seeding behind one trait
//! - **Timing**: distance-proportional durations for animated scrolls
//! - **Headless scroller**: records seeds, position driven by the caller

pub mod recording;
pub mod scroller;
pub mod timing;

pub use recording::{FlingSeed, RecordingScroller, ScrollSeed};
pub use scroller::Scroller;
pub use timing::ScrollAnimationTiming;
