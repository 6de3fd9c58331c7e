//! Tandem Headless
//!
//! Replays JSON scenarios against a [`tandem_scroll::ScrollOffsetManager`]
//! wired to the recording host and scroller, checking observable state along
//! the way. Used for regression scenarios and by the `tandem` CLI.
//!
//! # Example
//!
//! ```rust
//! let outcome = tandem_headless::run_scenario(
//!     r#"{
//!         "steps": [
//!             { "type": "set_viewport_size", "width": 211, "height": 312 },
//!             { "type": "set_content_size", "width": 968, "height": 439 },
//!             { "type": "scroll_to", "x": 31, "y": 41 },
//!             { "type": "settle_overscroll" },
//!             { "type": "assert_rendering_offset", "x": 31, "y": 41 }
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! assert!(!outcome.is_failed());
//! ```

pub mod assert;
pub mod report;
pub mod runner;
pub mod scenario;

pub use assert::{AssertionResult, ScenarioSnapshot};
pub use report::{HeadlessReport, ReportStatus};
pub use runner::{run_loaded_scenario, run_scenario, HeadlessRunConfig, RunOutcome};
pub use scenario::{HeadlessScenario, ScenarioStep};
