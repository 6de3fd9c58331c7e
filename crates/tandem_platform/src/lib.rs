//! Tandem Platform
//!
//! The capability interface a host embedding surface implements so the scroll
//! manager can drive it, plus a headless binding that records every call.
//!
//! Concrete host bindings (a native view, a windowing toolkit widget) live
//! outside this workspace and only need to implement [`HostSurface`].

pub mod host;
pub mod recording;

pub use host::{HostSurface, OverscrollReport, OverscrollRequest};
pub use recording::{RecordingHost, SettleMode};
