//! Tandem Scroll
//!
//! Reconciles scroll position between a host embedding surface and the
//! rendering engine painting inside it. Both sides think they own "the"
//! scroll offset; [`ScrollOffsetManager`] decides which one is authoritative
//! at any moment and keeps the other in step.
//!
//! - **Bounds**: scroll range and maximum offset from content/viewport sizes
//! - **Overscroll handshake**: requests become host deltas, host reports are
//!   re-clamped before the rendering engine sees them
//! - **Deferred scroll**: requests made before layout are held in one slot
//! - **Touch batching**: rendering commits wait for the end of a touch
//! - **Reveal**: minimal motion that brings a rectangle into view
//!
//! # Example
//!
//! ```rust
//! use tandem_animation::RecordingScroller;
//! use tandem_platform::{RecordingHost, SettleMode};
//! use tandem_scroll::ScrollOffsetManager;
//!
//! let host = RecordingHost::new().with_settle_mode(SettleMode::Immediate);
//! let mut manager = ScrollOffsetManager::new(host, RecordingScroller::new());
//!
//! manager.set_viewport_size(211, 312);
//! manager.set_content_size(968, 439);
//! manager.scroll_container_view_to(2000, -5);
//!
//! assert_eq!(manager.committed_offset().x, 757);
//! assert_eq!(manager.committed_offset().y, 0);
//! ```

pub mod bounds;
pub mod config;
pub mod error;
pub mod manager;
pub mod reveal;

pub use bounds::ScrollBounds;
pub use config::ScrollSyncConfig;
pub use error::{ConfigError, Result};
pub use manager::ScrollOffsetManager;
pub use reveal::reveal_delta;
