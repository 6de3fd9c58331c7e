//! Scroll offset manager
//!
//! Mediates every scroll-position change between the host surface and the
//! rendering engine.
//!
//! Scrolls are a two-phase handshake. A request is phrased as a delta handed
//! to the host ([`HostSurface::request_overscroll`]); the host applies its own
//! overscroll effects and reports where it settled
//! ([`ScrollOffsetManager::on_container_view_overscrolled`]). The report is
//! clamped again before the rendering engine sees it, because the host's
//! clamp need not match ours.
//!
//! Two states delay the rendering-engine commit:
//!
//! - **Content not laid out**: a requested target is parked in a single
//!   pending slot and released by the next usable content size.
//! - **Touch in progress**: the host position follows the finger, the
//!   rendering engine catches up when the touch ends.

use tandem_animation::Scroller;
use tandem_core::{Axis, Rect, ScrollOffset, Size};
use tandem_platform::{HostSurface, OverscrollRequest};

use crate::bounds::ScrollBounds;
use crate::config::ScrollSyncConfig;
use crate::reveal::reveal_delta;

/// Keeps the host and rendering-engine scroll offsets in sync.
///
/// Generic over the host binding `H` and the fling delegate `S`. All calls
/// are expected on the UI thread.
pub struct ScrollOffsetManager<H, S> {
    host: H,
    scroller: S,
    config: ScrollSyncConfig,
    bounds: ScrollBounds,
    /// Offset last committed into the rendering engine
    committed: ScrollOffset,
    /// Target requested before content was laid out
    pending: Option<ScrollOffset>,
    processing_touch: bool,
    /// Last confirmed host position while a touch is in progress
    touch_confirmed: Option<ScrollOffset>,
}

impl<H: HostSurface, S: Scroller> ScrollOffsetManager<H, S> {
    /// Create a manager with default configuration.
    pub fn new(host: H, scroller: S) -> Self {
        Self::with_config(host, scroller, ScrollSyncConfig::default())
    }

    /// Create a manager with the given configuration.
    pub fn with_config(host: H, scroller: S, config: ScrollSyncConfig) -> Self {
        Self {
            host,
            scroller,
            config,
            bounds: ScrollBounds::default(),
            committed: ScrollOffset::ZERO,
            pending: None,
            processing_touch: false,
            touch_confirmed: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut S {
        &mut self.scroller
    }

    pub fn config(&self) -> &ScrollSyncConfig {
        &self.config
    }

    pub fn bounds(&self) -> ScrollBounds {
        self.bounds
    }

    /// Offset currently applied inside the rendering engine.
    pub fn committed_offset(&self) -> ScrollOffset {
        self.committed
    }

    /// Scroll target waiting for content to be laid out.
    pub fn pending_offset(&self) -> Option<ScrollOffset> {
        self.pending
    }

    pub fn is_processing_touch_event(&self) -> bool {
        self.processing_touch
    }

    // =========================================================================
    // Sizes and bounds
    // =========================================================================

    /// Update the content size; releases a pending scroll once it is usable.
    pub fn set_content_size(&mut self, width: i32, height: i32) {
        self.bounds.content = Size::new(width, height);
        tracing::trace!(
            "content size {}x{}, max offset ({}, {})",
            width,
            height,
            self.compute_max_scroll_offset_x(),
            self.compute_max_scroll_offset_y()
        );

        if !self.bounds.content_is_laid_out() {
            return;
        }
        if let Some(target) = self.pending.take() {
            tracing::debug!("releasing deferred scroll to ({}, {})", target.x, target.y);
            self.request_host_scroll(target);
        }
    }

    /// Update the viewport size. Never releases a pending scroll.
    pub fn set_viewport_size(&mut self, width: i32, height: i32) {
        self.bounds.viewport = Size::new(width, height);
    }

    pub fn compute_scroll_range_x(&self) -> i32 {
        self.bounds.scroll_range(Axis::Horizontal)
    }

    pub fn compute_scroll_range_y(&self) -> i32 {
        self.bounds.scroll_range(Axis::Vertical)
    }

    pub fn compute_max_scroll_offset_x(&self) -> i32 {
        self.bounds.max_offset(Axis::Horizontal)
    }

    pub fn compute_max_scroll_offset_y(&self) -> i32 {
        self.bounds.max_offset(Axis::Vertical)
    }

    // =========================================================================
    // Overscroll handshake
    // =========================================================================

    /// Scroll the host to `(x, y)`.
    ///
    /// Before content is laid out the target is parked instead, overwriting
    /// any earlier pending target.
    pub fn scroll_container_view_to(&mut self, x: i32, y: i32) {
        let target = ScrollOffset::new(x, y);
        if !self.bounds.content_is_laid_out() {
            tracing::debug!("content not laid out, deferring scroll to ({}, {})", x, y);
            self.pending = Some(target);
            return;
        }
        self.request_host_scroll(target);
    }

    fn request_host_scroll(&mut self, target: ScrollOffset) {
        let scroll = self.host.host_scroll_offset();
        let request = OverscrollRequest {
            delta: target - scroll,
            scroll,
            scroll_range: self.bounds.scroll_ranges(),
            is_touch_event: self.processing_touch,
        };

        if let Some(report) = self.host.request_overscroll(request) {
            self.on_container_view_overscrolled(
                report.x,
                report.y,
                report.clamped_x,
                report.clamped_y,
            );
        }
    }

    /// The host settled at `(x, y)` after an overscroll request.
    ///
    /// The position is clamped and committed to the host. The rendering
    /// engine follows immediately, or at the end of the current touch.
    pub fn on_container_view_overscrolled(
        &mut self,
        x: i32,
        y: i32,
        clamped_x: bool,
        clamped_y: bool,
    ) {
        let clamped = self.bounds.clamp(ScrollOffset::new(x, y));
        tracing::trace!(
            "host overscrolled to ({}, {}) [host clamp x={} y={}] -> ({}, {})",
            x,
            y,
            clamped_x,
            clamped_y,
            clamped.x,
            clamped.y
        );
        self.host.commit_host_scroll_position(clamped);

        // The host may report a different position than the one committed.
        let confirmed = self.bounds.clamp(self.host.host_scroll_offset());
        if self.processing_touch {
            self.touch_confirmed = Some(confirmed);
            return;
        }
        self.commit_rendering(confirmed);
    }

    /// Third-party scroll notification; applied immediately, even mid-touch.
    pub fn on_container_view_scroll_changed(&mut self, x: i32, y: i32) {
        let clamped = self.bounds.clamp(ScrollOffset::new(x, y));
        self.commit_rendering(clamped);
    }

    /// Enter or leave touch batching.
    ///
    /// Leaving flushes the last confirmed host position into the rendering
    /// engine, if one arrived during the touch.
    pub fn set_processing_touch_event(&mut self, active: bool) {
        if self.processing_touch == active {
            return;
        }
        self.processing_touch = active;
        if active {
            return;
        }

        if let Some(confirmed) = self.touch_confirmed.take() {
            // Content may have shrunk since the host confirmed this position.
            let flushed = self.bounds.clamp(confirmed);
            tracing::debug!(
                "touch ended, flushing ({}, {}) -> ({}, {})",
                confirmed.x,
                confirmed.y,
                flushed.x,
                flushed.y
            );
            self.commit_rendering(flushed);
        }
    }

    fn commit_rendering(&mut self, offset: ScrollOffset) {
        tracing::trace!(
            "rendering offset ({}, {}) -> ({}, {})",
            self.committed.x,
            self.committed.y,
            offset.x,
            offset.y
        );
        self.committed = offset;
        self.host.commit_rendering_offset(offset);
        self.host.request_redraw();
    }

    // =========================================================================
    // Fling and animated scrolls
    // =========================================================================

    /// Seed a fling from the rendering-engine offset and kick off the frame
    /// loop with one redraw.
    pub fn fling_scroll(&mut self, velocity_x: i32, velocity_y: i32) {
        let max = self.bounds.max_offsets();
        tracing::debug!(
            "fling from ({}, {}) velocity=({}, {})",
            self.committed.x,
            self.committed.y,
            velocity_x,
            velocity_y
        );
        self.scroller.fling(
            self.committed,
            velocity_x,
            velocity_y,
            ScrollOffset::ZERO,
            max,
        );
        self.host.request_redraw();
    }

    pub fn is_fling_active(&self) -> bool {
        !self.scroller.is_finished()
    }

    /// Per-frame hook for the host's animation driver.
    ///
    /// Returns `true` while the scroller is moving; its current position has
    /// then been routed through [`Self::scroll_container_view_to`] and
    /// another frame requested.
    pub fn compute_scroll(&mut self) -> bool {
        if !self.scroller.compute_scroll_offset() {
            return false;
        }

        let position = self.scroller.current_position();
        self.scroll_container_view_to(position.x, position.y);
        self.host.request_redraw();
        true
    }

    /// Animate the host towards `(x, y)`, clamped to the scrollable area.
    ///
    /// Returns `false` when there is nothing to animate. Before content is
    /// laid out the target is parked like any other scroll request and
    /// `true` is returned, since the motion still happens once released.
    pub fn animate_scroll_to(&mut self, x: i32, y: i32) -> bool {
        if !self.bounds.content_is_laid_out() {
            tracing::debug!(
                "content not laid out, deferring animated scroll to ({}, {})",
                x,
                y
            );
            self.pending = Some(ScrollOffset::new(x, y));
            return true;
        }

        let scroll = self.host.host_scroll_offset();
        let target = self.bounds.clamp(ScrollOffset::new(x, y));
        let delta = target - scroll;
        if delta.is_zero() {
            return false;
        }

        let duration = self.config.timing.duration_for(delta);
        self.scroller.start_scroll(scroll, delta, duration);
        self.host.request_redraw();
        true
    }

    /// Page up, or jump to the top when `top` is set.
    pub fn page_up(&mut self, top: bool) -> bool {
        let scroll = self.host.host_scroll_offset();
        if top {
            return self.animate_scroll_to(scroll.x, 0);
        }
        let step = self.page_step();
        self.animate_scroll_to(scroll.x, scroll.y.saturating_sub(step))
    }

    /// Page down, or jump to the bottom when `bottom` is set.
    pub fn page_down(&mut self, bottom: bool) -> bool {
        let scroll = self.host.host_scroll_offset();
        if bottom {
            return self.animate_scroll_to(scroll.x, self.compute_scroll_range_y());
        }
        let step = self.page_step();
        self.animate_scroll_to(scroll.x, scroll.y.saturating_add(step))
    }

    fn page_step(&self) -> i32 {
        let height = self.bounds.viewport.height;
        let overlap = self.config.page_overlap;
        if height > overlap.saturating_mul(2) {
            height - overlap
        } else {
            height / 2
        }
    }

    // =========================================================================
    // Reveal
    // =========================================================================

    /// Scroll just enough to show `rect`, positioned at `(origin_x, origin_y)`
    /// in content coordinates.
    ///
    /// `immediate` snaps through the overscroll handshake; otherwise the
    /// motion is animated. Returns `true` if any motion was requested,
    /// including one parked until content is laid out.
    pub fn request_child_rectangle_on_screen(
        &mut self,
        origin_x: i32,
        origin_y: i32,
        rect: Rect,
        immediate: bool,
    ) -> bool {
        let scroll = self.host.host_scroll_offset();
        let target_rect = rect.offset(origin_x, origin_y);
        let delta = reveal_delta(
            target_rect,
            scroll,
            self.bounds.viewport,
            self.config.reveal_margin_divisor,
        );
        if delta.is_zero() {
            return false;
        }

        let target = scroll + delta;
        if immediate {
            self.scroll_container_view_to(target.x, target.y);
            true
        } else {
            self.animate_scroll_to(target.x, target.y)
        }
    }
}
