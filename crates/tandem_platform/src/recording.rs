//! Headless host surface that records every call.
//!
//! Used by the scenario runner and by tests. It behaves like a minimal host
//! widget: it stores what it is told and, depending on [`SettleMode`],
//! reports an overscroll back synchronously or leaves that to the caller.

use serde::{Deserialize, Serialize};
use tandem_core::ScrollOffset;

use crate::host::{HostSurface, OverscrollReport, OverscrollRequest};

/// How the headless host answers an overscroll request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettleMode {
    /// Record the request only; the settle position is reported later.
    #[default]
    Deferred,
    /// Report `scroll + delta` back before the request returns.
    Immediate,
}

/// Headless [`HostSurface`] implementation.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    scroll: ScrollOffset,
    rendering: ScrollOffset,
    scroll_override: Option<ScrollOffset>,
    settle_mode: SettleMode,
    overscroll_requests: Vec<OverscrollRequest>,
    host_commits: usize,
    rendering_commits: usize,
    redraws: usize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how overscroll requests are answered.
    pub fn with_settle_mode(mut self, settle_mode: SettleMode) -> Self {
        self.settle_mode = settle_mode;
        self
    }

    /// Make the scroll getters report `offset` regardless of commits.
    ///
    /// Mirrors a host widget whose scroll position is overridden by the
    /// embedding application.
    pub fn with_scroll_override(mut self, offset: ScrollOffset) -> Self {
        self.scroll_override = Some(offset);
        self
    }

    pub fn set_settle_mode(&mut self, settle_mode: SettleMode) {
        self.settle_mode = settle_mode;
    }

    pub fn settle_mode(&self) -> SettleMode {
        self.settle_mode
    }

    /// Last committed host-visible scroll position (ignores any override).
    pub fn committed_scroll(&self) -> ScrollOffset {
        self.scroll
    }

    /// Last offset committed into the rendering engine.
    pub fn rendering_offset(&self) -> ScrollOffset {
        self.rendering
    }

    /// Every overscroll request received, oldest first.
    pub fn overscroll_requests(&self) -> &[OverscrollRequest] {
        &self.overscroll_requests
    }

    pub fn overscroll_call_count(&self) -> usize {
        self.overscroll_requests.len()
    }

    pub fn last_overscroll(&self) -> Option<&OverscrollRequest> {
        self.overscroll_requests.last()
    }

    /// Delta of the most recent overscroll request, zero when none was made.
    pub fn last_overscroll_delta(&self) -> ScrollOffset {
        self.last_overscroll()
            .map(|request| request.delta)
            .unwrap_or_default()
    }

    pub fn host_commit_count(&self) -> usize {
        self.host_commits
    }

    pub fn rendering_commit_count(&self) -> usize {
        self.rendering_commits
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// Settle position for the most recent request, as a synchronous host
    /// would have reported it.
    pub fn settle_last_request(&self) -> Option<OverscrollReport> {
        self.last_overscroll()
            .map(|request| OverscrollReport::at(request.target()))
    }
}

impl HostSurface for RecordingHost {
    fn request_overscroll(&mut self, request: OverscrollRequest) -> Option<OverscrollReport> {
        tracing::trace!(
            "overscroll request delta=({}, {}) from=({}, {}) range=({}, {}) touch={}",
            request.delta.x,
            request.delta.y,
            request.scroll.x,
            request.scroll.y,
            request.scroll_range.x,
            request.scroll_range.y,
            request.is_touch_event
        );
        self.overscroll_requests.push(request);

        match self.settle_mode {
            SettleMode::Deferred => None,
            SettleMode::Immediate => Some(OverscrollReport::at(request.target())),
        }
    }

    fn commit_host_scroll_position(&mut self, offset: ScrollOffset) {
        self.scroll = offset;
        self.host_commits += 1;
    }

    fn commit_rendering_offset(&mut self, offset: ScrollOffset) {
        self.rendering = offset;
        self.rendering_commits += 1;
    }

    fn current_host_scroll_x(&self) -> i32 {
        self.scroll_override.unwrap_or(self.scroll).x
    }

    fn current_host_scroll_y(&self) -> i32 {
        self.scroll_override.unwrap_or(self.scroll).y
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(dx: i32, dy: i32) -> OverscrollRequest {
        OverscrollRequest {
            delta: ScrollOffset::new(dx, dy),
            scroll: ScrollOffset::new(10, 20),
            scroll_range: ScrollOffset::new(968, 439),
            is_touch_event: false,
        }
    }

    #[test]
    fn test_deferred_host_records_without_reporting() {
        let mut host = RecordingHost::new();

        assert_eq!(host.request_overscroll(request(5, 6)), None);
        assert_eq!(host.overscroll_call_count(), 1);
        assert_eq!(host.last_overscroll_delta(), ScrollOffset::new(5, 6));
        assert_eq!(
            host.settle_last_request(),
            Some(OverscrollReport::at(ScrollOffset::new(15, 26)))
        );
    }

    #[test]
    fn test_immediate_host_reports_target() {
        let mut host = RecordingHost::new().with_settle_mode(SettleMode::Immediate);

        let report = host.request_overscroll(request(-30, 1));

        assert_eq!(report, Some(OverscrollReport::at(ScrollOffset::new(-20, 21))));
    }

    #[test]
    fn test_commits_are_counted() {
        let mut host = RecordingHost::new();
        host.commit_host_scroll_position(ScrollOffset::new(31, 41));
        host.commit_rendering_offset(ScrollOffset::new(7, 8));
        host.request_redraw();
        host.request_redraw();

        assert_eq!(host.host_scroll_offset(), ScrollOffset::new(31, 41));
        assert_eq!(host.rendering_offset(), ScrollOffset::new(7, 8));
        assert_eq!(host.host_commit_count(), 1);
        assert_eq!(host.rendering_commit_count(), 1);
        assert_eq!(host.redraw_count(), 2);
    }

    #[test]
    fn test_scroll_override_wins_over_commits() {
        let mut host = RecordingHost::new().with_scroll_override(ScrollOffset::new(10, 10));
        host.commit_host_scroll_position(ScrollOffset::new(1, 2));

        assert_eq!(host.host_scroll_offset(), ScrollOffset::new(10, 10));
        assert_eq!(host.committed_scroll(), ScrollOffset::new(1, 2));
    }

    #[test]
    fn test_no_requests_reports_zero_delta() {
        let host = RecordingHost::new();

        assert_eq!(host.last_overscroll_delta(), ScrollOffset::ZERO);
        assert_eq!(host.settle_last_request(), None);
    }
}
