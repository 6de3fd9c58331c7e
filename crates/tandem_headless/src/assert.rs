//! Assertion helpers for headless scroll scenarios.

use tandem_animation::Scroller;
use tandem_core::ScrollOffset;
use tandem_platform::RecordingHost;
use tandem_scroll::ScrollOffsetManager;

/// Observable state of a manager and its recording host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioSnapshot {
    pub host_offset: ScrollOffset,
    pub rendering_offset: ScrollOffset,
    pub pending: Option<ScrollOffset>,
    pub overscroll_calls: usize,
    pub last_overscroll_delta: ScrollOffset,
    pub redraws: usize,
    pub fling_active: bool,
}

impl ScenarioSnapshot {
    pub fn capture<S: Scroller>(manager: &ScrollOffsetManager<RecordingHost, S>) -> Self {
        let host = manager.host();
        Self {
            host_offset: host.committed_scroll(),
            rendering_offset: host.rendering_offset(),
            pending: manager.pending_offset(),
            overscroll_calls: host.overscroll_call_count(),
            last_overscroll_delta: host.last_overscroll_delta(),
            redraws: host.redraw_count(),
            fling_active: manager.is_fling_active(),
        }
    }
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

impl AssertionResult {
    pub fn is_passed(&self) -> bool {
        matches!(self, AssertionResult::Passed)
    }
}

fn fmt_offset(offset: ScrollOffset) -> String {
    format!("({}, {})", offset.x, offset.y)
}

pub fn evaluate_offset(label: &str, expected: ScrollOffset, actual: ScrollOffset) -> AssertionResult {
    if expected == actual {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "offset_mismatch".to_string(),
            message: format!(
                "{label}: expected {}, got {}",
                fmt_offset(expected),
                fmt_offset(actual)
            ),
        }
    }
}

pub fn evaluate_pending(
    expected: Option<ScrollOffset>,
    actual: Option<ScrollOffset>,
) -> AssertionResult {
    if expected == actual {
        return AssertionResult::Passed;
    }
    let describe = |value: Option<ScrollOffset>| match value {
        Some(offset) => fmt_offset(offset),
        None => "none".to_string(),
    };
    AssertionResult::Failed {
        code: "pending_mismatch".to_string(),
        message: format!(
            "pending: expected {}, got {}",
            describe(expected),
            describe(actual)
        ),
    }
}

pub fn evaluate_count(label: &str, expected: usize, actual: usize) -> AssertionResult {
    if expected == actual {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "count_mismatch".to_string(),
            message: format!("{label}: expected {expected}, got {actual}"),
        }
    }
}

pub fn evaluate_flag(label: &str, expected: bool, actual: bool) -> AssertionResult {
    if expected == actual {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "flag_mismatch".to_string(),
            message: format!("{label}: expected {expected}, got {actual}"),
        }
    }
}
