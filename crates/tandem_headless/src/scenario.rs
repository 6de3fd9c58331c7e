//! Scenario definition for headless scroll replays.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tandem_core::{Rect, ScrollOffset};
use tandem_platform::SettleMode;
use tandem_scroll::ScrollSyncConfig;

/// Sequence of manager operations and checks.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    /// How the headless host answers overscroll requests; falls back to the
    /// run configuration when absent.
    #[serde(default)]
    pub settle_mode: Option<SettleMode>,
    /// Manager configuration; falls back to the run configuration when absent.
    #[serde(default)]
    pub config: Option<ScrollSyncConfig>,
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid scenario {}", path.display()))
    }
}

fn default_true() -> bool {
    true
}

/// One scenario step: a manager operation, a simulated host/scroller event,
/// or an assertion.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    SetContentSize {
        width: i32,
        height: i32,
    },
    SetViewportSize {
        width: i32,
        height: i32,
    },
    ScrollTo {
        x: i32,
        y: i32,
    },
    /// Host reports where it settled.
    HostOverscrolled {
        x: i32,
        y: i32,
        #[serde(default)]
        clamped_x: bool,
        #[serde(default)]
        clamped_y: bool,
    },
    /// Host reports the target of its most recent overscroll request.
    SettleOverscroll,
    ScrollChanged {
        x: i32,
        y: i32,
    },
    Touch {
        active: bool,
    },
    Fling {
        velocity_x: i32,
        velocity_y: i32,
    },
    /// Move the scroller along its (external) curve.
    ScrollerPosition {
        x: i32,
        y: i32,
    },
    FinishAnimation,
    /// Run up to `frames` animation frames, stopping early once idle.
    Tick {
        frames: u32,
    },
    AnimateTo {
        x: i32,
        y: i32,
    },
    PageUp {
        #[serde(default)]
        top: bool,
    },
    PageDown {
        #[serde(default)]
        bottom: bool,
    },
    RequestRectangle {
        #[serde(default)]
        origin_x: i32,
        #[serde(default)]
        origin_y: i32,
        rect: Rect,
        #[serde(default = "default_true")]
        immediate: bool,
    },
    AssertHostOffset {
        x: i32,
        y: i32,
    },
    AssertRenderingOffset {
        x: i32,
        y: i32,
    },
    AssertPending {
        offset: Option<ScrollOffset>,
    },
    AssertOverscrollCalls {
        count: usize,
    },
    AssertLastOverscrollDelta {
        x: i32,
        y: i32,
    },
    AssertRedraws {
        count: usize,
    },
    AssertFlingActive {
        active: bool,
    },
}

impl ScenarioStep {
    /// Whether the step checks state rather than changing it.
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            ScenarioStep::AssertHostOffset { .. }
                | ScenarioStep::AssertRenderingOffset { .. }
                | ScenarioStep::AssertPending { .. }
                | ScenarioStep::AssertOverscrollCalls { .. }
                | ScenarioStep::AssertLastOverscrollDelta { .. }
                | ScenarioStep::AssertRedraws { .. }
                | ScenarioStep::AssertFlingActive { .. }
        )
    }
}
