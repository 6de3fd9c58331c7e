//! Headless scenario runner.

use anyhow::{bail, Context, Result};
use tandem_animation::{RecordingScroller, Scroller};
use tandem_core::ScrollOffset;
use tandem_platform::{RecordingHost, SettleMode};
use tandem_scroll::{ScrollOffsetManager, ScrollSyncConfig};

use crate::assert::{
    evaluate_count, evaluate_flag, evaluate_offset, evaluate_pending, AssertionResult,
    ScenarioSnapshot,
};
use crate::report::HeadlessReport;
use crate::scenario::{HeadlessScenario, ScenarioStep};

type HeadlessManager = ScrollOffsetManager<RecordingHost, RecordingScroller>;

/// Runtime settings used when a scenario does not carry its own.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    pub config: ScrollSyncConfig,
    pub settle_mode: SettleMode,
    /// Upper bound for a single `tick` step
    pub max_tick_frames: u32,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            config: ScrollSyncConfig::default(),
            settle_mode: SettleMode::Deferred,
            max_tick_frames: 600,
        }
    }
}

/// Final run outcome.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON with the default run configuration.
pub fn run_scenario(input: &str) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, HeadlessRunConfig::default())
}

/// Execute a pre-loaded scenario.
pub fn run_loaded_scenario(
    scenario: &HeadlessScenario,
    runtime_cfg: HeadlessRunConfig,
) -> Result<RunOutcome> {
    let config = scenario.config.unwrap_or(runtime_cfg.config);
    config.validate().context("invalid scroll configuration")?;
    let settle_mode = scenario.settle_mode.unwrap_or(runtime_cfg.settle_mode);

    let host = RecordingHost::new().with_settle_mode(settle_mode);
    let mut manager = ScrollOffsetManager::with_config(host, RecordingScroller::new(), config);
    let mut animation_frames: u64 = 0;

    for (step_index, step) in scenario.steps.iter().enumerate() {
        if step.is_assertion() {
            let snapshot = ScenarioSnapshot::capture(&manager);
            let (assertion, result) = evaluate_step(step, &snapshot);
            if let AssertionResult::Failed { message, code } = result {
                tracing::warn!(
                    "scenario failed at step {} ({}, {}): {}",
                    step_index,
                    assertion,
                    code,
                    message
                );
                let report = HeadlessReport::failed(
                    assertion,
                    step_index,
                    message,
                    animation_frames,
                    snapshot.host_offset,
                    snapshot.rendering_offset,
                );
                return Ok(RunOutcome::Failed { report });
            }
            continue;
        }

        apply_step(
            &mut manager,
            step,
            step_index,
            runtime_cfg.max_tick_frames,
            &mut animation_frames,
        )?;
    }

    let snapshot = ScenarioSnapshot::capture(&manager);
    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(
            scenario.steps.len(),
            animation_frames,
            snapshot.host_offset,
            snapshot.rendering_offset,
        ),
    })
}

fn apply_step(
    manager: &mut HeadlessManager,
    step: &ScenarioStep,
    step_index: usize,
    max_tick_frames: u32,
    animation_frames: &mut u64,
) -> Result<()> {
    match *step {
        ScenarioStep::SetContentSize { width, height } => manager.set_content_size(width, height),
        ScenarioStep::SetViewportSize { width, height } => {
            manager.set_viewport_size(width, height)
        }
        ScenarioStep::ScrollTo { x, y } => manager.scroll_container_view_to(x, y),
        ScenarioStep::HostOverscrolled {
            x,
            y,
            clamped_x,
            clamped_y,
        } => manager.on_container_view_overscrolled(x, y, clamped_x, clamped_y),
        ScenarioStep::SettleOverscroll => {
            let Some(report) = manager.host().settle_last_request() else {
                bail!("step {step_index}: settle_overscroll without a prior overscroll request");
            };
            manager.on_container_view_overscrolled(
                report.x,
                report.y,
                report.clamped_x,
                report.clamped_y,
            );
        }
        ScenarioStep::ScrollChanged { x, y } => manager.on_container_view_scroll_changed(x, y),
        ScenarioStep::Touch { active } => manager.set_processing_touch_event(active),
        ScenarioStep::Fling {
            velocity_x,
            velocity_y,
        } => manager.fling_scroll(velocity_x, velocity_y),
        ScenarioStep::ScrollerPosition { x, y } => manager
            .scroller_mut()
            .set_position(ScrollOffset::new(x, y)),
        ScenarioStep::FinishAnimation => manager.scroller_mut().force_finished(),
        ScenarioStep::Tick { frames } => {
            if frames > max_tick_frames {
                bail!("step {step_index}: tick of {frames} frames exceeds limit {max_tick_frames}");
            }
            for _ in 0..frames {
                if !manager.compute_scroll() {
                    break;
                }
                *animation_frames += 1;
            }
        }
        ScenarioStep::AnimateTo { x, y } => {
            manager.animate_scroll_to(x, y);
        }
        ScenarioStep::PageUp { top } => {
            manager.page_up(top);
        }
        ScenarioStep::PageDown { bottom } => {
            manager.page_down(bottom);
        }
        ScenarioStep::RequestRectangle {
            origin_x,
            origin_y,
            rect,
            immediate,
        } => {
            manager.request_child_rectangle_on_screen(origin_x, origin_y, rect, immediate);
        }
        ScenarioStep::AssertHostOffset { .. }
        | ScenarioStep::AssertRenderingOffset { .. }
        | ScenarioStep::AssertPending { .. }
        | ScenarioStep::AssertOverscrollCalls { .. }
        | ScenarioStep::AssertLastOverscrollDelta { .. }
        | ScenarioStep::AssertRedraws { .. }
        | ScenarioStep::AssertFlingActive { .. } => {}
    }
    Ok(())
}

fn evaluate_step(
    step: &ScenarioStep,
    snapshot: &ScenarioSnapshot,
) -> (&'static str, AssertionResult) {
    match *step {
        ScenarioStep::AssertHostOffset { x, y } => (
            "assert_host_offset",
            evaluate_offset("host_offset", ScrollOffset::new(x, y), snapshot.host_offset),
        ),
        ScenarioStep::AssertRenderingOffset { x, y } => (
            "assert_rendering_offset",
            evaluate_offset(
                "rendering_offset",
                ScrollOffset::new(x, y),
                snapshot.rendering_offset,
            ),
        ),
        ScenarioStep::AssertPending { offset } => (
            "assert_pending",
            evaluate_pending(offset, snapshot.pending),
        ),
        ScenarioStep::AssertOverscrollCalls { count } => (
            "assert_overscroll_calls",
            evaluate_count("overscroll_calls", count, snapshot.overscroll_calls),
        ),
        ScenarioStep::AssertLastOverscrollDelta { x, y } => (
            "assert_last_overscroll_delta",
            evaluate_offset(
                "last_overscroll_delta",
                ScrollOffset::new(x, y),
                snapshot.last_overscroll_delta,
            ),
        ),
        ScenarioStep::AssertRedraws { count } => (
            "assert_redraws",
            evaluate_count("redraws", count, snapshot.redraws),
        ),
        ScenarioStep::AssertFlingActive { active } => (
            "assert_fling_active",
            evaluate_flag("fling_active", active, snapshot.fling_active),
        ),
        _ => ("none", AssertionResult::Passed),
    }
}
