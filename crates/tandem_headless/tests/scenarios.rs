use tandem_core::ScrollOffset;
use tandem_headless::{
    run_loaded_scenario, run_scenario, HeadlessRunConfig, HeadlessScenario, ReportStatus,
};

fn assert_passes(name: &str, input: &str) {
    let outcome = run_scenario(input).unwrap();
    let report = outcome.report();
    assert!(
        !outcome.is_failed(),
        "{name} failed at step {:?}: {:?}",
        report.failed_step_index,
        report.message
    );
}

#[test]
fn deferred_scroll_demo_passes() {
    assert_passes(
        "deferred_scroll",
        include_str!("../../../demos/deferred_scroll.json"),
    );
}

#[test]
fn touch_batching_demo_passes() {
    assert_passes(
        "touch_batching",
        include_str!("../../../demos/touch_batching.json"),
    );
}

#[test]
fn fling_demo_passes() {
    let outcome = run_scenario(include_str!("../../../demos/fling.json")).unwrap();

    assert!(!outcome.is_failed(), "{:?}", outcome.report().message);
    assert_eq!(outcome.report().animation_frames, 3);
}

#[test]
fn reveal_animated_demo_passes() {
    assert_passes(
        "reveal_animated",
        include_str!("../../../demos/reveal_animated.json"),
    );
}

#[test]
fn scroll_changed_applies_mid_touch() {
    assert_passes(
        "scroll_changed_mid_touch",
        r#"{
            "steps": [
                { "type": "set_viewport_size", "width": 211, "height": 312 },
                { "type": "set_content_size", "width": 968, "height": 439 },
                { "type": "touch", "active": true },
                { "type": "scroll_changed", "x": 2000, "y": 50 },
                { "type": "assert_rendering_offset", "x": 757, "y": 50 },
                { "type": "assert_redraws", "count": 1 },
                { "type": "touch", "active": false },
                { "type": "assert_redraws", "count": 1 }
            ]
        }"#,
    );
}

#[test]
fn content_shrinking_mid_touch_clamps_flush() {
    assert_passes(
        "shrink_mid_touch",
        r#"{
            "settle_mode": "immediate",
            "steps": [
                { "type": "set_viewport_size", "width": 211, "height": 312 },
                { "type": "set_content_size", "width": 968, "height": 439 },
                { "type": "touch", "active": true },
                { "type": "scroll_to", "x": 700, "y": 120 },
                { "type": "assert_host_offset", "x": 700, "y": 120 },
                { "type": "set_content_size", "width": 300, "height": 350 },
                { "type": "assert_redraws", "count": 0 },
                { "type": "touch", "active": false },
                { "type": "assert_rendering_offset", "x": 89, "y": 38 },
                { "type": "assert_redraws", "count": 1 }
            ]
        }"#,
    );
}

#[test]
fn page_down_then_bottom() {
    assert_passes(
        "paging",
        r#"{
            "steps": [
                { "type": "set_viewport_size", "width": 211, "height": 100 },
                { "type": "set_content_size", "width": 211, "height": 1000 },
                { "type": "page_down" },
                { "type": "scroller_position", "x": 0, "y": 76 },
                { "type": "tick", "frames": 1 },
                { "type": "assert_last_overscroll_delta", "x": 0, "y": 76 },
                { "type": "settle_overscroll" },
                { "type": "finish_animation" },
                { "type": "page_down", "bottom": true },
                { "type": "scroller_position", "x": 0, "y": 900 },
                { "type": "tick", "frames": 1 },
                { "type": "settle_overscroll" },
                { "type": "assert_host_offset", "x": 0, "y": 900 },
                { "type": "assert_rendering_offset", "x": 0, "y": 900 }
            ]
        }"#,
    );
}

#[test]
fn failing_assertion_yields_report() {
    let outcome = run_scenario(
        r#"{
            "settle_mode": "immediate",
            "steps": [
                { "type": "set_viewport_size", "width": 211, "height": 312 },
                { "type": "set_content_size", "width": 968, "height": 439 },
                { "type": "scroll_to", "x": 31, "y": 41 },
                { "type": "assert_host_offset", "x": 0, "y": 0 }
            ]
        }"#,
    )
    .unwrap();

    let report = outcome.report();
    assert!(outcome.is_failed());
    assert_eq!(report.status, ReportStatus::Failed);
    assert_eq!(report.failed_step_index, Some(3));
    assert_eq!(report.assertion.as_deref(), Some("assert_host_offset"));
    assert_eq!(report.host_offset, ScrollOffset::new(31, 41));
}

#[test]
fn scenario_settle_mode_overrides_run_config() {
    let scenario = HeadlessScenario::from_json(include_str!("../../../demos/touch_batching.json"))
        .unwrap();

    let outcome = run_loaded_scenario(&scenario, HeadlessRunConfig::default()).unwrap();

    assert!(!outcome.is_failed());
}
