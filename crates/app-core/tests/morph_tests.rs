// Host-side tests for the morph controller: smoothstep shaping, the legacy
// scroll window and the canonical section-driven damping.

use app_core::{smoothstep, MorphState, MorphTrigger, ScrollWindow};

const DT: f32 = 1.0 / 60.0;
const RATE: f32 = 4.0;

#[test]
fn smoothstep_endpoints_and_monotonicity() {
    assert_eq!(smoothstep(0.0), 0.0);
    assert_eq!(smoothstep(1.0), 1.0);

    let mut prev = 0.0;
    for i in 0..=100 {
        let v = smoothstep(i as f32 / 100.0);
        assert!(v >= prev, "smoothstep must be monotonic on [0,1]");
        prev = v;
    }
}

#[test]
fn smoothstep_clamps_outside_unit_range() {
    assert_eq!(smoothstep(-3.0), 0.0);
    assert_eq!(smoothstep(2.5), 1.0);
}

#[test]
fn scroll_window_shape_matches_breakpoints() {
    let w = ScrollWindow::default();

    // Flat zero before the window
    assert_eq!(w.progress(0.0), 0.0);
    assert_eq!(w.progress(0.30), 0.0);

    // Rising edge: halfway through the rise is exactly smoothstep(0.5)
    assert!((w.progress(0.35) - 0.5).abs() < 1e-6);

    // Hold at one
    assert_eq!(w.progress(0.40), 1.0);
    assert_eq!(w.progress(0.44), 1.0);

    // Falling edge midpoint
    assert!((w.progress(0.54) - 0.5).abs() < 1e-6);

    // Flat zero after the window
    assert_eq!(w.progress(0.60), 0.0);
    assert_eq!(w.progress(1.0), 0.0);

    // Whole curve stays in [0, 1]
    for i in 0..=200 {
        let v = w.progress(i as f32 / 200.0);
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn section_trigger_converges_within_two_seconds() {
    let trigger = MorphTrigger::Section { index: 1 };
    let mut state = MorphState::default();

    // 2 seconds at 60 fps with the active section matching
    for _ in 0..120 {
        state.update(trigger, RATE, DT, 0.0, 1);
    }
    assert!(
        (state.progress() - 1.0).abs() < 1e-3,
        "expected convergence, got {}",
        state.progress()
    );
}

#[test]
fn section_trigger_never_jumps() {
    let trigger = MorphTrigger::Section { index: 1 };
    let mut state = MorphState::default();

    // Inactive section: progress pinned at zero
    for _ in 0..30 {
        state.update(trigger, RATE, DT, 0.0, 0);
    }
    assert_eq!(state.progress(), 0.0);

    // Section activates: first step is bounded by the damping formula and
    // progress then rises monotonically
    let max_step = 1.0 - (-RATE * DT).exp();
    let mut prev = state.progress();
    for _ in 0..300 {
        let p = state.update(trigger, RATE, DT, 0.0, 1);
        assert!(p >= prev, "progress must not regress toward an active target");
        assert!(
            p - prev <= max_step + 1e-6,
            "step {} exceeds damping bound {}",
            p - prev,
            max_step
        );
        prev = p;
    }
    assert!(prev > 0.99);
}

#[test]
fn non_positive_dt_is_a_no_op() {
    let trigger = MorphTrigger::Section { index: 0 };
    let mut state = MorphState::default();
    for _ in 0..10 {
        state.update(trigger, RATE, DT, 0.0, 0);
    }
    let before = state.progress();

    // Paused-tab resume can produce zero or negative deltas
    state.update(trigger, RATE, 0.0, 0.0, 0);
    assert_eq!(state.progress(), before);
    state.update(trigger, RATE, -0.5, 0.0, 0);
    assert_eq!(state.progress(), before);
}

#[test]
fn progress_stays_in_unit_interval_under_flapping_targets() {
    let trigger = MorphTrigger::Section { index: 3 };
    let mut state = MorphState::default();
    for frame in 0..600 {
        // Flip the active section every 7 frames
        let section = if (frame / 7) % 2 == 0 { 3 } else { 0 };
        let p = state.update(trigger, RATE, DT, 0.0, section);
        assert!((0.0..=1.0).contains(&p));
    }
}
