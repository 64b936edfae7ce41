// Host-side tests for input normalization and its degenerate-input guards.

use app_core::InputState;
use glam::Vec2;

#[test]
fn pointer_normalization_center_and_corners() {
    let mut st = InputState::default();
    st.set_viewport(800.0, 600.0);

    st.set_pointer_from_client(400.0, 300.0);
    assert_eq!(st.pointer, Vec2::ZERO);

    st.set_pointer_from_client(0.0, 0.0);
    assert_eq!(st.pointer, Vec2::new(-1.0, -1.0));

    st.set_pointer_from_client(800.0, 600.0);
    assert_eq!(st.pointer, Vec2::new(1.0, 1.0));
}

#[test]
fn pointer_is_clamped_to_unit_square() {
    let mut st = InputState::default();
    st.set_viewport(800.0, 600.0);
    st.set_pointer_from_client(-200.0, 900.0);
    assert_eq!(st.pointer, Vec2::new(-1.0, 1.0));
}

#[test]
fn zero_viewport_never_produces_nan() {
    let mut st = InputState::default();
    st.set_viewport(0.0, 0.0);
    st.set_pointer_from_client(123.0, 456.0);
    assert!(st.pointer.x.is_finite() && st.pointer.y.is_finite());
    assert!(st.scroll_fraction().is_finite());

    // A NaN viewport (momentarily undefined size) is treated the same way
    st.set_viewport(f32::NAN, f32::NAN);
    st.set_pointer_from_client(10.0, 10.0);
    assert!(st.pointer.x.is_finite() && st.pointer.y.is_finite());
    assert!(st.scroll_fraction().is_finite());
}

#[test]
fn scroll_fraction_normalizes_over_two_screens() {
    let mut st = InputState::default();
    st.set_viewport(1280.0, 1000.0);

    st.set_scroll(0.0);
    assert_eq!(st.scroll_fraction(), 0.0);

    st.set_scroll(1000.0);
    assert!((st.scroll_fraction() - 0.5).abs() < 1e-6);

    st.set_scroll(4000.0);
    assert_eq!(st.scroll_fraction(), 1.0);

    // Elastic overscroll above the page top clamps to zero
    st.set_scroll(-50.0);
    assert_eq!(st.scroll_fraction(), 0.0);
}

#[test]
fn active_section_rounds_to_nearest_screen() {
    let mut st = InputState::default();
    st.set_viewport(1280.0, 800.0);

    st.set_scroll(0.0);
    assert_eq!(st.active_section(), 0);

    st.set_scroll(300.0);
    assert_eq!(st.active_section(), 0);

    st.set_scroll(500.0);
    assert_eq!(st.active_section(), 1);

    st.set_scroll(1200.0);
    assert_eq!(st.active_section(), 2);

    st.set_scroll(-100.0);
    assert_eq!(st.active_section(), 0);
}

#[test]
fn default_state_is_degenerate_but_safe() {
    let st = InputState::default();
    assert_eq!(st.pointer, Vec2::ZERO);
    assert_eq!(st.scroll_fraction(), 0.0);
    assert_eq!(st.active_section(), 0);
}
