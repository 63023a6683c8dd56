// Host-side tests for the gesture-to-frame controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod controller {
    include!("../src/controller.rs");
}

use controller::*;

fn goggles() -> ViewerController {
    ViewerController::new(ViewerConfig::new("/goggle.mp4", 72, 7.0).unwrap())
}

#[test]
fn drag_move_without_session_is_a_noop() {
    let mut ctrl = goggles();
    assert_eq!(ctrl.drag_move(50.0, 1000.0), None);
    assert_eq!(ctrl.state.current_frame, 0);
}

#[test]
fn sub_threshold_jitter_is_absorbed() {
    let mut ctrl = goggles();
    ctrl.drag_start(100.0);
    // net movement stays under the 10 px threshold, including a sign flip
    assert_eq!(ctrl.drag_move(104.0, 16.0), None);
    assert_eq!(ctrl.drag_move(107.0, 32.0), None);
    assert_eq!(ctrl.drag_move(99.0, 48.0), None);
    assert_eq!(ctrl.state.current_frame, 0);
}

#[test]
fn threshold_crossing_steps_exactly_one_frame() {
    let mut ctrl = goggles();
    ctrl.drag_start(100.0);
    // +15 px with no prior recent step: exactly one step, no rate limit
    let cmd = ctrl.drag_move(115.0, 40.0).expect("one frame step");
    assert_eq!(ctrl.state.current_frame, 1);
    assert!((cmd.time_seconds - 7.0 / 72.0).abs() < 1e-12);
    assert!((cmd.time_seconds - 0.0972).abs() < 1e-3);
}

#[test]
fn negative_step_wraps_to_last_frame() {
    let mut ctrl = goggles();
    ctrl.drag_start(100.0);
    let cmd = ctrl.drag_move(85.0, 40.0).expect("one frame step");
    assert_eq!(ctrl.state.current_frame, 71);
    assert!((cmd.time_seconds - 71.0 * 7.0 / 72.0).abs() < 1e-12);
    assert!((cmd.time_seconds - 6.903).abs() < 1e-3);
}

#[test]
fn rapid_moves_within_interval_step_at_most_once() {
    let mut ctrl = goggles();
    ctrl.drag_start(0.0);
    assert!(ctrl.drag_move(15.0, 1000.0).is_some());
    assert_eq!(ctrl.drag_move(30.0, 1050.0), None);
    assert_eq!(ctrl.state.current_frame, 1);
}

#[test]
fn accumulated_crossings_collapse_to_one_step_per_window() {
    let mut ctrl = goggles();
    ctrl.drag_start(0.0);
    assert!(ctrl.drag_move(15.0, 1000.0).is_some());
    // 45 px pile up while rate-limited; once the window passes, exactly one
    // step commits, not three
    assert_eq!(ctrl.drag_move(30.0, 1050.0), None);
    assert_eq!(ctrl.drag_move(45.0, 1099.0), None);
    assert!(ctrl.drag_move(60.0, 1100.0).is_some());
    assert_eq!(ctrl.state.current_frame, 2);
}

#[test]
fn forward_wrap_around_closes_after_full_revolution() {
    let mut ctrl = goggles();
    ctrl.drag_start(0.0);
    let mut x = 0.0;
    let mut t = 0.0;
    for _ in 0..72 {
        x += 15.0;
        t += 200.0;
        assert!(ctrl.drag_move(x, t).is_some());
    }
    assert_eq!(ctrl.state.current_frame, 0);
}

#[test]
fn backward_wrap_around_closes_after_full_revolution() {
    let mut ctrl = goggles();
    ctrl.drag_start(2000.0);
    let mut x = 2000.0;
    let mut t = 0.0;
    for _ in 0..72 {
        x -= 15.0;
        t += 200.0;
        assert!(ctrl.drag_move(x, t).is_some());
    }
    assert_eq!(ctrl.state.current_frame, 0);
}

#[test]
fn current_frame_stays_in_range_for_mixed_sequences() {
    let mut ctrl = goggles();
    ctrl.drag_start(500.0);
    let deltas = [20.0, -35.0, 12.0, -18.0, 40.0, -40.0, 9.0, 30.0, -11.0];
    let mut x = 500.0;
    let mut t = 0.0;
    for d in deltas {
        x += d;
        t += 150.0;
        ctrl.drag_move(x, t);
        assert!(ctrl.state.current_frame < 72);
    }
}

#[test]
fn drag_end_resets_the_accumulator() {
    let mut ctrl = goggles();
    ctrl.drag_start(100.0);
    assert_eq!(ctrl.drag_move(104.0, 16.0), None);
    ctrl.drag_end();
    assert!(!ctrl.session.active);
    assert_eq!(ctrl.session.accumulated_dx, 0.0);
    // the session is over; further moves are ignored
    assert_eq!(ctrl.drag_move(200.0, 32.0), None);
    assert_eq!(ctrl.state.current_frame, 0);
}

#[test]
fn drag_end_without_a_session_is_harmless() {
    let mut ctrl = goggles();
    ctrl.drag_end();
    assert!(!ctrl.session.active);
    assert_eq!(ctrl.session.accumulated_dx, 0.0);
}

#[test]
fn drag_start_during_active_session_keeps_the_anchor() {
    let mut ctrl = goggles();
    ctrl.drag_start(100.0);
    ctrl.drag_start(500.0);
    // delta is measured from the original anchor, so +10 px steps forward
    assert!(ctrl.drag_move(110.0, 40.0).is_some());
    assert_eq!(ctrl.state.current_frame, 1);
}

#[test]
fn double_activate_toggles_zoom_and_nothing_else() {
    let mut ctrl = goggles();
    assert!(ctrl.double_activate());
    assert!(!ctrl.double_activate());
    assert_eq!(ctrl.state.current_frame, 0);
    assert!(!ctrl.state.zoomed);
}

#[test]
fn fullscreen_state_follows_the_platform_notification() {
    let mut ctrl = goggles();
    // external authority: no request preceded this notification
    ctrl.fullscreen_changed(true);
    assert!(ctrl.state.fullscreen);
    assert_eq!(ctrl.fullscreen_request(), FullscreenRequest::Exit);
    ctrl.fullscreen_changed(false);
    assert!(!ctrl.state.fullscreen);
    assert_eq!(ctrl.fullscreen_request(), FullscreenRequest::Enter);
}

#[test]
fn fullscreen_request_does_not_mutate_state() {
    let ctrl = goggles();
    assert_eq!(ctrl.fullscreen_request(), FullscreenRequest::Enter);
    assert!(!ctrl.state.fullscreen);
}

#[test]
fn viewer_config_rejects_malformed_input() {
    assert!(ViewerConfig::new("/x.mp4", 0, 7.0).is_err());
    assert!(ViewerConfig::new("/x.mp4", 72, 0.0).is_err());
    assert!(ViewerConfig::new("/x.mp4", 72, -3.0).is_err());
    assert!(ViewerConfig::new("/x.mp4", 72, f64::NAN).is_err());
    assert!(ViewerConfig::new("/x.mp4", 72, f64::INFINITY).is_err());
}

#[test]
fn time_per_frame_partitions_the_duration() {
    let config = ViewerConfig::new("/goggle.mp4", 72, 7.0).unwrap();
    assert!((config.time_per_frame() - 7.0 / 72.0).abs() < 1e-12);
}

#[test]
fn initial_seek_command_targets_frame_zero() {
    let ctrl = goggles();
    assert_eq!(ctrl.seek_command().time_seconds, 0.0);
}
