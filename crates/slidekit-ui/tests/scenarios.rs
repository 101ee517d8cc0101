//! End-to-end scenarios driven through pointer events and the frame runtime.

use slidekit_foundation::{Anchor, GesturePhase, SlideConfig, ACCENT};
use slidekit_graphics::Density;
use slidekit_testing::{GateEvent, GateRecorder, SlideRobot};
use slidekit_ui::ThumbIcon;

/// 260px track at baseline density: 40px thumb, 10px padding, 200px travel.
const WIDTH: f32 = 260.0;

#[test]
fn full_swipe_commits_once() {
    let mut robot = SlideRobot::new(WIDTH);
    assert_eq!(robot.travel_px(), 200.0);

    robot.slow_swipe(20.0, 240.0, 300);
    robot.wait_for_idle();

    assert_eq!(robot.phase(), GesturePhase::Idle(Anchor::End));
    let frame = robot.frame();
    assert_eq!(frame.thumb_offset_px, 200);
    assert_eq!(frame.progress, 1.0);
    assert_eq!(frame.track_color, ACCENT);
    assert_eq!(frame.hint_color.a(), 0.0);
    assert_eq!(
        robot.recorder().events(),
        vec![GateEvent::Haptic, GateEvent::Commit],
        "haptic pulse precedes the commit callback"
    );

    robot.advance_time(500);
    assert_eq!(robot.recorder().commits(), 1);
}

#[test]
fn partial_swipe_settles_back_without_commit() {
    let mut robot = SlideRobot::new(WIDTH);
    robot.press(20.0);
    robot.move_by_steps(88.0, 200);
    assert_eq!(robot.offset(), 60);
    robot.advance_time(200);
    robot.release();

    assert_eq!(robot.phase(), GesturePhase::Settling(Anchor::Start));
    robot.wait_for_idle();
    assert_eq!(robot.offset(), 0);
    assert_eq!(robot.frame().progress, 0.0);
    assert!(robot.recorder().events().is_empty());
}

#[test]
fn fast_fling_commits_below_positional_threshold() {
    let mut robot = SlideRobot::new(WIDTH);
    robot.press(20.0);
    robot.move_by_steps(118.0, 50);
    assert_eq!(robot.offset(), 90);
    robot.release();

    assert_eq!(robot.slide().inspect(|machine| machine.target_anchor()), Anchor::End);
    robot.wait_for_idle();
    assert_eq!(robot.offset(), 200);
    assert_eq!(robot.recorder().commits(), 1);
}

#[test]
fn busy_moves_to_end_and_disables_input() {
    let mut robot = SlideRobot::new(WIDTH);
    robot.set_busy(true);
    assert!(!robot.slide().is_enabled());
    assert!(!robot.press(20.0), "press ignored while busy");

    robot.wait_for_idle();
    let frame = robot.frame();
    assert_eq!(frame.thumb_offset_px, 200);
    assert_eq!(frame.thumb_icon, ThumbIcon::Spinner);
    assert_eq!(robot.recorder().commits(), 0, "busy arrival is not a commit");
}

#[test]
fn busy_arrival_commits_when_configured() {
    let config = SlideConfig::default().with_commit_on_external_settle(true);
    let mut robot = SlideRobot::with_config(WIDTH, config, Density::BASELINE, false);
    robot.set_busy(true);
    robot.wait_for_idle();
    assert_eq!(robot.recorder().commits(), 1);
    assert_eq!(robot.recorder().haptics(), 1);
}

#[test]
fn clearing_busy_returns_to_start_without_commit() {
    let mut robot = SlideRobot::with_config(WIDTH, SlideConfig::default(), Density::BASELINE, true);
    assert_eq!(robot.offset(), 200);
    assert!(!robot.slide().is_enabled());

    robot.set_busy(false);
    assert!(robot.slide().is_enabled());
    robot.wait_for_idle();
    assert_eq!(robot.offset(), 0);
    assert_eq!(robot.frame().thumb_icon, ThumbIcon::Arrow);
    assert!(robot.recorder().events().is_empty());
}

#[test]
fn loading_cycle_allows_a_second_commit() {
    let mut robot = SlideRobot::busy_on_commit(WIDTH, SlideConfig::default());

    robot.slow_swipe(20.0, 240.0, 300);
    robot.wait_for_idle();
    assert_eq!(robot.recorder().commits(), 1);
    assert!(!robot.slide().is_enabled(), "host went busy from the callback");

    robot.advance_time(2_000);
    robot.set_busy(false);
    robot.wait_for_idle();
    assert_eq!(robot.offset(), 0);
    assert_eq!(robot.recorder().commits(), 1);

    robot.slow_swipe(20.0, 240.0, 300);
    robot.wait_for_idle();
    assert_eq!(robot.recorder().commits(), 2);
}

#[test]
fn busy_toggle_reverses_direction() {
    let mut robot = SlideRobot::new(WIDTH);
    robot.slow_swipe(20.0, 100.0, 200);
    robot.advance_frame();
    robot.advance_frame();
    assert_eq!(robot.phase(), GesturePhase::Settling(Anchor::Start));

    robot.set_busy(true);
    assert_eq!(robot.phase(), GesturePhase::Settling(Anchor::End));
    robot.advance_time(100);
    let before = robot.offset();

    robot.set_busy(false);
    assert_eq!(robot.phase(), GesturePhase::Settling(Anchor::Start));
    robot.advance_time(100);
    assert!(robot.offset() < before);

    robot.wait_for_idle();
    assert_eq!(robot.offset(), 0);
    assert_eq!(robot.recorder().commits(), 0);
}

#[test]
fn vetoed_swipe_returns_to_start() {
    let mut robot = SlideRobot::with_gate(
        WIDTH,
        SlideConfig::default(),
        Density::BASELINE,
        false,
        GateRecorder::vetoing_gate,
    );
    robot.slow_swipe(20.0, 240.0, 300);
    assert_eq!(robot.phase(), GesturePhase::Settling(Anchor::Start));
    robot.wait_for_idle();
    assert_eq!(robot.offset(), 0);
    assert!(robot.recorder().events().is_empty());
}

#[test]
fn resizing_to_zero_mid_drag_keeps_offset_in_bounds() {
    let mut robot = SlideRobot::new(WIDTH);
    robot.press(20.0);
    robot.move_by_steps(150.0, 100);
    assert!(robot.offset() > 0);

    robot.resize(0.0);
    assert_eq!(robot.offset(), 0);
    assert_eq!(robot.frame().progress, 0.0);

    robot.move_to(200.0);
    assert_eq!(robot.offset(), 0);
    robot.release();
    robot.wait_for_idle();

    robot.resize(WIDTH);
    assert_eq!(robot.phase(), GesturePhase::Idle(Anchor::Start));
    assert_eq!(robot.offset(), 0);
    assert_eq!(robot.recorder().commits(), 0);
}

#[test]
fn resizing_mid_settle_lands_on_new_end() {
    let mut robot = SlideRobot::new(WIDTH);
    robot.slow_swipe(20.0, 188.0, 200);
    robot.advance_frame();
    assert_eq!(robot.phase(), GesturePhase::Settling(Anchor::End));

    robot.resize(200.0);
    assert!(robot.offset() <= 140);
    robot.wait_for_idle();
    assert_eq!(robot.offset(), 140);
    assert_eq!(robot.recorder().commits(), 1);
}

#[test]
fn cancelled_pointer_settles_by_position() {
    let mut robot = SlideRobot::new(WIDTH);
    robot.press(20.0);
    robot.move_by_steps(200.0, 300);
    robot.advance_time(200);
    robot.cancel();
    robot.wait_for_idle();
    assert_eq!(robot.offset(), 200);
    assert_eq!(robot.recorder().commits(), 1);
}

#[test]
fn density_scales_geometry_and_threshold() {
    let mut robot =
        SlideRobot::with_config(520.0, SlideConfig::default(), Density::new(2.0), false);
    assert_eq!(robot.travel_px(), 400.0);

    // 45% of travel, released slowly: not enough.
    robot.slow_swipe(40.0, 228.0, 300);
    robot.wait_for_idle();
    assert_eq!(robot.offset(), 0);
    assert_eq!(robot.recorder().commits(), 0);
}
