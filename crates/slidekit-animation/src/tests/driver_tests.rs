use super::*;

use crate::{AnimationSpec, SplineBasedDecaySpec};

const FRAME: u64 = 16_666_667;

fn run_to_completion(driver: &mut AnimationDriver, mut time: u64) -> (Vec<f32>, Option<RunId>) {
    let mut values = Vec::new();
    for _ in 0..600 {
        match driver.tick(time) {
            DriverTick::Idle => return (values, None),
            DriverTick::Running { value, .. } => values.push(value),
            DriverTick::Completed { run, value } => {
                values.push(value);
                return (values, Some(run));
            }
        }
        time += FRAME;
    }
    panic!("animation never completed");
}

#[test]
fn snap_reaches_target_and_completes_once() {
    let mut driver = AnimationDriver::new();
    let run = driver.animate(0.0, 200.0, MotionStyle::Snap(AnimationSpec::default()));

    let (values, completed) = run_to_completion(&mut driver, 0);
    assert_eq!(completed, Some(run));
    assert_eq!(values.first().copied(), Some(0.0));
    assert_eq!(values.last().copied(), Some(200.0));
    assert!(values.windows(2).all(|pair| pair[1] >= pair[0]));

    assert_eq!(driver.tick(10 * FRAME * 60), DriverTick::Idle);
    assert!(!driver.is_running());
}

#[test]
fn new_run_supersedes_without_completion() {
    let mut driver = AnimationDriver::new();
    let first = driver.animate(0.0, 200.0, MotionStyle::Snap(AnimationSpec::linear(100)));
    let _ = driver.tick(0);
    let _ = driver.tick(FRAME);

    let second = driver.animate(50.0, 0.0, MotionStyle::Snap(AnimationSpec::linear(100)));
    assert_ne!(first, second);

    let (_, completed) = run_to_completion(&mut driver, 2 * FRAME);
    assert_eq!(completed, Some(second), "only the latest run may complete");
}

#[test]
fn cancel_drops_the_run() {
    let mut driver = AnimationDriver::new();
    let run = driver.animate(0.0, 10.0, MotionStyle::Snap(AnimationSpec::linear(100)));
    assert_eq!(driver.current_run(), Some(run));
    assert_eq!(driver.target(), Some(10.0));

    assert_eq!(driver.cancel(), Some(run));
    assert_eq!(driver.tick(0), DriverTick::Idle);
    assert_eq!(driver.cancel(), None);
}

#[test]
fn decay_run_stops_exactly_on_target() {
    let mut driver = AnimationDriver::new();
    let style = MotionStyle::Decay {
        velocity: 3_000.0,
        decay: SplineBasedDecaySpec::new(1.0),
        fallback: AnimationSpec::default(),
    };
    driver.animate(90.0, 200.0, style);

    let (values, completed) = run_to_completion(&mut driver, 0);
    assert!(completed.is_some());
    assert!(values.iter().all(|value| *value <= 200.0), "decay must not overshoot");
    assert_eq!(values.last().copied(), Some(200.0));
}

#[test]
fn decay_away_from_target_falls_back_to_tween() {
    let mut driver = AnimationDriver::new();
    let style = MotionStyle::Decay {
        velocity: -3_000.0,
        decay: SplineBasedDecaySpec::new(1.0),
        fallback: AnimationSpec::linear(100),
    };
    driver.animate(120.0, 200.0, style);

    let (values, completed) = run_to_completion(&mut driver, 0);
    assert!(completed.is_some());
    assert!(values.iter().all(|value| *value >= 120.0));
    assert_eq!(values.last().copied(), Some(200.0));
}

#[test]
fn unbounded_decay_projection_falls_back_to_tween() {
    let mut driver = AnimationDriver::new();
    let style = MotionStyle::Decay {
        velocity: f32::MAX,
        decay: SplineBasedDecaySpec::new(1.0),
        fallback: AnimationSpec::linear(100),
    };
    driver.animate(0.0, 200.0, style);

    let (values, completed) = run_to_completion(&mut driver, 0);
    assert!(completed.is_some());
    assert!(values.iter().all(|value| value.is_finite()));
    assert_eq!(values.last().copied(), Some(200.0));
}

#[test]
fn non_finite_start_snaps_to_target() {
    let mut driver = AnimationDriver::new();
    driver.animate(f32::NAN, 40.0, MotionStyle::Snap(AnimationSpec::linear(50)));
    match driver.tick(0) {
        DriverTick::Running { value, .. } | DriverTick::Completed { value, .. } => {
            assert_eq!(value, 40.0)
        }
        DriverTick::Idle => panic!("run should be active"),
    }
}
