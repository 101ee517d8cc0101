//! Release velocity estimation for drag sessions.
//!
//! Impulse strategy: velocity is derived from the kinetic energy the pointer
//! samples impart, which tolerates jittery input better than a plain
//! least-squares fit.

use crate::gesture_constants::MAX_FLING_VELOCITY;

const HISTORY_SIZE: usize = 20;

/// Only samples within this window contribute.
const HORIZON_MS: i64 = 100;

/// A gap longer than this between samples means the pointer stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: i64,
    value: f32,
}

/// One-dimensional velocity tracker over a ring of recent samples.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
    /// Samples are deltas rather than absolute positions.
    differential: bool,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    /// Tracker fed with absolute positions.
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
            differential: false,
        }
    }

    /// Tracker fed with per-event deltas.
    pub fn differential() -> Self {
        Self {
            differential: true,
            ..Self::new()
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, value: f32) {
        if !value.is_finite() {
            log::warn!("dropping non-finite velocity sample {value}");
            return;
        }
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, value });
    }

    /// Samples that still matter, newest first, with their age in ms (<= 0).
    fn recent(&self) -> Vec<(f32, f32)> {
        let Some(newest) = self.samples[self.newest] else {
            return Vec::new();
        };
        let mut recent = Vec::with_capacity(HISTORY_SIZE);
        let mut previous = newest;
        for step in 0..HISTORY_SIZE {
            let index = (self.newest + HISTORY_SIZE - step) % HISTORY_SIZE;
            let Some(sample) = self.samples[index] else {
                break;
            };
            let age = newest.time_ms - sample.time_ms;
            let gap = (sample.time_ms - previous.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            if self.differential {
                previous = sample;
            }
            recent.push((sample.value, -(age as f32)));
        }
        recent
    }

    /// Velocity in units per second; `0` with fewer than two usable samples.
    pub fn calculate_velocity(&self) -> f32 {
        let recent = self.recent();
        if recent.len() < 2 {
            return 0.0;
        }
        impulse_velocity(&recent, self.differential) * 1000.0
    }

    /// Velocity clamped to `±max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.calculate_velocity();
        if !velocity.is_finite() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    /// Velocity clamped to [`MAX_FLING_VELOCITY`].
    pub fn release_velocity(&self) -> f32 {
        self.calculate_velocity_with_max(MAX_FLING_VELOCITY)
    }
}

/// `samples` is newest first as `(value, time)`; returns units per ms.
fn impulse_velocity(samples: &[(f32, f32)], differential: bool) -> f32 {
    let oldest = samples.len() - 1;
    let mut work = 0.0f32;
    for i in (1..=oldest).rev() {
        let (value, time) = samples[i];
        let (next_value, next_time) = samples[i - 1];
        if time == next_time {
            continue;
        }
        let delta = if differential {
            -next_value
        } else {
            value - next_value
        };
        let v_curr = delta / (time - next_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }
    kinetic_energy_to_velocity(work)
}

/// `E = ½·m·v²` with `m = 1`.
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_returns_zero() {
        assert_eq!(VelocityTracker1D::new().calculate_velocity(), 0.0);
    }

    #[test]
    fn single_point_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn constant_motion_is_measured() {
        let mut tracker = VelocityTracker1D::new();
        for step in 0..4 {
            tracker.add_data_point(step * 10, step as f32 * 100.0);
        }
        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 10_000.0).abs() < 1_000.0,
            "expected ~10000 px/s, got {velocity}"
        );
    }

    #[test]
    fn differential_samples_match_absolute() {
        let mut tracker = VelocityTracker1D::differential();
        for step in 0..6 {
            tracker.add_data_point(step * 10, 20.0);
        }
        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 2_000.0).abs() < 300.0,
            "expected ~2000 px/s, got {velocity}"
        );
    }

    #[test]
    fn backwards_motion_is_negative() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 300.0);
        tracker.add_data_point(10, 200.0);
        tracker.add_data_point(20, 100.0);
        assert!(tracker.calculate_velocity() < 0.0);
    }

    #[test]
    fn release_velocity_is_capped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(1, 10_000.0);
        assert_eq!(tracker.release_velocity(), MAX_FLING_VELOCITY);

        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 10_000.0);
        tracker.add_data_point(1, 0.0);
        assert_eq!(tracker.release_velocity(), -MAX_FLING_VELOCITY);
    }

    #[test]
    fn pause_before_release_reads_as_stopped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(ASSUME_STOPPED_MS + 1, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn non_finite_samples_are_dropped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, f32::NAN);
        tracker.add_data_point(20, 100.0);
        assert!(tracker.calculate_velocity().is_finite());
    }
}
