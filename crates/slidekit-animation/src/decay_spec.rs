//! Spline-based decay used to project and animate flings.
//!
//! Models the Android scroller deceleration curve: a released thumb carrying
//! velocity travels a finite distance over a finite time, both derived from
//! the release speed, the friction and the display density.

use std::sync::LazyLock;

const INFLECTION: f32 = 0.35;
const START_TENSION: f32 = 0.5;
const END_TENSION: f32 = 1.0;
const P1: f32 = START_TENSION * INFLECTION;
const P2: f32 = 1.0 - END_TENSION * (1.0 - INFLECTION);

const NB_SAMPLES: usize = 100;

const GRAVITY_EARTH: f32 = 9.80665;
const INCHES_PER_METER: f32 = 39.37;
/// `(ln(0.78) / ln(0.9)).abs()`
const DECELERATION_RATE: f32 = 2.358_201_6;

/// Distance coefficients sampled along normalized fling time.
static SPLINE_POSITIONS: LazyLock<[f32; NB_SAMPLES + 1]> = LazyLock::new(|| {
    let mut positions = [0.0f32; NB_SAMPLES + 1];
    let mut x_min = 0.0f32;

    for (i, slot) in positions.iter_mut().take(NB_SAMPLES).enumerate() {
        let alpha = i as f32 / NB_SAMPLES as f32;
        let mut x_max = 1.0f32;
        loop {
            let x = x_min + (x_max - x_min) / 2.0;
            let coef = 3.0 * x * (1.0 - x);
            let tx = coef * ((1.0 - x) * P1 + x * P2) + x * x * x;
            if (tx - alpha).abs() < 1e-5 {
                *slot = coef * ((1.0 - x) * START_TENSION + x) + x * x * x;
                break;
            }
            if tx > alpha {
                x_max = x;
            } else {
                x_min = x;
            }
        }
    }

    positions[NB_SAMPLES] = 1.0;
    positions
});

/// Result of sampling the fling spline.
#[derive(Debug, Clone, Copy)]
pub struct FlingResult {
    /// Fraction of the total distance covered, `0.0..=1.0`.
    pub distance_coefficient: f32,
    /// Slope of the distance curve at the sampled time.
    pub velocity_coefficient: f32,
}

/// Android fling spline.
pub struct AndroidFlingSpline;

impl AndroidFlingSpline {
    /// Sample the spline at a normalized time (0.0 to 1.0).
    pub fn fling_position(time: f32) -> FlingResult {
        let clamped_time = if time.is_nan() {
            1.0
        } else {
            time.clamp(0.0, 1.0)
        };
        let index = (NB_SAMPLES as f32 * clamped_time) as usize;
        if index >= NB_SAMPLES {
            return FlingResult {
                distance_coefficient: 1.0,
                velocity_coefficient: 0.0,
            };
        }

        let t_inf = index as f32 / NB_SAMPLES as f32;
        let t_sup = (index + 1) as f32 / NB_SAMPLES as f32;
        let d_inf = SPLINE_POSITIONS[index];
        let d_sup = SPLINE_POSITIONS[index + 1];
        let slope = (d_sup - d_inf) / (t_sup - t_inf);
        FlingResult {
            distance_coefficient: d_inf + (clamped_time - t_inf) * slope,
            velocity_coefficient: slope,
        }
    }

    /// Log-deceleration for a speed under the given effective friction.
    pub fn deceleration(velocity: f32, friction: f32) -> f64 {
        (INFLECTION as f64 * velocity.abs() as f64 / friction as f64).ln()
    }
}

/// Distance, duration and direction of one fling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingInfo {
    /// Signed initial velocity in px/sec.
    pub initial_velocity: f32,
    /// Unsigned total distance in px.
    pub distance: f32,
    /// Total duration in milliseconds.
    pub duration_millis: i64,
}

impl FlingInfo {
    fn spline_time(&self, time_ms: i64) -> f32 {
        if self.duration_millis > 0 {
            time_ms as f32 / self.duration_millis as f32
        } else {
            1.0
        }
    }

    /// Signed displacement after `time_ms`.
    pub fn position(&self, time_ms: i64) -> f32 {
        self.distance
            * self.initial_velocity.signum()
            * AndroidFlingSpline::fling_position(self.spline_time(time_ms)).distance_coefficient
    }
}

/// Physical fling model parameterized by friction and density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingCalculator {
    friction: f32,
    physical_coefficient: f32,
}

impl FlingCalculator {
    /// Android's `ViewConfiguration.getScrollFriction()`.
    pub const DEFAULT_FRICTION: f32 = 0.015;

    /// `density` is physical pixels per dp.
    pub fn new(friction: f32, density: f32) -> Self {
        let friction = if friction.is_finite() && friction > 0.0 {
            friction
        } else {
            log::warn!("invalid fling friction {friction}; using default");
            Self::DEFAULT_FRICTION
        };
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            1.0
        };
        Self {
            friction,
            physical_coefficient: GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * 0.84,
        }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn log_deceleration(&self, velocity: f32) -> f64 {
        AndroidFlingSpline::deceleration(velocity, self.friction * self.physical_coefficient)
    }

    /// Duration of a fling in milliseconds. Zero for a still release.
    pub fn fling_duration(&self, velocity: f32) -> i64 {
        if !velocity.is_finite() || velocity == 0.0 {
            return 0;
        }
        let l = self.log_deceleration(velocity);
        (1000.0 * (l / (DECELERATION_RATE as f64 - 1.0)).exp()) as i64
    }

    /// Unsigned distance a fling travels before coming to rest.
    pub fn fling_distance(&self, velocity: f32) -> f32 {
        if !velocity.is_finite() || velocity == 0.0 {
            return 0.0;
        }
        let l = self.log_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE as f64 - 1.0;
        self.friction
            * self.physical_coefficient
            * (DECELERATION_RATE as f64 / decel_minus_one * l).exp() as f32
    }

    pub fn fling_info(&self, velocity: f32) -> FlingInfo {
        FlingInfo {
            initial_velocity: velocity,
            distance: self.fling_distance(velocity),
            duration_millis: self.fling_duration(velocity),
        }
    }
}

/// Velocity-seeded animation with no fixed target.
pub trait DecayAnimationSpec {
    /// Position after `play_time_nanos`.
    fn value_at(&self, play_time_nanos: u64, initial_value: f32, initial_velocity: f32) -> f32;

    /// Time until the decay comes to rest.
    fn duration_nanos(&self, initial_velocity: f32) -> u64;

    /// Where a value released at `initial_value` with `initial_velocity` stops.
    fn target_value(&self, initial_value: f32, initial_velocity: f32) -> f32;
}

/// Spline-based decay matching Android fling behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineBasedDecaySpec {
    calculator: FlingCalculator,
}

impl SplineBasedDecaySpec {
    pub fn new(density: f32) -> Self {
        Self {
            calculator: FlingCalculator::with_density(density),
        }
    }

    pub fn with_calculator(calculator: FlingCalculator) -> Self {
        Self { calculator }
    }

    /// Signed distance travelled by a release at `velocity`.
    pub fn project(&self, velocity: f32) -> f32 {
        self.calculator.fling_distance(velocity) * velocity.signum()
    }
}

impl DecayAnimationSpec for SplineBasedDecaySpec {
    fn value_at(&self, play_time_nanos: u64, initial_value: f32, initial_velocity: f32) -> f32 {
        if !initial_velocity.is_finite() || initial_velocity == 0.0 {
            return initial_value;
        }
        let time_ms = (play_time_nanos / 1_000_000) as i64;
        initial_value + self.calculator.fling_info(initial_velocity).position(time_ms)
    }

    fn duration_nanos(&self, initial_velocity: f32) -> u64 {
        (self.calculator.fling_duration(initial_velocity).max(0) as u64).saturating_mul(1_000_000)
    }

    fn target_value(&self, initial_value: f32, initial_velocity: f32) -> f32 {
        initial_value + self.project(initial_velocity)
    }
}
