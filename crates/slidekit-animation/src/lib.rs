//! Animation primitives for slidekit.
//!
//! Time-based tweens with easing curves, Android-style spline decay for flings,
//! and the [`AnimationDriver`] that steps a single cancellable run per frame.

mod animation;
mod decay_spec;
mod driver;
mod motion;

pub use animation::{AnimationSpec, Easing, Lerp};
pub use decay_spec::{
    AndroidFlingSpline, DecayAnimationSpec, FlingCalculator, FlingInfo, FlingResult,
    SplineBasedDecaySpec,
};
pub use driver::{AnimationDriver, DriverTick, RunId};
pub use motion::{DecayMotion, Motion, MotionStyle, TweenMotion};
