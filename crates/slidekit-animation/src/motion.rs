//! Pluggable motion curves consumed by the [`AnimationDriver`](crate::AnimationDriver).

use crate::animation::{AnimationSpec, Lerp};
use crate::decay_spec::{DecayAnimationSpec, SplineBasedDecaySpec};

/// A curve from a start value to a target value over play time.
pub trait Motion {
    /// Value after `play_time_nanos` of play time.
    fn value_at(&self, play_time_nanos: u64) -> f32;

    /// Whether the motion has reached its target at `play_time_nanos`.
    fn is_finished_at(&self, play_time_nanos: u64) -> bool;

    /// Value the motion comes to rest at.
    fn target(&self) -> f32;
}

/// Fixed-duration eased tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenMotion {
    from: f32,
    to: f32,
    spec: AnimationSpec,
}

impl TweenMotion {
    pub fn new(from: f32, to: f32, spec: AnimationSpec) -> Self {
        Self { from, to, spec }
    }
}

impl Motion for TweenMotion {
    fn value_at(&self, play_time_nanos: u64) -> f32 {
        if self.is_finished_at(play_time_nanos) {
            return self.to;
        }
        self.from.lerp(&self.to, self.spec.fraction_at(play_time_nanos))
    }

    fn is_finished_at(&self, play_time_nanos: u64) -> bool {
        play_time_nanos >= self.spec.total_nanos()
    }

    fn target(&self) -> f32 {
        self.to
    }
}

/// Velocity-seeded natural deceleration that stops on the target.
///
/// Only constructible when the decay would carry the value at least as far as
/// the target; the value is pinned to the target from the first frame it is
/// crossed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayMotion {
    from: f32,
    to: f32,
    velocity: f32,
    decay: SplineBasedDecaySpec,
}

impl DecayMotion {
    pub fn reaching(
        from: f32,
        to: f32,
        velocity: f32,
        decay: SplineBasedDecaySpec,
    ) -> Option<Self> {
        if !velocity.is_finite() || velocity == 0.0 {
            return None;
        }
        let direction = to - from;
        if direction == 0.0 || direction.signum() != velocity.signum() {
            return None;
        }
        let projected = decay.target_value(from, velocity);
        if !projected.is_finite() {
            return None;
        }
        let reaches = if direction > 0.0 {
            projected >= to
        } else {
            projected <= to
        };
        reaches.then_some(Self {
            from,
            to,
            velocity,
            decay,
        })
    }

    fn crossed(&self, value: f32) -> bool {
        if self.to >= self.from {
            value >= self.to
        } else {
            value <= self.to
        }
    }
}

impl Motion for DecayMotion {
    fn value_at(&self, play_time_nanos: u64) -> f32 {
        let value = self.decay.value_at(play_time_nanos, self.from, self.velocity);
        if self.crossed(value) || play_time_nanos >= self.decay.duration_nanos(self.velocity) {
            self.to
        } else {
            value
        }
    }

    fn is_finished_at(&self, play_time_nanos: u64) -> bool {
        play_time_nanos >= self.decay.duration_nanos(self.velocity)
            || self.crossed(self.decay.value_at(play_time_nanos, self.from, self.velocity))
    }

    fn target(&self) -> f32 {
        self.to
    }
}

/// How a settle animation moves toward its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionStyle {
    /// Fixed-duration eased tween.
    Snap(AnimationSpec),
    /// Release-velocity deceleration; falls back to `fallback` when the decay
    /// would stop short of the target or points away from it.
    Decay {
        velocity: f32,
        decay: SplineBasedDecaySpec,
        fallback: AnimationSpec,
    },
}

impl MotionStyle {
    pub fn into_motion(self, from: f32, to: f32) -> Box<dyn Motion> {
        match self {
            MotionStyle::Snap(spec) => Box::new(TweenMotion::new(from, to, spec)),
            MotionStyle::Decay {
                velocity,
                decay,
                fallback,
            } => match DecayMotion::reaching(from, to, velocity, decay) {
                Some(motion) => Box::new(motion),
                None => {
                    log::trace!("decay from {from} cannot reach {to}; tweening instead");
                    Box::new(TweenMotion::new(from, to, fallback))
                }
            },
        }
    }
}
