//! Release-time anchor choice: snap by distance, fling by velocity projection.

use slidekit_animation::{FlingCalculator, SplineBasedDecaySpec};
use slidekit_graphics::Density;

use crate::anchors::{Anchor, AnchorBounds};
use crate::config::SlideConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdDecision {
    positional_threshold: f32,
    /// px per second.
    velocity_threshold: f32,
    decay: SplineBasedDecaySpec,
}

impl ThresholdDecision {
    pub fn new(config: &SlideConfig, density: Density) -> Self {
        Self {
            positional_threshold: config.positional_threshold,
            velocity_threshold: config.velocity_threshold.to_px(density),
            decay: SplineBasedDecaySpec::with_calculator(FlingCalculator::new(
                config.friction,
                density.scale(),
            )),
        }
    }

    pub fn velocity_threshold_px(&self) -> f32 {
        self.velocity_threshold
    }

    pub fn decay(&self) -> SplineBasedDecaySpec {
        self.decay
    }

    /// Whether `velocity` is fast enough to be treated as a fling.
    pub fn is_fling(&self, velocity: f32) -> bool {
        velocity.is_finite() && velocity != 0.0 && velocity.abs() >= self.velocity_threshold
    }

    /// Where the thumb would come to rest if released at `offset` with `velocity`.
    ///
    /// Releases slower than the velocity threshold do not project.
    pub fn projected_stop(&self, offset: f32, velocity: f32) -> f32 {
        if self.is_fling(velocity) {
            offset + self.decay.project(velocity)
        } else {
            offset
        }
    }

    /// Picks the anchor to settle at. Exactly on the threshold resolves to Start.
    pub fn decide(&self, offset: f32, velocity: f32, bounds: AnchorBounds) -> Anchor {
        if bounds.is_degenerate() {
            return Anchor::Start;
        }
        let offset = bounds.clamp(offset);
        let threshold = bounds.start() + bounds.travel() * self.positional_threshold;
        let stop = self.projected_stop(offset, velocity);
        let decided = if stop > threshold {
            Anchor::End
        } else {
            Anchor::Start
        };
        log::debug!(
            "release at {offset:.1}px with {velocity:.0}px/s projects to {stop:.1}px \
             (threshold {threshold:.1}px) -> {decided:?}"
        );
        decided
    }
}
