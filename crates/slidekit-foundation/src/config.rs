//! Tunables for the slide gesture.

use slidekit_animation::{AnimationSpec, FlingCalculator};
use slidekit_graphics::Dp;

/// Gesture and layout tunables. Builder-style, `Copy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideConfig {
    /// Fraction of the travel distance a slow release must pass to settle at End.
    pub positional_threshold: f32,
    /// Release speed, in dp per second, below which velocity is ignored.
    pub velocity_threshold: Dp,
    /// Tween used for slow releases and host-driven transitions.
    pub snap_spec: AnimationSpec,
    /// Friction of the fling decay.
    pub friction: f32,
    /// Whether a busy-driven arrival at End also fires the commit side effects.
    pub commit_on_external_settle: bool,
    pub thumb_size: Dp,
    pub horizontal_padding: Dp,
    pub track_height: Dp,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            positional_threshold: 0.5,
            velocity_threshold: Dp(125.0),
            snap_spec: AnimationSpec::default(),
            friction: FlingCalculator::DEFAULT_FRICTION,
            commit_on_external_settle: false,
            thumb_size: Dp(40.0),
            horizontal_padding: Dp(10.0),
            track_height: Dp(56.0),
        }
    }
}

impl SlideConfig {
    pub fn with_positional_threshold(mut self, fraction: f32) -> Self {
        self.positional_threshold = fraction;
        self
    }

    pub fn with_velocity_threshold(mut self, threshold: Dp) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    pub fn with_snap_spec(mut self, spec: AnimationSpec) -> Self {
        self.snap_spec = spec;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_commit_on_external_settle(mut self, enabled: bool) -> Self {
        self.commit_on_external_settle = enabled;
        self
    }

    pub fn with_thumb_size(mut self, size: Dp) -> Self {
        self.thumb_size = size;
        self
    }

    pub fn with_horizontal_padding(mut self, padding: Dp) -> Self {
        self.horizontal_padding = padding;
        self
    }

    pub fn with_track_height(mut self, height: Dp) -> Self {
        self.track_height = height;
        self
    }

    /// Reports the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.positional_threshold;
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(ConfigError::PositionalThreshold(threshold));
        }
        let velocity = self.velocity_threshold.0;
        if !(velocity.is_finite() && velocity >= 0.0) {
            return Err(ConfigError::VelocityThreshold(velocity));
        }
        if !(self.friction.is_finite() && self.friction > 0.0) {
            return Err(ConfigError::Friction(self.friction));
        }
        for (name, value) in [
            ("thumb_size", self.thumb_size.0),
            ("horizontal_padding", self.horizontal_padding.0),
            ("track_height", self.track_height.0),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Dimension { name, value });
            }
        }
        Ok(())
    }

    /// Copy with every out-of-range field replaced by its default.
    pub fn sanitized(self) -> Self {
        if self.validate().is_ok() {
            return self;
        }
        let defaults = Self::default();
        let mut fixed = self;
        while let Err(error) = fixed.validate() {
            log::warn!("slide config: {error}; using default");
            match error {
                ConfigError::PositionalThreshold(_) => {
                    fixed.positional_threshold = defaults.positional_threshold
                }
                ConfigError::VelocityThreshold(_) => {
                    fixed.velocity_threshold = defaults.velocity_threshold
                }
                ConfigError::Friction(_) => fixed.friction = defaults.friction,
                ConfigError::Dimension { name, .. } => match name {
                    "thumb_size" => fixed.thumb_size = defaults.thumb_size,
                    "horizontal_padding" => fixed.horizontal_padding = defaults.horizontal_padding,
                    _ => fixed.track_height = defaults.track_height,
                },
            }
        }
        fixed
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    PositionalThreshold(f32),
    VelocityThreshold(f32),
    Friction(f32),
    Dimension { name: &'static str, value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::PositionalThreshold(value) => {
                write!(f, "positional threshold {value} outside (0, 1)")
            }
            ConfigError::VelocityThreshold(value) => {
                write!(f, "velocity threshold {value}dp/s must be finite and >= 0")
            }
            ConfigError::Friction(value) => write!(f, "friction {value} must be finite and > 0"),
            ConfigError::Dimension { name, value } => {
                write!(f, "{name} {value}dp must be finite and >= 0")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
