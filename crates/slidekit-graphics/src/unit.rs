//! Unit types: Dp, Density, and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: Density) -> f32 {
        self.0 * density.scale()
    }

    pub fn from_px(px: f32, density: Density) -> Self {
        Self(px / density.scale())
    }
}

impl std::ops::Mul<f32> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl std::ops::Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

/// Physical pixels per dp, passed explicitly by the host.
///
/// Non-finite or non-positive scales fall back to `1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density(f32);

impl Density {
    pub const BASELINE: Density = Density(1.0);

    pub fn new(scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            Self(scale)
        } else {
            Self::BASELINE
        }
    }

    pub fn scale(&self) -> f32 {
        self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::BASELINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dp_round_trips_through_density() {
        let density = Density::new(2.5);
        assert_eq!(Dp(40.0).to_px(density), 100.0);
        assert_eq!(Dp::from_px(100.0, density), Dp(40.0));
    }

    #[test]
    fn invalid_density_falls_back_to_baseline() {
        assert_eq!(Density::new(0.0), Density::BASELINE);
        assert_eq!(Density::new(-3.0), Density::BASELINE);
        assert_eq!(Density::new(f32::NAN), Density::BASELINE);
    }

    #[test]
    fn dp_arithmetic() {
        assert_eq!(Dp(10.0) * 2.0 + Dp(40.0), Dp(60.0));
    }
}
