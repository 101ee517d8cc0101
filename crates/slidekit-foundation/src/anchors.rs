//! Resting positions of the thumb and the track geometry they derive from.

use slidekit_graphics::Density;

use crate::config::SlideConfig;

/// One of the two resting positions of the thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Start,
    End,
}

/// Measured track dimensions in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub track_width_px: f32,
    pub thumb_diameter_px: f32,
    pub horizontal_padding_px: f32,
}

impl TrackGeometry {
    pub fn new(track_width_px: f32, thumb_diameter_px: f32, horizontal_padding_px: f32) -> Self {
        Self {
            track_width_px,
            thumb_diameter_px,
            horizontal_padding_px,
        }
    }

    /// Geometry for a track of `width_px` using the configured thumb and padding.
    pub fn from_width(width_px: f32, config: &SlideConfig, density: Density) -> Self {
        Self {
            track_width_px: width_px,
            thumb_diameter_px: config.thumb_size.to_px(density),
            horizontal_padding_px: config.horizontal_padding.to_px(density),
        }
    }

    /// Distance the thumb can travel. Never negative, zero for non-finite input.
    pub fn travel_px(&self) -> f32 {
        let travel =
            self.track_width_px - 2.0 * self.horizontal_padding_px - self.thumb_diameter_px;
        if travel.is_finite() {
            travel.max(0.0)
        } else {
            0.0
        }
    }
}

/// Track-local offsets of [`Anchor::Start`] and [`Anchor::End`].
///
/// Always satisfies `end >= start` with both values finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorBounds {
    start: f32,
    end: f32,
}

impl AnchorBounds {
    /// Builds bounds, collapsing `end` onto `start` when the range is inverted.
    pub fn new(start: f32, end: f32) -> Self {
        let start = if start.is_finite() {
            start
        } else {
            log::warn!("non-finite start anchor {start}; using 0");
            0.0
        };
        let end = if end.is_finite() {
            end
        } else {
            log::warn!("non-finite end anchor {end}; collapsing onto start");
            start
        };
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn from_geometry(geometry: TrackGeometry) -> Self {
        Self::new(0.0, geometry.travel_px())
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn offset_of(&self, anchor: Anchor) -> f32 {
        match anchor {
            Anchor::Start => self.start,
            Anchor::End => self.end,
        }
    }

    pub fn travel(&self) -> f32 {
        self.end - self.start
    }

    /// Both anchors share one offset.
    pub fn is_degenerate(&self) -> bool {
        self.travel() <= 0.0
    }

    /// Clamps `offset` into `[start, end]`; non-finite offsets map to `start`.
    pub fn clamp(&self, offset: f32) -> f32 {
        if offset.is_finite() {
            offset.clamp(self.start, self.end)
        } else {
            self.start
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_graphics::Dp;

    #[test]
    fn end_anchor_subtracts_padding_and_thumb() {
        let geometry = TrackGeometry::new(300.0, 40.0, 10.0);
        let bounds = AnchorBounds::from_geometry(geometry);
        assert_eq!(bounds.start(), 0.0);
        assert_eq!(bounds.end(), 240.0);
        assert_eq!(bounds.offset_of(Anchor::End), 240.0);
    }

    #[test]
    fn narrow_track_collapses_anchors() {
        let bounds = AnchorBounds::from_geometry(TrackGeometry::new(30.0, 40.0, 10.0));
        assert!(bounds.is_degenerate());
        assert_eq!(bounds.start(), bounds.end());

        let zero = AnchorBounds::from_geometry(TrackGeometry::new(0.0, 40.0, 10.0));
        assert_eq!(zero.travel(), 0.0);
    }

    #[test]
    fn inverted_and_invalid_bounds_are_sanitized() {
        let inverted = AnchorBounds::new(50.0, 10.0);
        assert_eq!(inverted.end(), 50.0);

        let nan = AnchorBounds::new(f32::NAN, f32::INFINITY);
        assert_eq!(nan.start(), 0.0);
        assert_eq!(nan.end(), 0.0);

        let geometry = TrackGeometry::new(f32::NAN, 40.0, 10.0);
        assert_eq!(geometry.travel_px(), 0.0);
    }

    #[test]
    fn clamp_guards_non_finite_offsets() {
        let bounds = AnchorBounds::new(0.0, 100.0);
        assert_eq!(bounds.clamp(150.0), 100.0);
        assert_eq!(bounds.clamp(-5.0), 0.0);
        assert_eq!(bounds.clamp(f32::NAN), 0.0);
    }

    #[test]
    fn geometry_from_width_uses_density() {
        let config = SlideConfig::default()
            .with_thumb_size(Dp(40.0))
            .with_horizontal_padding(Dp(10.0));
        let geometry = TrackGeometry::from_width(600.0, &config, Density::new(2.0));
        assert_eq!(geometry.thumb_diameter_px, 80.0);
        assert_eq!(geometry.horizontal_padding_px, 20.0);
        assert_eq!(geometry.travel_px(), 480.0);
    }
}
