//! Progress-driven presentation values. Pure functions, no caching.

use slidekit_graphics::Color;

/// Track base color at rest (`#111111`).
pub const ALMOST_BLACK: Color = Color::from_argb(0xFF11_1111);
/// Track accent color once the color change completes (`#FFDB00`).
pub const ACCENT: Color = Color::from_argb(0xFFFF_DB00);

/// Progress at which the track reaches [`ACCENT`].
pub const TRACK_COLOR_END: f32 = 0.4;
/// Progress at which the hint label is fully transparent.
pub const HINT_FADE_END: f32 = 0.35;

fn ramp(progress: f32, end: f32) -> f32 {
    if progress.is_nan() {
        return 0.0;
    }
    (progress / end).clamp(0.0, 1.0)
}

pub fn track_color(progress: f32) -> Color {
    ALMOST_BLACK.lerp(ACCENT, ramp(progress, TRACK_COLOR_END))
}

/// Opacity of the hint label: `1` at rest, `0` from [`HINT_FADE_END`] on.
pub fn hint_opacity(progress: f32) -> f32 {
    1.0 - ramp(progress, HINT_FADE_END)
}

pub fn hint_color(progress: f32) -> Color {
    Color::WHITE.with_alpha(hint_opacity(progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_color_reaches_accent_at_forty_percent() {
        assert_eq!(track_color(0.0), ALMOST_BLACK);
        assert_eq!(track_color(TRACK_COLOR_END), ACCENT);
        assert_eq!(track_color(1.0), ACCENT);

        let halfway = track_color(0.2);
        assert!(halfway.r() > ALMOST_BLACK.r() && halfway.r() < ACCENT.r());
    }

    #[test]
    fn hint_fades_out_by_thirty_five_percent() {
        assert_eq!(hint_opacity(0.0), 1.0);
        assert_eq!(hint_opacity(HINT_FADE_END), 0.0);
        assert_eq!(hint_opacity(0.9), 0.0);
        assert!((hint_opacity(0.175) - 0.5).abs() < 1e-6);
        assert_eq!(hint_color(1.0), Color::WHITE.with_alpha(0.0));
    }

    #[test]
    fn hint_opacity_never_increases() {
        let mut previous = f32::INFINITY;
        for step in 0..=100 {
            let opacity = hint_opacity(step as f32 / 100.0);
            assert!(opacity <= previous);
            previous = opacity;
        }
    }

    #[test]
    fn mappings_are_deterministic() {
        for step in 0..=20 {
            let p = step as f32 / 20.0;
            assert_eq!(track_color(p), track_color(p));
            assert_eq!(hint_opacity(p), hint_opacity(p));
        }
        assert_eq!(track_color(f32::NAN), ALMOST_BLACK);
        assert_eq!(hint_opacity(f32::NAN), 1.0);
    }
}
