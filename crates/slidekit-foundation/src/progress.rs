use crate::anchors::AnchorBounds;

/// Positional fraction of `offset` along the track, in `[0, 1]`.
///
/// Measured from [`Anchor::Start`](crate::Anchor::Start) regardless of which
/// anchor the thumb last settled at. Degenerate bounds and non-finite offsets
/// yield `0`.
pub fn progress(offset: f32, bounds: AnchorBounds) -> f32 {
    let travel = bounds.travel();
    if travel <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    ((offset - bounds.start()) / travel).clamp(0.0, 1.0)
}
