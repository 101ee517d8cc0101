//! Shared gesture constants for pointer handling.
//!
//! Values are in physical pixels and are not scaled by density.

/// Pointer travel, in pixels, before a press turns into a drag.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum release velocity in pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Offsets closer than this to a target count as already there.
pub const SETTLE_EPSILON: f32 = 0.01;
