//! Pure math/data for slidekit presentation values.
//!
//! Colors, points and density-independent units. No rendering happens here;
//! presentation code on the host side consumes these values.

mod color;
mod geometry;
mod unit;

pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::Point;
    pub use crate::unit::{Density, Dp};
}
