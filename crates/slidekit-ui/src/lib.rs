//! Host binding for the slide-to-confirm control.
//!
//! [`SlideToConfirm`] turns pointer events into drag sessions, schedules
//! animation ticks on the runtime's frame clock and exposes a [`SlideFrame`]
//! snapshot for whatever draws the control.

mod clock;
mod pointer;
mod render;
mod slide_to_confirm;

pub use clock::MonotonicClock;
pub use pointer::{PointerEvent, PointerEventKind};
pub use render::{SlideFrame, SlideRenderer, ThumbIcon};
pub use slide_to_confirm::SlideToConfirm;

pub mod prelude {
    pub use crate::clock::MonotonicClock;
    pub use crate::pointer::{PointerEvent, PointerEventKind};
    pub use crate::render::{SlideFrame, SlideRenderer, ThumbIcon};
    pub use crate::slide_to_confirm::SlideToConfirm;
    pub use slidekit_foundation::prelude::*;
}
