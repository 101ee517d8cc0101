//! Gesture-to-commitment core of the slide-to-confirm widget.
//!
//! A thumb is dragged along a track between two [`Anchor`]s. The
//! [`GestureStateMachine`] clamps drag input, decides on release which anchor to
//! settle at, drives the settle animation frame by frame and fires the commit
//! side effects through the [`CommandGate`] exactly once per arrival at
//! [`Anchor::End`]. Progress and the visual mappings are pure functions of the
//! current offset.

mod anchors;
mod command_gate;
mod config;
pub mod gesture_constants;
mod progress;
mod state_machine;
mod threshold;
mod velocity_tracker;
mod visuals;

pub use anchors::{Anchor, AnchorBounds, TrackGeometry};
pub use command_gate::{AllowAll, CommandGate, HapticFeedback, TransitionPolicy};
pub use config::{ConfigError, SlideConfig};
pub use progress::progress;
pub use state_machine::{GesturePhase, GestureStateMachine, SettleCause};
pub use threshold::ThresholdDecision;
pub use velocity_tracker::VelocityTracker1D;
pub use visuals::{
    hint_color, hint_opacity, track_color, ACCENT, ALMOST_BLACK, HINT_FADE_END, TRACK_COLOR_END,
};

pub mod prelude {
    pub use crate::{
        progress, Anchor, AnchorBounds, CommandGate, GesturePhase, GestureStateMachine,
        HapticFeedback, SlideConfig, TrackGeometry,
    };
}
