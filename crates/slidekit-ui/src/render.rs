//! Render snapshot of the control and the port that draws it.

use slidekit_foundation::{hint_color, track_color, GestureStateMachine};
use slidekit_graphics::Color;

/// Glyph shown inside the thumb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThumbIcon {
    Arrow,
    /// Indeterminate progress while the host is busy.
    Spinner,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideFrame {
    /// Thumb offset from its Start position, rounded to whole pixels.
    pub thumb_offset_px: i32,
    pub progress: f32,
    pub track_color: Color,
    pub hint_color: Color,
    pub thumb_icon: ThumbIcon,
    pub enabled: bool,
}

impl SlideFrame {
    pub fn capture(machine: &GestureStateMachine) -> Self {
        let progress = machine.progress();
        Self {
            thumb_offset_px: machine.current_offset().round() as i32,
            progress,
            track_color: track_color(progress),
            hint_color: hint_color(progress),
            thumb_icon: if machine.is_busy() {
                ThumbIcon::Spinner
            } else {
                ThumbIcon::Arrow
            },
            enabled: machine.is_enabled(),
        }
    }
}

pub trait SlideRenderer {
    fn render(&mut self, frame: &SlideFrame);
}

impl<F: FnMut(&SlideFrame)> SlideRenderer for F {
    fn render(&mut self, frame: &SlideFrame) {
        self(frame)
    }
}
