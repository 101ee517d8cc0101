//! One-line terminal rendering of a [`SlideFrame`].

use slidekit_ui::{SlideFrame, SlideRenderer, ThumbIcon};

/// Prints the track whenever the visible state changes.
pub struct AsciiRenderer {
    columns: usize,
    last_line: Option<String>,
}

impl AsciiRenderer {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(2),
            last_line: None,
        }
    }

    fn draw(&self, frame: &SlideFrame) -> String {
        let travel = self.columns - 1;
        let thumb_at = ((frame.progress * travel as f32).round() as usize).min(travel);
        let thumb = match frame.thumb_icon {
            ThumbIcon::Arrow => '>',
            ThumbIcon::Spinner => '*',
        };
        let track: String = (0..self.columns)
            .map(|column| match column {
                c if c == thumb_at => thumb,
                c if c < thumb_at => '=',
                _ => ' ',
            })
            .collect();
        let hint = if frame.hint_color.a() > 0.5 {
            "slide to unlock"
        } else {
            ""
        };
        format!(
            "[{track}] {:>3}% #{:06X} {hint}",
            (frame.progress * 100.0).round() as u32,
            frame.track_color.to_argb() & 0x00FF_FFFF,
        )
    }
}

impl SlideRenderer for AsciiRenderer {
    fn render(&mut self, frame: &SlideFrame) {
        let line = self.draw(frame);
        if self.last_line.as_deref() != Some(line.as_str()) {
            println!("{line}");
            self.last_line = Some(line);
        }
    }
}
