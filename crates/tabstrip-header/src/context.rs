//! Drawing surface abstraction
//!
//! Headers draw through [`DrawContext`] so the host can back it with
//! whatever renderer its tab strip uses.

use tabstrip_groups::Color;

use crate::geometry::{Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub weight: FontWeight,
    pub color: Color,
}

pub trait DrawContext {
    fn fill_triangle(&mut self, points: [Point; 3], color: Color);

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color);

    /// Draw a single line of text with its top-left corner at `origin`.
    /// Text wider than `max_width` is truncated by the context.
    fn draw_text(&mut self, text: &str, origin: Point, max_width: f64, style: &TextStyle);

    fn measure_text(&self, text: &str, style: &TextStyle) -> Size;
}

/// One recorded call on a [`RecordingContext`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Triangle {
        points: [Point; 3],
        color: Color,
    },
    RoundedRect {
        rect: Rect,
        radius: f64,
        color: Color,
    },
    Text {
        text: String,
        origin: Point,
        max_width: f64,
        style: TextStyle,
    },
}

/// A context that records commands instead of rasterizing them.
///
/// Text is measured with a fixed advance per character, which keeps
/// layouts deterministic in tests and headless hosts.
#[derive(Debug, Clone)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    /// Character advance as a fraction of the font size
    advance: f64,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::with_advance(0.6)
    }

    pub fn with_advance(advance: f64) -> Self {
        Self {
            commands: Vec::new(),
            advance,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Text of every recorded text command, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawContext for RecordingContext {
    fn fill_triangle(&mut self, points: [Point; 3], color: Color) {
        self.commands.push(DrawCommand::Triangle { points, color });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        self.commands
            .push(DrawCommand::RoundedRect { rect, radius, color });
    }

    fn draw_text(&mut self, text: &str, origin: Point, max_width: f64, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            max_width,
            style: *style,
        });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Size {
        let chars = text.chars().count() as f64;
        Size::new(chars * style.size * self.advance, style.size * 1.2)
    }
}
