//! Header layout metrics and colors

use serde::{Deserialize, Serialize};
use tabstrip_groups::Color;

use crate::geometry::Rect;

/// Fixed metrics of a header row, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderLayout {
    /// Distance from the frame's leading edge to the disclosure rect
    pub disclosure_inset: f64,
    /// Side of the square disclosure rect
    pub disclosure_size: f64,
    /// Inset of the triangle inside the disclosure rect
    pub disclosure_padding: f64,
    /// Space between the disclosure rect and the title, and between the
    /// title and the badge
    pub title_gap: f64,
    pub title_font_size: f64,
    /// Horizontal padding around the badge's count text
    pub badge_padding: f64,
    pub badge_height: f64,
    pub badge_trailing_inset: f64,
    pub badge_font_size: f64,
}

impl HeaderLayout {
    pub const DEFAULT: HeaderLayout = HeaderLayout {
        disclosure_inset: 8.0,
        disclosure_size: 12.0,
        disclosure_padding: 3.0,
        title_gap: 6.0,
        title_font_size: 12.0,
        badge_padding: 6.0,
        badge_height: 16.0,
        badge_trailing_inset: 8.0,
        badge_font_size: 10.0,
    };

    /// The square holding the disclosure triangle.
    ///
    /// Depends only on the frame's origin and height: the rect sits a fixed
    /// distance from the leading edge and is centered vertically.
    pub fn disclosure_rect(&self, frame: Rect) -> Rect {
        let size = self.disclosure_size;
        Rect::new(
            frame.x + self.disclosure_inset,
            frame.y + (frame.height - size) / 2.0,
            size,
            size,
        )
    }

    /// Leading x coordinate of the title
    pub fn title_x(&self, frame: Rect) -> f64 {
        self.disclosure_rect(frame).max_x() + self.title_gap
    }

    pub fn badge_radius(&self) -> f64 {
        self.badge_height / 2.0
    }
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Colors used when drawing a header. The badge is filled with the
/// group's own color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderStyle {
    pub title_color: Color,
    pub disclosure_color: Color,
    pub badge_text_color: Color,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            title_color: Color::rgb(0.1, 0.1, 0.1),
            disclosure_color: Color::rgb(0.45, 0.45, 0.45),
            badge_text_color: Color::rgb(1.0, 1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclosure_rect_is_vertically_centered() {
        let layout = HeaderLayout::DEFAULT;
        let rect = layout.disclosure_rect(Rect::new(0.0, 100.0, 200.0, 24.0));
        assert_eq!(rect, Rect::new(8.0, 106.0, 12.0, 12.0));
        assert_eq!(rect.mid_y(), 112.0);
    }

    #[test]
    fn test_title_follows_disclosure() {
        let layout = HeaderLayout::DEFAULT;
        assert_eq!(layout.title_x(Rect::new(0.0, 0.0, 200.0, 24.0)), 26.0);
    }

    #[test]
    fn test_partial_layout_json_uses_defaults() {
        let layout: HeaderLayout =
            serde_json::from_str(r#"{ "disclosure_size": 16.0 }"#).unwrap();
        assert_eq!(layout.disclosure_size, 16.0);
        assert_eq!(layout.disclosure_inset, HeaderLayout::DEFAULT.disclosure_inset);
    }
}
