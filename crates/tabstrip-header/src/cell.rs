//! Group header cell
//!
//! Renders one header row:
//! ```text
//! | ▸ Title                        (3) |
//! ```
//! The triangle points right while collapsed and down while expanded.
//! The count badge appears only while collapsed and is read from the
//! group on every draw.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tabstrip_groups::TabGroup;

use crate::context::{DrawContext, FontWeight, TextStyle};
use crate::error::HeaderError;
use crate::geometry::{Point, Rect};
use crate::layout::{HeaderLayout, HeaderStyle};
use crate::Result;

/// How the owning control holds its groups. Everything runs on the UI
/// thread, so a single-threaded `Rc` is enough.
pub type SharedGroup = Rc<RefCell<TabGroup>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disclosure {
    Expanded,
    Collapsed,
}

impl Disclosure {
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            Disclosure::Collapsed
        } else {
            Disclosure::Expanded
        }
    }

    /// Triangle filling `rect`: pointing right when collapsed, down when expanded
    pub fn triangle(&self, rect: Rect) -> [Point; 3] {
        match self {
            Disclosure::Collapsed => [
                Point::new(rect.x, rect.y),
                Point::new(rect.x, rect.max_y()),
                Point::new(rect.max_x(), rect.mid_y()),
            ],
            Disclosure::Expanded => [
                Point::new(rect.x, rect.y),
                Point::new(rect.max_x(), rect.y),
                Point::new(rect.mid_x(), rect.max_y()),
            ],
        }
    }
}

/// Where a point falls relative to the cached header frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderHit {
    Disclosure,
    Header,
    Outside,
}

#[derive(Debug, Clone)]
pub struct GroupHeaderCell {
    /// Not owned; the control decides how long the group lives
    group: Weak<RefCell<TabGroup>>,
    /// Frame of the most recent draw
    frame: Option<Rect>,
    layout: HeaderLayout,
    style: HeaderStyle,
}

impl GroupHeaderCell {
    pub fn new(group: &SharedGroup) -> Self {
        Self::with_layout(group, HeaderLayout::default(), HeaderStyle::default())
    }

    pub fn with_layout(group: &SharedGroup, layout: HeaderLayout, style: HeaderStyle) -> Self {
        Self {
            group: Rc::downgrade(group),
            frame: None,
            layout,
            style,
        }
    }

    /// The bound group, or `None` once the owner has dropped it
    pub fn group(&self) -> Option<SharedGroup> {
        self.group.upgrade()
    }

    pub fn is_bound(&self) -> bool {
        self.group.strong_count() > 0
    }

    /// Point the cell at another group. The cached frame is kept.
    pub fn rebind(&mut self, group: &SharedGroup) {
        self.group = Rc::downgrade(group);
    }

    pub fn frame(&self) -> Option<Rect> {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = Some(frame);
    }

    pub fn layout(&self) -> &HeaderLayout {
        &self.layout
    }

    /// Disclosure triangle rect for `frame`
    pub fn disclosure_rect(&self, frame: Rect) -> Rect {
        self.layout.disclosure_rect(frame)
    }

    /// Whether `point` lies on the disclosure triangle of the last drawn frame
    pub fn disclosure_contains(&self, point: Point) -> bool {
        self.frame
            .map(|frame| self.disclosure_rect(frame).contains(point))
            .unwrap_or(false)
    }

    pub fn hit_test(&self, point: Point) -> HeaderHit {
        match self.frame {
            Some(frame) if self.disclosure_rect(frame).contains(point) => HeaderHit::Disclosure,
            Some(frame) if frame.contains(point) => HeaderHit::Header,
            _ => HeaderHit::Outside,
        }
    }

    /// Trailing rect of the count badge for `count` members
    pub fn badge_rect(&self, frame: Rect, count: usize, ctx: &dyn DrawContext) -> Rect {
        let layout = &self.layout;
        let text_width = ctx.measure_text(&count.to_string(), &self.badge_text_style()).width;
        let width = (text_width + 2.0 * layout.badge_padding).max(layout.badge_height);
        Rect::new(
            frame.max_x() - layout.badge_trailing_inset - width,
            frame.mid_y() - layout.badge_height / 2.0,
            width,
            layout.badge_height,
        )
    }

    /// Draw the header into `frame` and remember the frame for hit testing.
    pub fn draw(&mut self, frame: Rect, ctx: &mut dyn DrawContext) -> Result<()> {
        self.frame = Some(frame);

        let group = self.group().ok_or(HeaderError::GroupReleased)?;
        let group = group.borrow();
        let layout = &self.layout;

        let disclosure = Disclosure::from_collapsed(group.is_collapsed());
        let triangle_rect = self
            .disclosure_rect(frame)
            .inset(layout.disclosure_padding, layout.disclosure_padding);
        ctx.fill_triangle(disclosure.triangle(triangle_rect), self.style.disclosure_color);

        let count = group.tab_count();
        let badge = match disclosure {
            Disclosure::Collapsed => Some(self.badge_rect(frame, count, &*ctx)),
            Disclosure::Expanded => None,
        };

        let title_x = layout.title_x(frame);
        let title_end = badge.map_or(frame.max_x(), |badge| badge.x - layout.title_gap);
        let title_style = TextStyle {
            size: layout.title_font_size,
            weight: FontWeight::Bold,
            color: self.style.title_color,
        };
        let title_height = ctx.measure_text(group.title(), &title_style).height;
        ctx.draw_text(
            group.title(),
            Point::new(title_x, frame.mid_y() - title_height / 2.0),
            (title_end - title_x).max(0.0),
            &title_style,
        );

        if let Some(badge) = badge {
            ctx.fill_rounded_rect(badge, layout.badge_radius(), group.color());

            let label = count.to_string();
            let label_style = self.badge_text_style();
            let label_size = ctx.measure_text(&label, &label_style);
            ctx.draw_text(
                &label,
                Point::new(
                    badge.mid_x() - label_size.width / 2.0,
                    badge.mid_y() - label_size.height / 2.0,
                ),
                label_size.width,
                &label_style,
            );
        }

        tracing::trace!(
            group_id = %group.identifier(),
            collapsed = group.is_collapsed(),
            tab_count = count,
            "Drew group header"
        );

        Ok(())
    }

    fn badge_text_style(&self) -> TextStyle {
        TextStyle {
            size: self.layout.badge_font_size,
            weight: FontWeight::Regular,
            color: self.style.badge_text_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{DrawCommand, RecordingContext};
    use tabstrip_groups::Color;

    fn shared(group: TabGroup) -> SharedGroup {
        Rc::new(RefCell::new(group))
    }

    #[test]
    fn test_disclosure_rect_is_pure() {
        let group = shared(TabGroup::new("Work"));
        let cell = GroupHeaderCell::new(&group);
        let frame = Rect::new(4.0, 40.0, 180.0, 22.0);

        let first = cell.disclosure_rect(frame);
        let second = cell.disclosure_rect(frame);
        assert_eq!(first.x.to_bits(), second.x.to_bits());
        assert_eq!(first.y.to_bits(), second.y.to_bits());
        assert_eq!(first.width.to_bits(), second.width.to_bits());
        assert_eq!(first.height.to_bits(), second.height.to_bits());

        // Width does not move the disclosure rect
        let wide = Rect::new(4.0, 40.0, 360.0, 22.0);
        assert_eq!(cell.disclosure_rect(wide), first);

        // Height recenters it
        let tall = Rect::new(4.0, 40.0, 180.0, 44.0);
        let recentered = cell.disclosure_rect(tall);
        assert_eq!(recentered.x, first.x);
        assert_eq!(recentered.width, first.width);
        assert_eq!(recentered.mid_y(), tall.mid_y());
    }

    #[test]
    fn test_draw_expanded_has_no_badge() {
        let group = shared(TabGroup::with_tab_guids("Work", ["a", "b"]));
        let mut cell = GroupHeaderCell::new(&group);
        let mut ctx = RecordingContext::new();

        cell.draw(Rect::new(0.0, 0.0, 200.0, 24.0), &mut ctx).unwrap();

        let commands = ctx.commands();
        assert_eq!(commands.len(), 2);
        match &commands[0] {
            DrawCommand::Triangle { points, .. } => {
                // Pointing down: flat top edge, apex below
                assert_eq!(points[0].y, points[1].y);
                assert!(points[2].y > points[0].y);
            }
            other => panic!("expected triangle, got {other:?}"),
        }
        match &commands[1] {
            DrawCommand::Text { text, style, .. } => {
                assert_eq!(text, "Work");
                assert_eq!(style.weight, FontWeight::Bold);
            }
            other => panic!("expected title, got {other:?}"),
        }
    }

    #[test]
    fn test_draw_collapsed_shows_live_count() {
        let group = shared(TabGroup::with_tab_guids("Work", ["a", "b", "c"]));
        group.borrow_mut().set_collapsed(true);
        group.borrow_mut().set_color(Color::rgb(0.0, 0.5, 1.0));
        let mut cell = GroupHeaderCell::new(&group);
        let mut ctx = RecordingContext::new();
        let frame = Rect::new(0.0, 0.0, 200.0, 24.0);

        cell.draw(frame, &mut ctx).unwrap();
        assert_eq!(ctx.texts(), vec!["Work", "3"]);

        let commands = ctx.take_commands();
        match &commands[0] {
            DrawCommand::Triangle { points, .. } => {
                // Pointing right: flat leading edge, apex to the right
                assert_eq!(points[0].x, points[1].x);
                assert!(points[2].x > points[0].x);
            }
            other => panic!("expected triangle, got {other:?}"),
        }
        match &commands[2] {
            DrawCommand::RoundedRect { rect, color, .. } => {
                assert_eq!(*color, Color::rgb(0.0, 0.5, 1.0));
                assert_eq!(rect.max_x(), frame.max_x() - HeaderLayout::DEFAULT.badge_trailing_inset);
            }
            other => panic!("expected badge, got {other:?}"),
        }

        // Membership changes show up on the next draw
        group.borrow_mut().remove_tab_guid("a");
        cell.draw(frame, &mut ctx).unwrap();
        assert_eq!(ctx.texts(), vec!["Work", "2"]);
    }

    #[test]
    fn test_title_stops_before_badge() {
        let group = shared(TabGroup::with_tab_guids("Work", ["a"]));
        group.borrow_mut().set_collapsed(true);
        let mut cell = GroupHeaderCell::new(&group);
        let mut ctx = RecordingContext::new();

        cell.draw(Rect::new(0.0, 0.0, 200.0, 24.0), &mut ctx).unwrap();

        let commands = ctx.commands();
        let (title_origin, title_width) = match &commands[1] {
            DrawCommand::Text {
                origin, max_width, ..
            } => (*origin, *max_width),
            other => panic!("expected title, got {other:?}"),
        };
        let badge = match &commands[2] {
            DrawCommand::RoundedRect { rect, .. } => *rect,
            other => panic!("expected badge, got {other:?}"),
        };
        assert!(title_origin.x + title_width <= badge.x);
    }

    #[test]
    fn test_draw_caches_frame_for_hit_testing() {
        let group = shared(TabGroup::new("Work"));
        let mut cell = GroupHeaderCell::new(&group);
        let point = Point::new(12.0, 112.0);

        assert!(cell.frame().is_none());
        assert!(!cell.disclosure_contains(point));
        assert_eq!(cell.hit_test(point), HeaderHit::Outside);

        let frame = Rect::new(0.0, 100.0, 200.0, 24.0);
        cell.draw(frame, &mut RecordingContext::new()).unwrap();
        assert_eq!(cell.frame(), Some(frame));
        assert!(cell.disclosure_contains(point));
        assert_eq!(cell.hit_test(point), HeaderHit::Disclosure);
        assert_eq!(cell.hit_test(Point::new(100.0, 110.0)), HeaderHit::Header);

        // A later draw moves the hit area with it
        cell.draw(Rect::new(0.0, 0.0, 200.0, 24.0), &mut RecordingContext::new())
            .unwrap();
        assert!(!cell.disclosure_contains(point));
    }

    #[test]
    fn test_released_group() {
        let group = shared(TabGroup::new("Work"));
        let mut cell = GroupHeaderCell::new(&group);
        assert!(cell.is_bound());

        drop(group);
        assert!(!cell.is_bound());

        let frame = Rect::new(0.0, 0.0, 200.0, 24.0);
        let mut ctx = RecordingContext::new();
        assert!(matches!(
            cell.draw(frame, &mut ctx),
            Err(HeaderError::GroupReleased)
        ));
        assert!(ctx.commands().is_empty());
        assert_eq!(cell.frame(), Some(frame));

        let replacement = shared(TabGroup::new("Play"));
        cell.rebind(&replacement);
        cell.draw(frame, &mut ctx).unwrap();
        assert_eq!(ctx.texts(), vec!["Play"]);
    }
}
