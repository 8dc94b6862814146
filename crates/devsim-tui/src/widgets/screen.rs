//! Overlays drawn on top of the simulated screen, plus helpers for the
//! wrapped UI to find the cells it can safely draw into.

use devsim_core::{EdgeInsets, RenderContext, Size};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::theme::palette;

const KEY_ROWS: [&str; 4] = [
    "q w e r t y u i o p",
    "a s d f g h j k l",
    "z x c v b n m",
    "[    space    ]",
];

/// Logical insets converted to whole cells on a screen rect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellInsets {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl CellInsets {
    /// Scale logical insets onto `area`, where `area` shows `logical` units.
    ///
    /// Any non-zero inset covers at least one cell.
    pub fn from_logical(area: Rect, logical: Size, insets: EdgeInsets) -> Self {
        let top = scale(insets.top, logical.height, area.height);
        let bottom = scale(insets.bottom, logical.height, area.height).min(area.height - top);
        let left = scale(insets.left, logical.width, area.width);
        let right = scale(insets.right, logical.width, area.width).min(area.width - left);
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Per-edge maximum of two inset sets
    pub fn max(self, other: Self) -> Self {
        Self {
            top: self.top.max(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
            left: self.left.max(other.left),
        }
    }

    /// `area` with the insets removed
    pub fn shrink(&self, area: Rect) -> Rect {
        let width = area.width.saturating_sub(self.left + self.right);
        let height = area.height.saturating_sub(self.top + self.bottom);
        Rect::new(area.x + self.left, area.y + self.top, width, height)
    }
}

fn scale(inset: f64, logical_extent: f64, cells: u16) -> u16 {
    if !(inset > 0.0 && logical_extent > 0.0) || cells == 0 {
        return 0;
    }
    let scaled = (inset / logical_extent * f64::from(cells)).round();
    (scaled as u16).clamp(1, cells)
}

/// Cells of `area` not covered by system UI (notch, status bar, gesture bar)
pub fn safe_area_rect(area: Rect, ctx: &RenderContext) -> Rect {
    CellInsets::from_logical(area, ctx.size, ctx.padding).shrink(area)
}

/// Cells of `area` covered by neither system UI nor the keyboard
pub fn unobscured_rect(area: Rect, ctx: &RenderContext) -> Rect {
    let padding = CellInsets::from_logical(area, ctx.size, ctx.padding);
    let keyboard = CellInsets::from_logical(area, ctx.size, ctx.view_insets);
    padding.max(keyboard).shrink(area)
}

/// Tints the unsafe areas of the screen.
///
/// Only the background changes, so whatever the wrapped UI drew there stays
/// readable underneath.
pub struct UnsafeAreaOverlay<'a> {
    ctx: &'a RenderContext,
}

impl<'a> UnsafeAreaOverlay<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }
}

impl Widget for UnsafeAreaOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let insets = CellInsets::from_logical(area, self.ctx.size, self.ctx.padding);
        let tint = Style::default().bg(palette::UNSAFE_AREA);
        let middle_y = area.y + insets.top;
        let middle_height = area.height - insets.top - insets.bottom;

        let strips = [
            Rect::new(area.x, area.y, area.width, insets.top),
            Rect::new(area.x, area.bottom() - insets.bottom, area.width, insets.bottom),
            Rect::new(area.x, middle_y, insets.left, middle_height),
            Rect::new(area.right() - insets.right, middle_y, insets.right, middle_height),
        ];
        for strip in strips.into_iter().filter(|r| !r.is_empty()) {
            buf.set_style(strip, tint);
        }
    }
}

/// Placeholder on-screen keyboard covering the bottom view inset
pub struct KeyboardOverlay<'a> {
    ctx: &'a RenderContext,
}

impl<'a> KeyboardOverlay<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }
}

impl Widget for KeyboardOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = CellInsets::from_logical(area, self.ctx.size, self.ctx.view_insets).bottom;
        if rows == 0 {
            return;
        }
        let keyboard = Rect::new(area.x, area.bottom() - rows, area.width, rows);

        Clear.render(keyboard, buf);
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette::TEXT_MUTED))
            .style(
                Style::default()
                    .bg(palette::KEYBOARD_BG)
                    .fg(palette::KEYBOARD_KEY),
            );
        let inner = block.inner(keyboard);
        block.render(keyboard, buf);

        let lines: Vec<Line> = KEY_ROWS.iter().map(|row| Line::from(*row)).collect();
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Gesture bar along the bottom edge of the screen
pub struct HomeIndicator;

impl Widget for HomeIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width == 0 {
            return;
        }
        let width = (area.width / 3).max(1);
        let x = area.x + (area.width - width) / 2;
        let y = area.bottom() - 1;
        buf.set_string(
            x,
            y,
            "━".repeat(width as usize),
            Style::default().fg(palette::HOME_INDICATOR),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use devsim_core::catalog::{iphone_14, iphone_se};
    use devsim_core::{Orientation, TargetPlatform};

    /// 20x40 cells showing 400x800 logical units: 20 units per cell each way
    fn screen() -> Rect {
        Rect::new(0, 0, 20, 40)
    }

    fn ctx(padding: EdgeInsets, keyboard: f64) -> RenderContext {
        RenderContext {
            size: Size::new(400.0, 800.0),
            orientation: Orientation::Portrait,
            platform: TargetPlatform::Ios,
            padding,
            view_insets: EdgeInsets::only_bottom(keyboard),
            device: Some("Test".into()),
        }
    }

    #[test]
    fn test_cell_insets_scale_proportionally() {
        let insets = CellInsets::from_logical(
            screen(),
            Size::new(400.0, 800.0),
            EdgeInsets::new(40.0, 0.0, 200.0, 20.0),
        );
        assert_eq!(
            insets,
            CellInsets {
                top: 2,
                right: 0,
                bottom: 10,
                left: 1
            }
        );
    }

    #[test]
    fn test_small_inset_still_covers_a_cell() {
        let insets = CellInsets::from_logical(
            screen(),
            Size::new(400.0, 800.0),
            EdgeInsets::new(1.0, 0.0, 0.0, 0.0),
        );
        assert_eq!(insets.top, 1);
    }

    #[test]
    fn test_insets_never_exceed_area() {
        let insets = CellInsets::from_logical(
            screen(),
            Size::new(400.0, 800.0),
            EdgeInsets::new(900.0, 0.0, 900.0, 0.0),
        );
        assert_eq!(insets.top + insets.bottom, 40);
        assert!(insets.shrink(screen()).is_empty());
    }

    #[test]
    fn test_safe_area_rect() {
        let ctx = ctx(EdgeInsets::new(40.0, 0.0, 20.0, 0.0), 0.0);
        assert_eq!(safe_area_rect(screen(), &ctx), Rect::new(0, 2, 20, 37));
    }

    #[test]
    fn test_unobscured_rect_includes_keyboard() {
        let ctx = ctx(EdgeInsets::new(40.0, 0.0, 20.0, 0.0), 300.0);
        assert_eq!(unobscured_rect(screen(), &ctx), Rect::new(0, 2, 20, 23));
        // keyboard doesn't change the safe area itself
        assert_eq!(safe_area_rect(screen(), &ctx), Rect::new(0, 2, 20, 37));
    }

    #[test]
    fn test_passthrough_context_is_fully_safe() {
        let ctx = RenderContext::passthrough(Size::new(400.0, 800.0), TargetPlatform::Linux);
        assert_eq!(safe_area_rect(screen(), &ctx), screen());
        assert_eq!(unobscured_rect(screen(), &ctx), screen());
    }

    #[test]
    fn test_unsafe_overlay_tints_without_erasing() {
        let mut term = TestTerminal::with_size(20, 40);
        let ctx = ctx(EdgeInsets::new(40.0, 0.0, 20.0, 0.0), 0.0);
        term.draw_with(|frame| {
            frame
                .buffer_mut()
                .set_string(0, 0, "status", Style::default());
            frame.render_widget(UnsafeAreaOverlay::new(&ctx), frame.area());
        });

        assert!(term.line_contains(0, "status"));
        assert_eq!(term.buffer()[(0, 0)].bg, palette::UNSAFE_AREA);
        assert_eq!(term.buffer()[(0, 39)].bg, palette::UNSAFE_AREA);
        assert_ne!(term.buffer()[(5, 20)].bg, palette::UNSAFE_AREA);
    }

    #[test]
    fn test_unsafe_overlay_side_strips_in_landscape() {
        let device = iphone_14();
        let ctx =
            RenderContext::simulated(&device, Orientation::Landscape, TargetPlatform::Ios, false);
        let mut term = TestTerminal::with_size(84, 20);
        term.render_widget(UnsafeAreaOverlay::new(&ctx), Rect::new(0, 0, 84, 20));

        assert_eq!(term.buffer()[(0, 5)].bg, palette::UNSAFE_AREA);
        assert_eq!(term.buffer()[(83, 5)].bg, palette::UNSAFE_AREA);
        assert_ne!(term.buffer()[(40, 5)].bg, palette::UNSAFE_AREA);
    }

    #[test]
    fn test_keyboard_overlay_covers_bottom_inset() {
        let mut term = TestTerminal::with_size(20, 40);
        let ctx = ctx(EdgeInsets::ZERO, 300.0);
        term.render_widget(KeyboardOverlay::new(&ctx), Rect::new(0, 0, 20, 40));

        // 300 of 800 units on 40 rows
        assert_eq!(term.buffer()[(0, 25)].bg, palette::KEYBOARD_BG);
        assert_ne!(term.buffer()[(0, 24)].bg, palette::KEYBOARD_BG);
        assert!(term.buffer_contains("q w e r t y"));
    }

    #[test]
    fn test_keyboard_overlay_hidden_without_inset() {
        let mut term = TestTerminal::with_size(20, 40);
        let device = iphone_se();
        let ctx =
            RenderContext::simulated(&device, Orientation::Portrait, TargetPlatform::Ios, false);
        term.render_widget(KeyboardOverlay::new(&ctx), Rect::new(0, 0, 20, 40));
        assert!(!term.buffer_contains("space"));
    }

    #[test]
    fn test_home_indicator_on_last_row() {
        let mut term = TestTerminal::with_size(30, 10);
        term.render_widget(HomeIndicator, Rect::new(0, 0, 30, 10));
        assert!(term.line_contains(9, "━━━━━━━━━━"));
        assert!(!term.line_contains(8, "━"));
    }
}
