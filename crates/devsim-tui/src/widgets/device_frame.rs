//! Device bezel with camera cutout

use devsim_core::{DeviceConfiguration, NotchKind, Orientation};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Widget};

use crate::theme::palette;

/// Draws the bezel around a device screen and blanks the screen itself.
///
/// The wrapped UI is rendered into [`screen_area`] afterwards.
pub struct DeviceFrame<'a> {
    device: &'a DeviceConfiguration,
    orientation: Orientation,
    /// Bezel thickness in cells (columns, rows)
    bezel: (u16, u16),
}

impl<'a> DeviceFrame<'a> {
    pub fn new(
        device: &'a DeviceConfiguration,
        orientation: Orientation,
        bezel: (u16, u16),
    ) -> Self {
        Self {
            device,
            orientation,
            bezel,
        }
    }

    fn render_camera(&self, screen: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(palette::CAMERA)
            .add_modifier(Modifier::BOLD);

        match self.orientation {
            Orientation::Portrait => {
                // bezel row directly above the screen
                let Some(y) = screen.y.checked_sub(1) else {
                    return;
                };
                let (symbol, width) = match self.device.frame.notch {
                    NotchKind::None => return,
                    NotchKind::Notch => ("▄", (screen.width / 3).max(3)),
                    NotchKind::DynamicIsland => ("━", (screen.width / 4).max(2)),
                    NotchKind::PunchHole => ("●", 1),
                };
                let width = width.min(screen.width);
                let x = screen.x + (screen.width - width) / 2;
                buf.set_string(x, y, symbol.repeat(width as usize), style);
            }
            Orientation::Landscape => {
                // bezel column directly left of the screen
                let Some(x) = screen.x.checked_sub(1) else {
                    return;
                };
                let (symbol, height) = match self.device.frame.notch {
                    NotchKind::None => return,
                    NotchKind::Notch => ("▐", (screen.height / 3).max(2)),
                    NotchKind::DynamicIsland => ("┃", (screen.height / 4).max(1)),
                    NotchKind::PunchHole => ("●", 1),
                };
                let height = height.min(screen.height);
                let top = screen.y + (screen.height - height) / 2;
                for y in top..top + height {
                    buf.set_string(x, y, symbol, style);
                }
            }
        }
    }
}

impl Widget for DeviceFrame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette::BEZEL_EDGE))
            .style(Style::default().bg(palette::BEZEL))
            .render(area, buf);

        let screen = screen_area(area, self.bezel);
        if screen.is_empty() {
            return;
        }
        buf.set_style(screen, Style::default().bg(palette::SCREEN_BG));

        self.render_camera(screen, buf);
    }
}

/// The screen rect inside a frame of the given bezel thickness
pub fn screen_area(frame: Rect, bezel: (u16, u16)) -> Rect {
    let (bx, by) = bezel;
    Rect::new(
        frame.x.saturating_add(bx),
        frame.y.saturating_add(by),
        frame.width.saturating_sub(bx.saturating_mul(2)),
        frame.height.saturating_sub(by.saturating_mul(2)),
    )
}
