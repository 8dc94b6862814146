//! Simulator toolbar
//!
//! One row of buttons above the stage. Each button mirrors a function-key
//! shortcut and can also be clicked.

use devsim_app::handler::binding_for;
use devsim_app::{AppState, Message};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{palette, styles};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Power,
    Device,
    Orientation,
    Keyboard,
    UnsafeArea,
    Calibrate,
}

impl ToolbarButton {
    /// Buttons in display order
    pub const ALL: [ToolbarButton; 6] = [
        ToolbarButton::Power,
        ToolbarButton::Device,
        ToolbarButton::Orientation,
        ToolbarButton::Keyboard,
        ToolbarButton::UnsafeArea,
        ToolbarButton::Calibrate,
    ];

    /// Message raised when the button is pressed
    pub fn message(self) -> Message {
        match self {
            ToolbarButton::Power => Message::ToggleSimulation,
            ToolbarButton::Device => Message::NextDevice,
            ToolbarButton::Orientation => Message::ToggleOrientation,
            ToolbarButton::Keyboard => Message::ToggleKeyboard,
            ToolbarButton::UnsafeArea => Message::ToggleUnsafeArea,
            ToolbarButton::Calibrate => Message::CalibrateZoom,
        }
    }

    fn shortcut(self) -> String {
        binding_for(&self.message())
            .map(|key| key.label())
            .unwrap_or_default()
    }

    fn caption(self, state: &AppState) -> String {
        match self {
            ToolbarButton::Power if state.sim.simulation_on => "● On".to_string(),
            ToolbarButton::Power => "○ Off".to_string(),
            ToolbarButton::Device => state.current_device().name.clone(),
            ToolbarButton::Orientation => state.sim.orientation.label().to_string(),
            ToolbarButton::Keyboard => "Keyboard".to_string(),
            ToolbarButton::UnsafeArea => "Unsafe area".to_string(),
            ToolbarButton::Calibrate => format!("Zoom {:.2}x", state.sim.displayed_zoom()),
        }
    }

    fn style(self, state: &AppState) -> Style {
        if self != ToolbarButton::Power && !state.sim.simulation_on {
            return styles::text_muted();
        }
        match self {
            ToolbarButton::Power => styles::power(state.sim.simulation_on),
            ToolbarButton::Keyboard if state.sim.keyboard_visible => styles::toggle_on(),
            ToolbarButton::UnsafeArea if state.sim.unsafe_area_visible => styles::toggle_on(),
            ToolbarButton::Calibrate => styles::zoom(),
            ToolbarButton::Device | ToolbarButton::Orientation => styles::text_primary(),
            _ => styles::toggle_off(),
        }
    }

    /// Full label as drawn, e.g. "F3 Pixel 7"
    pub fn label(self, state: &AppState) -> String {
        format!("{} {}", self.shortcut(), self.caption(state))
    }
}

/// Preferred gap between buttons; shrinks to one column when space is short
const BUTTON_GAP: u16 = 2;

/// Narrowest device caption kept before buttons start being dropped
const MIN_DEVICE_CAPTION: usize = 6;

/// Optional buttons, dropped in this order when the toolbar is too narrow
const DROP_ORDER: [ToolbarButton; 3] = [
    ToolbarButton::UnsafeArea,
    ToolbarButton::Keyboard,
    ToolbarButton::Orientation,
];

/// A button as laid out in the toolbar
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSlot {
    pub button: ToolbarButton,
    pub rect: Rect,
    /// Caption as drawn, possibly truncated
    pub caption: String,
}

/// Lay out the buttons that fit in `area`, in display order.
///
/// When space runs out the gaps tighten first, then the device name is
/// truncated, then the optional toggles are dropped. Power, device and zoom
/// are kept as long as they fit at all.
pub fn button_regions(area: Rect, state: &AppState) -> Vec<ButtonSlot> {
    let inner = styles::glass_block().inner(area);
    if inner.height == 0 || inner.width <= 2 {
        return Vec::new();
    }

    let start = inner.x + 1;
    let budget = usize::from(inner.right().saturating_sub(1).saturating_sub(start));

    let mut buttons: Vec<(ToolbarButton, String)> = ToolbarButton::ALL
        .iter()
        .map(|&button| (button, button.caption(state)))
        .collect();
    let mut dropped = DROP_ORDER.iter();

    let gap = loop {
        if total_width(&buttons, BUTTON_GAP) <= budget {
            break BUTTON_GAP;
        }
        let total = total_width(&buttons, 1);
        if total <= budget {
            break 1;
        }
        let device = buttons
            .iter_mut()
            .find(|entry| entry.0 == ToolbarButton::Device);
        if let Some((_, caption)) = device {
            let room = caption.width().saturating_sub(total - budget);
            if room >= MIN_DEVICE_CAPTION {
                *caption = truncate(caption.as_str(), room);
                break 1;
            }
        }
        match dropped.next() {
            Some(next) => buttons.retain(|(b, _)| b != next),
            None => break 1,
        }
    };

    let right = start.saturating_add(budget as u16);
    let mut x = start;
    let mut slots = Vec::with_capacity(buttons.len());
    for (button, caption) in buttons {
        let width = label_width(button, &caption) as u16;
        if x.saturating_add(width) > right {
            continue;
        }
        slots.push(ButtonSlot {
            button,
            rect: Rect::new(x, inner.y, width, 1),
            caption,
        });
        x = x.saturating_add(width + gap);
    }

    slots
}

fn label_width(button: ToolbarButton, caption: &str) -> usize {
    button.shortcut().width() + 1 + caption.width()
}

fn total_width(buttons: &[(ToolbarButton, String)], gap: u16) -> usize {
    let labels: usize = buttons
        .iter()
        .map(|(button, caption)| label_width(*button, caption))
        .sum();
    labels + usize::from(gap) * buttons.len().saturating_sub(1)
}

/// Shorten `text` to at most `max` columns, ending in an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Button under a terminal position, if any
pub fn button_at(area: Rect, state: &AppState, column: u16, row: u16) -> Option<ToolbarButton> {
    button_regions(area, state)
        .into_iter()
        .find(|slot| {
            let rect = slot.rect;
            row >= rect.y && row < rect.bottom() && column >= rect.x && column < rect.right()
        })
        .map(|slot| slot.button)
}

/// Toolbar showing the simulator controls
pub struct Toolbar<'a> {
    state: &'a AppState,
}

impl<'a> Toolbar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for Toolbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block()
            .title(" Device Simulator ")
            .style(Style::default().bg(palette::CARD_BG));
        block.render(area, buf);

        for slot in button_regions(area, self.state) {
            let shortcut = slot.button.shortcut();
            buf.set_string(slot.rect.x, slot.rect.y, &shortcut, styles::text_muted());
            buf.set_string(
                slot.rect.x + shortcut.width() as u16 + 1,
                slot.rect.y,
                &slot.caption,
                slot.button.style(self.state),
            );
        }
    }
}
