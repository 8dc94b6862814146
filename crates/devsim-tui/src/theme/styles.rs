//! Semantic style builders for the simulator chrome.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

// --- Toolbar button styles ---

/// A toggle that is currently on
pub fn toggle_on() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// A toggle that is currently off
pub fn toggle_off() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn power(on: bool) -> Style {
    let color = if on {
        palette::STATUS_GREEN
    } else {
        palette::STATUS_RED
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn zoom() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Block builders ---
pub fn glass_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
}
