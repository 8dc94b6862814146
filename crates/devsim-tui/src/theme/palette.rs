//! Color palette for the simulator chrome.

use devsim_core::Rgb;
use ratatui::style::Color;

// --- Toolbar ---
pub const CARD_BG: Color = Color::Black;
pub const BORDER_DIM: Color = Color::DarkGray;
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Device ---
pub const BEZEL: Color = Color::Rgb(28, 28, 32);
pub const BEZEL_EDGE: Color = Color::Rgb(90, 90, 98);
pub const SCREEN_BG: Color = Color::Black;
pub const CAMERA: Color = Color::Rgb(8, 8, 10);
pub const HOME_INDICATOR: Color = Color::Gray;

// --- Overlays ---
pub const KEYBOARD_BG: Color = Color::Rgb(58, 58, 64);
pub const KEYBOARD_KEY: Color = Color::Rgb(220, 220, 226);
/// Background tint for unsafe areas; symbols underneath stay visible
pub const UNSAFE_AREA: Color = Color::Rgb(128, 24, 48);

/// Convert a configured color to a terminal color
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}
