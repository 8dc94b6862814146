//! Message types for the simulator (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the simulator
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Poll timeout with no input
    Tick,

    /// Leave the simulator (Ctrl+C, F10)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Toolbar Messages
    // ─────────────────────────────────────────────────────────
    /// Turn device simulation on or off
    ToggleSimulation,
    /// Advance to the next device in the catalog (wraps around)
    NextDevice,
    /// Flip between portrait and landscape
    ToggleOrientation,
    /// Show or hide the on-screen keyboard placeholder
    ToggleKeyboard,
    /// Show or hide the unsafe-area highlight
    ToggleUnsafeArea,
    /// Pin the current apparent size as zoom 1.0
    CalibrateZoom,

    // ─────────────────────────────────────────────────────────
    // Post-render Messages
    // ─────────────────────────────────────────────────────────
    /// Zoom computed during the last render pass
    ZoomComputed { zoom: f64 },
}
