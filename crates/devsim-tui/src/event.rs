//! Terminal event polling

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use devsim_app::InputKey;
use devsim_core::prelude::*;
use std::time::Duration;

/// Terminal input the simulator cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    Key(InputKey),
    /// Left mouse button pressed at a cell
    Click { column: u16, row: u16 },
    /// Nothing happened within the poll timeout, or the terminal resized
    Tick,
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Left-button presses become clicks; drags, releases and scrolling are ignored
pub fn mouse_event_to_click(mouse: MouseEvent) -> Option<TerminalEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(TerminalEvent::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Convert a crossterm event
pub fn translate(event: Event) -> Option<TerminalEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(TerminalEvent::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_click(mouse),
        Event::Resize(_, _) => Some(TerminalEvent::Tick),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<TerminalEvent>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        Ok(translate(event::read()?))
    } else {
        Ok(Some(TerminalEvent::Tick))
    }
}
