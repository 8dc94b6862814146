//! Key bindings
//!
//! The simulator claims only function keys and Ctrl+C so that ordinary typing
//! reaches the wrapped UI untouched.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Toolbar shortcuts, in toolbar order
pub const TOOLBAR_BINDINGS: &[(InputKey, Message)] = &[
    (InputKey::F(2), Message::ToggleSimulation),
    (InputKey::F(3), Message::NextDevice),
    (InputKey::F(4), Message::ToggleOrientation),
    (InputKey::F(5), Message::ToggleKeyboard),
    (InputKey::F(6), Message::ToggleUnsafeArea),
    (InputKey::F(7), Message::CalibrateZoom),
];

/// Shortcut key for a toolbar message
pub fn binding_for(message: &Message) -> Option<InputKey> {
    TOOLBAR_BINDINGS
        .iter()
        .find(|(_, msg)| msg == message)
        .map(|(key, _)| *key)
}

fn is_quit_key(key: InputKey) -> bool {
    matches!(key, InputKey::CharCtrl('c') | InputKey::F(10))
}

/// Map a key press to a simulator message or forward it to the wrapped UI.
///
/// With the enable gate closed there is no toolbar, so only the quit keys
/// are intercepted.
pub(crate) fn handle_key(state: &AppState, key: InputKey) -> UpdateResult {
    if is_quit_key(key) {
        return UpdateResult::message(Message::Quit);
    }

    if state.enabled {
        if let Some((_, message)) = TOOLBAR_BINDINGS.iter().find(|(k, _)| *k == key) {
            return UpdateResult::message(message.clone());
        }
    }

    UpdateResult::action(UpdateAction::ForwardKey(key))
}
