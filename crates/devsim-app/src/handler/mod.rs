//! Handler module - TEA update function and key bindings
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Toolbar shortcuts and key forwarding

pub(crate) mod keys;
pub(crate) mod update;


use crate::input_key::InputKey;
use crate::message::Message;

// Re-export main entry point
pub use keys::{binding_for, TOOLBAR_BINDINGS};
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Key not bound by the simulator; deliver it to the wrapped UI
    ForwardKey(InputKey),
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
