//! devsim-app - Simulator state and update loop
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! simulator: [`AppState`] is the model, [`Message`] the intents raised by the
//! toolbar and keyboard, and [`handler::update`] the only place state changes.
//! Work that must wait until the current frame is drawn goes through the
//! [`PostRenderQueue`]. Configuration loading lives in [`config`].

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod post_render;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use post_render::{PostRenderQueue, PostRenderTask};
pub use state::{AppPhase, AppState, SimulatorOptions, SimulatorState};
