//! Main update function - handles state transitions (TEA pattern)

use devsim_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => handle_key(state, key),

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Toolbar Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleSimulation => {
            state.toggle_simulation();
            info!(
                "Simulation {} (platform: {})",
                if state.sim.simulation_on { "on" } else { "off" },
                state.platform.effective()
            );
            UpdateResult::none()
        }

        Message::NextDevice => {
            state.next_device();
            info!(
                "Switched to {} ({}/{})",
                state.current_device().name,
                state.sim.device_index + 1,
                state.catalog.len()
            );
            UpdateResult::none()
        }

        Message::ToggleOrientation => {
            state.toggle_orientation();
            debug!("Orientation: {}", state.sim.orientation.label());
            UpdateResult::none()
        }

        Message::ToggleKeyboard => {
            state.toggle_keyboard();
            debug!("Keyboard visible: {}", state.sim.keyboard_visible);
            UpdateResult::none()
        }

        Message::ToggleUnsafeArea => {
            state.toggle_unsafe_area();
            debug!("Unsafe area visible: {}", state.sim.unsafe_area_visible);
            UpdateResult::none()
        }

        Message::CalibrateZoom => {
            if state.calibrate_zoom() {
                info!(
                    "Calibrated zoom: correction {:.4} (raw zoom {:.4})",
                    state.sim.zoom_correction, state.sim.zoom
                );
            } else {
                warn!("Cannot calibrate before a zoom has been computed");
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Post-render Messages
        // ─────────────────────────────────────────────────────────
        Message::ZoomComputed { zoom } => {
            trace!("Zoom updated to {:.4}", zoom);
            state.set_zoom(zoom);
            UpdateResult::none()
        }
    }
}
