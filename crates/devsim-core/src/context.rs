//! Ambient render context handed to the wrapped UI
//!
//! The wrapped UI consults this instead of the real terminal so that it lays
//! itself out for the simulated screen: logical size, orientation, safe-area
//! padding, keyboard insets and the platform it should pretend to run on.

use crate::device::{DeviceConfiguration, EdgeInsets, Orientation, TargetPlatform};
use crate::geometry::Size;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    /// Logical size of the area the UI renders into
    pub size: Size,
    pub orientation: Orientation,
    /// Platform identity (the simulated device's when an override is active)
    pub platform: TargetPlatform,
    /// Areas obscured by system UI
    pub padding: EdgeInsets,
    /// Areas obscured by the on-screen keyboard
    pub view_insets: EdgeInsets,
    /// Name of the simulated device, `None` when not simulating
    pub device: Option<String>,
}

impl RenderContext {
    /// Context for a simulated device screen.
    pub fn simulated(
        device: &DeviceConfiguration,
        orientation: Orientation,
        platform: TargetPlatform,
        keyboard_visible: bool,
    ) -> Self {
        let view_insets = if keyboard_visible {
            device.keyboard_inset(orientation)
        } else {
            EdgeInsets::ZERO
        };
        Self {
            size: device.screen_size(orientation),
            orientation,
            platform,
            padding: device.safe_area(orientation),
            view_insets,
            device: Some(device.name.clone()),
        }
    }

    /// Context for the unsimulated viewport: full size, real platform.
    pub fn passthrough(size: Size, platform: TargetPlatform) -> Self {
        let orientation = if size.width > size.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        Self {
            size,
            orientation,
            platform,
            padding: EdgeInsets::ZERO,
            view_insets: EdgeInsets::ZERO,
            device: None,
        }
    }

    pub fn is_simulated(&self) -> bool {
        self.device.is_some()
    }

    pub fn keyboard_visible(&self) -> bool {
        self.view_insets.bottom > 0.0
    }
}
