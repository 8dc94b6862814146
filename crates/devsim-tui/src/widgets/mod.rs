//! Custom widget components

mod device_frame;
pub mod screen;
pub mod toolbar;

pub use device_frame::{screen_area, DeviceFrame};
pub use screen::{HomeIndicator, KeyboardOverlay, UnsafeAreaOverlay};
pub use toolbar::{Toolbar, ToolbarButton};
