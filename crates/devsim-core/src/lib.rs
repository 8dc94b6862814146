//! # devsim-core - Core Domain Types
//!
//! Foundation crate for the device simulator. Provides device descriptions,
//! the built-in catalog, layout fitting and zoom geometry, the enable gate,
//! the platform-identity override, error handling and logging.
//!
//! This crate has **zero internal dependencies** and knows nothing about
//! terminals; sizes are logical units.
//!
//! ## Public API
//!
//! ### Devices (`device`, `catalog`)
//! - [`DeviceConfiguration`] - Immutable screen/frame/inset description of a device
//! - [`DeviceCatalog`] - Non-empty ordered device list with cyclic selection
//! - [`builtin_devices()`] - Phone and tablet presets
//!
//! ### Geometry (`geometry`)
//! - [`fit_size()`] - Largest aspect-preserving size inside a box
//! - [`compute_zoom()`] - Rendered size relative to the physical device
//!
//! ### Platform (`platform`, `context`)
//! - [`EnablePolicy`], [`resolve_enabled()`] - Whether the simulator draws at all
//! - [`PlatformOverride`] - Platform identity presented to the wrapped UI
//! - [`RenderContext`] - Ambient sizing/orientation/platform context
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `is_fatal()` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use devsim_core::prelude::*;
//! ```

pub mod catalog;
pub mod color;
pub mod context;
pub mod device;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod platform;

/// Prelude for common imports used throughout all simulator crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{builtin_devices, DeviceCatalog};
pub use color::Rgb;
pub use context::RenderContext;
pub use device::{
    ByOrientation, DeviceConfiguration, EdgeInsets, FrameStyle, NotchKind, Orientation,
    TargetPlatform,
};
pub use error::{Error, Result, ResultExt};
pub use geometry::{
    compute_zoom, fit_size, physical_area, rendered_area, zoom_changed, Size,
    DEFAULT_PIXELS_PER_INCH,
};
pub use platform::{
    resolve_enabled, BuildMode, DefaultEnablePolicy, EnablePolicy, HostEnvironment, HostKind,
    PlatformOverride,
};
