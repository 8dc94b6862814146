//! Device catalog: built-in presets and the non-empty device list

use crate::device::{
    ByOrientation, DeviceConfiguration, EdgeInsets, FrameStyle, NotchKind, TargetPlatform,
};
use crate::error::{Error, Result};
use crate::geometry::Size;

/// Built-in phone and tablet presets. The first entry is the default device.
pub fn builtin_devices() -> Vec<DeviceConfiguration> {
    vec![
        iphone_14(),
        iphone_se(),
        iphone_14_pro_max(),
        pixel_7(),
        galaxy_s23(),
        ipad_mini(),
        ipad_pro_12_9(),
    ]
}

pub fn iphone_se() -> DeviceConfiguration {
    DeviceConfiguration {
        name: "iPhone SE".to_string(),
        platform: TargetPlatform::Ios,
        screen: Size::new(375.0, 667.0),
        diagonal_inches: 4.7,
        frame: FrameStyle {
            bezel: 16.0,
            notch: NotchKind::None,
            home_indicator: false,
        },
        safe_areas: ByOrientation::new(EdgeInsets::new(20.0, 0.0, 0.0, 0.0), EdgeInsets::ZERO),
        keyboard_height: ByOrientation::new(216.0, 162.0),
    }
}

pub fn iphone_14() -> DeviceConfiguration {
    DeviceConfiguration {
        name: "iPhone 14".to_string(),
        platform: TargetPlatform::Ios,
        screen: Size::new(390.0, 844.0),
        diagonal_inches: 6.1,
        frame: FrameStyle {
            bezel: 12.0,
            notch: NotchKind::Notch,
            home_indicator: true,
        },
        safe_areas: ByOrientation::new(
            EdgeInsets::new(47.0, 0.0, 34.0, 0.0),
            EdgeInsets::new(0.0, 47.0, 21.0, 47.0),
        ),
        keyboard_height: ByOrientation::new(291.0, 209.0),
    }
}

pub fn iphone_14_pro_max() -> DeviceConfiguration {
    DeviceConfiguration {
        name: "iPhone 14 Pro Max".to_string(),
        platform: TargetPlatform::Ios,
        screen: Size::new(430.0, 932.0),
        diagonal_inches: 6.7,
        frame: FrameStyle {
            bezel: 12.0,
            notch: NotchKind::DynamicIsland,
            home_indicator: true,
        },
        safe_areas: ByOrientation::new(
            EdgeInsets::new(59.0, 0.0, 34.0, 0.0),
            EdgeInsets::new(0.0, 59.0, 21.0, 59.0),
        ),
        keyboard_height: ByOrientation::new(301.0, 209.0),
    }
}

pub fn pixel_7() -> DeviceConfiguration {
    DeviceConfiguration {
        name: "Pixel 7".to_string(),
        platform: TargetPlatform::Android,
        screen: Size::new(412.0, 915.0),
        diagonal_inches: 6.3,
        frame: FrameStyle {
            bezel: 10.0,
            notch: NotchKind::PunchHole,
            home_indicator: true,
        },
        safe_areas: ByOrientation::new(
            EdgeInsets::new(24.0, 0.0, 16.0, 0.0),
            EdgeInsets::new(0.0, 0.0, 16.0, 24.0),
        ),
        keyboard_height: ByOrientation::new(280.0, 190.0),
    }
}

pub fn galaxy_s23() -> DeviceConfiguration {
    DeviceConfiguration {
        name: "Galaxy S23".to_string(),
        platform: TargetPlatform::Android,
        screen: Size::new(360.0, 780.0),
        diagonal_inches: 6.1,
        frame: FrameStyle {
            bezel: 8.0,
            notch: NotchKind::PunchHole,
            home_indicator: false,
        },
        safe_areas: ByOrientation::new(
            EdgeInsets::new(24.0, 0.0, 48.0, 0.0),
            EdgeInsets::new(0.0, 48.0, 0.0, 24.0),
        ),
        keyboard_height: ByOrientation::new(270.0, 180.0),
    }
}

pub fn ipad_mini() -> DeviceConfiguration {
    DeviceConfiguration {
        name: "iPad mini".to_string(),
        platform: TargetPlatform::Ios,
        screen: Size::new(744.0, 1133.0),
        diagonal_inches: 8.3,
        frame: FrameStyle {
            bezel: 20.0,
            notch: NotchKind::None,
            home_indicator: true,
        },
        safe_areas: ByOrientation::new(
            EdgeInsets::new(24.0, 0.0, 20.0, 0.0),
            EdgeInsets::new(24.0, 0.0, 20.0, 0.0),
        ),
        keyboard_height: ByOrientation::new(313.0, 398.0),
    }
}

pub fn ipad_pro_12_9() -> DeviceConfiguration {
    DeviceConfiguration {
        name: "iPad Pro 12.9\"".to_string(),
        platform: TargetPlatform::Ios,
        screen: Size::new(1024.0, 1366.0),
        diagonal_inches: 12.9,
        frame: FrameStyle {
            bezel: 24.0,
            notch: NotchKind::None,
            home_indicator: true,
        },
        safe_areas: ByOrientation::new(
            EdgeInsets::new(24.0, 0.0, 20.0, 0.0),
            EdgeInsets::new(24.0, 0.0, 20.0, 0.0),
        ),
        keyboard_height: ByOrientation::new(378.0, 471.0),
    }
}

/// Ordered, non-empty list of simulated devices.
///
/// The first entry is the initial selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceCatalog {
    devices: Vec<DeviceConfiguration>,
}

impl DeviceCatalog {
    /// Build a catalog, rejecting an empty list or any invalid device.
    pub fn new(devices: Vec<DeviceConfiguration>) -> Result<Self> {
        if devices.is_empty() {
            return Err(Error::EmptyDeviceList);
        }
        for device in &devices {
            device.validate()?;
        }
        Ok(Self { devices })
    }

    pub fn builtin() -> Self {
        Self {
            devices: builtin_devices(),
        }
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Never true for a catalog built through [`DeviceCatalog::new`].
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DeviceConfiguration> {
        self.devices.get(index)
    }

    pub fn first(&self) -> &DeviceConfiguration {
        &self.devices[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeviceConfiguration> {
        self.devices.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.devices.iter().map(|d| d.name.as_str()).collect()
    }

    /// Index of the device whose name matches, ignoring ASCII case.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.devices
            .iter()
            .position(|d| d.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Index that follows `index`, wrapping to the first device.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.devices.len()
    }
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
