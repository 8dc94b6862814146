//! Layout fitting and zoom normalization
//!
//! All sizes here are in logical units (one unit is one "pixel" at
//! [`DEFAULT_PIXELS_PER_INCH`]). The terminal layer converts cells to logical
//! units before calling in.

use serde::{Deserialize, Serialize};

/// Pixel density assumed for the rendered simulator when converting to inches.
pub const DEFAULT_PIXELS_PER_INCH: f64 = 96.0;

/// Tolerance used when deciding whether a freshly computed zoom is new.
pub const ZOOM_EPSILON: f64 = 1e-6;

/// A width/height pair in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width / height`, or 0.0 when the size has no height.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            0.0
        }
    }

    /// True when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// The same size with width and height exchanged.
    pub fn flipped(&self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// Largest rectangle with the device's aspect ratio that fits `available`.
///
/// At least one dimension of the result equals the matching dimension of
/// `available`. Degenerate inputs yield [`Size::ZERO`].
pub fn fit_size(available: Size, device: Size) -> Size {
    if available.is_empty() || device.is_empty() {
        return Size::ZERO;
    }

    let aspect = device.aspect_ratio();
    let width = available.width;
    let height = width / aspect;

    if height > available.height {
        Size::new(available.height * aspect, available.height)
    } else {
        Size::new(width, height)
    }
}

/// Physical area in square inches of a screen with the given aspect ratio
/// and diagonal.
///
/// From `diagonal² = w² + h²` and `aspect = w / h`.
pub fn physical_area(aspect_ratio: f64, diagonal_inches: f64) -> f64 {
    (aspect_ratio / (1.0 + aspect_ratio * aspect_ratio)) * diagonal_inches * diagonal_inches
}

/// Area in square inches of a rendered rectangle at `pixels_per_inch`.
pub fn rendered_area(render: Size, pixels_per_inch: f64) -> f64 {
    if pixels_per_inch <= 0.0 {
        return 0.0;
    }
    (render.width / pixels_per_inch) * (render.height / pixels_per_inch)
}

/// How large the rendered screen appears relative to the real device.
///
/// Returns 0.0 when the physical area is degenerate.
pub fn compute_zoom(
    render: Size,
    pixels_per_inch: f64,
    aspect_ratio: f64,
    diagonal_inches: f64,
) -> f64 {
    let device_area = physical_area(aspect_ratio, diagonal_inches);
    if device_area <= 0.0 || !device_area.is_finite() {
        return 0.0;
    }
    rendered_area(render, pixels_per_inch) / device_area
}

pub fn zoom_changed(current: f64, computed: f64) -> bool {
    (current - computed).abs() > ZOOM_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPS, "{a} != {b}");
    }

    #[test]
    fn test_fit_square_in_square_is_identity() {
        let fitted = fit_size(Size::new(300.0, 300.0), Size::new(100.0, 100.0));
        assert_eq!(fitted, Size::new(300.0, 300.0));
    }

    #[test]
    fn test_fit_tall_device_in_wide_box_touches_height() {
        let fitted = fit_size(Size::new(800.0, 400.0), Size::new(390.0, 844.0));
        assert_close(fitted.height, 400.0);
        assert!(fitted.width < 800.0);
        assert_close(fitted.aspect_ratio(), 390.0 / 844.0);
    }

    #[test]
    fn test_fit_wide_device_in_tall_box_touches_width() {
        let fitted = fit_size(Size::new(300.0, 900.0), Size::new(844.0, 390.0));
        assert_close(fitted.width, 300.0);
        assert!(fitted.height < 900.0);
    }

    #[test]
    fn test_fit_never_exceeds_available_and_keeps_aspect() {
        let boxes = [
            (1.0, 1.0),
            (640.0, 480.0),
            (17.0, 931.0),
            (1920.0, 37.0),
            (0.5, 0.25),
        ];
        let devices = [
            (375.0, 667.0),
            (1024.0, 1366.0),
            (932.0, 430.0),
            (1.0, 3.0),
            (50.0, 50.0),
        ];

        for &(aw, ah) in &boxes {
            for &(dw, dh) in &devices {
                let available = Size::new(aw, ah);
                let device = Size::new(dw, dh);
                let fitted = fit_size(available, device);

                assert!(fitted.width <= aw + EPS, "{fitted:?} wider than {available:?}");
                assert!(fitted.height <= ah + EPS, "{fitted:?} taller than {available:?}");
                assert!((fitted.aspect_ratio() - device.aspect_ratio()).abs() < 1e-6);

                let touches = (fitted.width - aw).abs() < EPS || (fitted.height - ah).abs() < EPS;
                assert!(touches, "{fitted:?} is not maximal within {available:?}");
            }
        }
    }

    #[test]
    fn test_fit_degenerate_inputs_return_zero() {
        assert_eq!(fit_size(Size::ZERO, Size::new(1.0, 2.0)), Size::ZERO);
        assert_eq!(fit_size(Size::new(10.0, 10.0), Size::new(0.0, 5.0)), Size::ZERO);
        assert_eq!(fit_size(Size::new(10.0, 10.0), Size::new(5.0, 0.0)), Size::ZERO);
    }

    #[test]
    fn test_physical_area_square_device() {
        assert_close(physical_area(1.0, 10.0), 50.0);
        assert_close(physical_area(1.0, 4.0), 8.0);
    }

    #[test]
    fn test_physical_area_matches_pythagoras() {
        // 3:4:5 triangle -> 3 x 4 inch screen with 5 inch diagonal
        assert_close(physical_area(3.0 / 4.0, 5.0), 12.0);
        // orientation does not change the area
        assert_close(physical_area(4.0 / 3.0, 5.0), 12.0);
    }

    #[test]
    fn test_rendered_area_uses_density() {
        assert_close(rendered_area(Size::new(96.0, 192.0), 96.0), 2.0);
        assert_close(rendered_area(Size::new(96.0, 96.0), 0.0), 0.0);
    }

    #[test]
    fn test_compute_zoom_real_size_is_one() {
        // a 3x4 inch screen rendered at exactly 3x4 inches
        let render = Size::new(3.0 * 96.0, 4.0 * 96.0);
        let zoom = compute_zoom(render, DEFAULT_PIXELS_PER_INCH, 0.75, 5.0);
        assert_close(zoom, 1.0);
    }

    #[test]
    fn test_compute_zoom_doubles_with_area() {
        let render = Size::new(6.0 * 96.0, 4.0 * 96.0);
        let zoom = compute_zoom(render, DEFAULT_PIXELS_PER_INCH, 0.75, 5.0);
        assert_close(zoom, 2.0);
    }

    #[test]
    fn test_compute_zoom_degenerate_diagonal() {
        assert_eq!(compute_zoom(Size::new(10.0, 10.0), 96.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_zoom_changed_uses_tolerance() {
        assert!(!zoom_changed(1.0, 1.0 + 1e-9));
        assert!(zoom_changed(1.0, 1.01));
    }

    #[test]
    fn test_size_flipped_and_aspect() {
        let size = Size::new(390.0, 844.0);
        assert_eq!(size.flipped(), Size::new(844.0, 390.0));
        assert_eq!(Size::new(10.0, 0.0).aspect_ratio(), 0.0);
    }
}
