//! Screen layout calculation
//!
//! Splits the terminal into the toolbar and the stage, and places the
//! device frame and screen inside the stage.

use devsim_app::config::DisplaySettings;
use devsim_core::{fit_size, DeviceConfiguration, Orientation, Size};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Toolbar height including its border
pub const TOOLBAR_HEIGHT: u16 = 3;

/// Horizontal gap between the stage edge and the device frame
const STAGE_MARGIN_X: u16 = 2;

/// Screen areas for the simulator chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub toolbar: Rect,
    pub stage: Rect,
}

/// Create the toolbar/stage split
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TOOLBAR_HEIGHT), Constraint::Min(0)])
        .split(area);

    ScreenAreas {
        toolbar: chunks[0],
        stage: chunks[1],
    }
}

/// Logical size of a terminal cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width: f64,
    pub height: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::from(&DisplaySettings::default())
    }
}

impl From<&DisplaySettings> for CellMetrics {
    fn from(display: &DisplaySettings) -> Self {
        Self {
            width: display.cell_width_px,
            height: display.cell_height_px,
        }
    }
}

impl CellMetrics {
    /// Logical size covered by a block of cells
    pub fn to_logical(&self, cols: u16, rows: u16) -> Size {
        Size::new(f64::from(cols) * self.width, f64::from(rows) * self.height)
    }

    /// Logical size covered by a rect
    pub fn rect_size(&self, rect: Rect) -> Size {
        self.to_logical(rect.width, rect.height)
    }

    /// Whole cells that fit inside a logical size (never fewer than one)
    pub fn to_cells(&self, size: Size) -> (u16, u16) {
        (
            whole_cells(size.width, self.width),
            whole_cells(size.height, self.height),
        )
    }

    /// Cells spanned by a bezel thickness; a visible frame needs at least one.
    pub fn bezel_cells(&self, bezel: f64) -> (u16, u16) {
        (
            rounded_cells(bezel, self.width).max(1),
            rounded_cells(bezel, self.height).max(1),
        )
    }
}

fn whole_cells(logical: f64, cell: f64) -> u16 {
    if !(logical.is_finite() && cell > 0.0) {
        return 1;
    }
    // absorb float error so an exact fit doesn't lose a cell
    let cells = (logical / cell + 1e-6).floor();
    cells.clamp(1.0, f64::from(u16::MAX)) as u16
}

fn rounded_cells(logical: f64, cell: f64) -> u16 {
    if !(logical.is_finite() && cell > 0.0) {
        return 0;
    }
    (logical / cell).round().clamp(0.0, f64::from(u16::MAX)) as u16
}

/// Placement of a simulated device inside the stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceLayout {
    /// Outer rect including the bezel
    pub frame: Rect,
    /// Screen rect the wrapped UI renders into
    pub screen: Rect,
    /// Bezel thickness in cells (columns, rows)
    pub bezel: (u16, u16),
    /// Logical size the screen is actually rendered at
    pub rendered: Size,
}

/// Fit a device into the stage, preserving its screen aspect ratio.
///
/// Returns `None` when the stage is too small to show any screen cells.
pub fn device_layout(
    stage: Rect,
    device: &DeviceConfiguration,
    orientation: Orientation,
    metrics: CellMetrics,
) -> Option<DeviceLayout> {
    let (bezel_x, bezel_y) = metrics.bezel_cells(device.frame.bezel);

    let available_cols = stage
        .width
        .checked_sub(bezel_x.saturating_add(STAGE_MARGIN_X).saturating_mul(2))
        .filter(|c| *c > 0)?;
    let available_rows = stage.height.checked_sub(bezel_y.saturating_mul(2)).filter(|r| *r > 0)?;

    let available = metrics.to_logical(available_cols, available_rows);
    let fitted = fit_size(available, device.screen_size(orientation));
    if fitted.is_empty() {
        return None;
    }

    let (cols, rows) = metrics.to_cells(fitted);
    let cols = cols.min(available_cols);
    let rows = rows.min(available_rows);

    let screen = Rect::new(
        stage.x + (stage.width - cols) / 2,
        stage.y + (stage.height - rows) / 2,
        cols,
        rows,
    );
    let frame = Rect::new(
        screen.x - bezel_x,
        screen.y - bezel_y,
        cols + 2 * bezel_x,
        rows + 2 * bezel_y,
    );

    Some(DeviceLayout {
        frame,
        screen,
        bezel: (bezel_x, bezel_y),
        rendered: metrics.to_logical(cols, rows),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use devsim_core::catalog::{ipad_pro_12_9, iphone_14};

    #[test]
    fn test_create_splits_toolbar_and_stage() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.toolbar.height, TOOLBAR_HEIGHT);
        assert_eq!(areas.stage.y, TOOLBAR_HEIGHT);
        assert_eq!(areas.stage.height, 24 - TOOLBAR_HEIGHT);
        assert_eq!(areas.stage.width, 80);
    }

    #[test]
    fn test_cell_metrics_round_trip_exact_sizes() {
        let metrics = CellMetrics::default();
        let size = metrics.to_logical(40, 20);
        assert_eq!(size, Size::new(320.0, 320.0));
        assert_eq!(metrics.to_cells(size), (40, 20));
    }

    #[test]
    fn test_to_cells_never_zero() {
        let metrics = CellMetrics::default();
        assert_eq!(metrics.to_cells(Size::new(1.0, 1.0)), (1, 1));
    }

    #[test]
    fn test_bezel_cells_at_least_one() {
        let metrics = CellMetrics::default();
        assert_eq!(metrics.bezel_cells(0.0), (1, 1));
        assert_eq!(metrics.bezel_cells(12.0), (2, 1));
        assert_eq!(metrics.bezel_cells(32.0), (4, 2));
    }

    #[test]
    fn test_device_layout_fits_inside_stage() {
        let stage = Rect::new(0, 3, 80, 21);
        let layout = device_layout(
            stage,
            &iphone_14(),
            Orientation::Portrait,
            CellMetrics::default(),
        )
        .unwrap();

        assert!(stage.contains(layout.frame.as_position()));
        assert!(layout.frame.right() <= stage.right());
        assert!(layout.frame.bottom() <= stage.bottom());
        assert_eq!(layout.screen.x, layout.frame.x + layout.bezel.0);
        assert_eq!(layout.screen.y, layout.frame.y + layout.bezel.1);
    }

    #[test]
    fn test_device_layout_tall_device_is_height_bound() {
        let stage = Rect::new(0, 0, 120, 30);
        let layout = device_layout(
            stage,
            &iphone_14(),
            Orientation::Portrait,
            CellMetrics::default(),
        )
        .unwrap();

        // 30 rows minus one bezel row on each side
        assert_eq!(layout.screen.height, 28);
        assert!(layout.rendered.width <= layout.rendered.height);
    }

    #[test]
    fn test_device_layout_preserves_aspect_approximately() {
        let stage = Rect::new(0, 0, 200, 60);
        let device = ipad_pro_12_9();
        let layout = device_layout(
            stage,
            &device,
            Orientation::Landscape,
            CellMetrics::default(),
        )
        .unwrap();

        let expected = device.aspect_ratio(Orientation::Landscape);
        let actual = layout.rendered.aspect_ratio();
        assert!((actual - expected).abs() / expected < 0.1);
    }

    #[test]
    fn test_device_layout_is_centered() {
        let stage = Rect::new(0, 0, 100, 30);
        let layout = device_layout(
            stage,
            &iphone_14(),
            Orientation::Portrait,
            CellMetrics::default(),
        )
        .unwrap();

        let left = layout.frame.x - stage.x;
        let right = stage.right() - layout.frame.right();
        assert!(left.abs_diff(right) <= 1);
    }

    #[test]
    fn test_device_layout_too_small() {
        let metrics = CellMetrics::default();
        let device = iphone_14();
        assert!(device_layout(Rect::new(0, 0, 4, 10), &device, Orientation::Portrait, metrics)
            .is_none());
        assert!(device_layout(Rect::new(0, 0, 40, 2), &device, Orientation::Portrait, metrics)
            .is_none());
    }
}
