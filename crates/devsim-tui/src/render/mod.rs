//! Main render/view function (View in TEA pattern)


use devsim_app::AppState;
use devsim_core::{compute_zoom, RenderContext};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::layout::{self, CellMetrics};
use crate::simulator::HostApp;
use crate::theme::palette;
use crate::widgets::{DeviceFrame, HomeIndicator, KeyboardOverlay, Toolbar, UnsafeAreaOverlay};

/// Where a frame put things
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Toolbar rect, `None` when the simulator is disabled
    pub toolbar: Option<Rect>,
    /// Rect the wrapped UI was drawn into
    pub screen: Rect,
    /// Context the wrapped UI was drawn with
    pub context: RenderContext,
}

/// Render the simulator and the wrapped UI (View function in TEA)
///
/// Simulator state is read-only here: a zoom value that differs from the
/// stored one is queued on the post-render queue instead of being applied.
pub fn view<H: HostApp + ?Sized>(
    frame: &mut Frame,
    state: &mut AppState,
    host: &mut H,
) -> Rendered {
    let area = frame.area();
    let metrics = CellMetrics::from(&state.display);

    // Gate closed: the wrapped UI is all there is
    if !state.enabled {
        let context = state.render_context(metrics.rect_size(area));
        host.render(frame, area, &context);
        return Rendered {
            toolbar: None,
            screen: area,
            context,
        };
    }

    let areas = layout::create(area);
    frame.render_widget(Toolbar::new(state), areas.toolbar);

    let context = state.render_context(metrics.rect_size(areas.stage));
    if !state.is_simulating() {
        host.render(frame, areas.stage, &context);
        return Rendered {
            toolbar: Some(areas.toolbar),
            screen: areas.stage,
            context,
        };
    }

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::rgb(state.background))),
        areas.stage,
    );

    let device = state.current_device();
    let orientation = state.sim.orientation;

    let Some(placement) = layout::device_layout(areas.stage, device, orientation, metrics) else {
        render_too_small(frame, areas.stage);
        return Rendered {
            toolbar: Some(areas.toolbar),
            screen: Rect::default(),
            context,
        };
    };

    frame.render_widget(
        DeviceFrame::new(device, orientation, placement.bezel),
        placement.frame,
    );
    host.render(frame, placement.screen, &context);

    if device.frame.home_indicator {
        frame.render_widget(HomeIndicator, placement.screen);
    }
    if state.sim.keyboard_visible {
        frame.render_widget(KeyboardOverlay::new(&context), placement.screen);
    }
    if state.sim.unsafe_area_visible {
        frame.render_widget(UnsafeAreaOverlay::new(&context), placement.screen);
    }

    let zoom = compute_zoom(
        placement.rendered,
        state.display.pixels_per_inch,
        device.aspect_ratio(orientation),
        device.diagonal_inches,
    );
    state.schedule_zoom(zoom);

    Rendered {
        toolbar: Some(areas.toolbar),
        screen: placement.screen,
        context,
    }
}

fn render_too_small(frame: &mut Frame, stage: Rect) {
    if stage.height == 0 {
        return;
    }
    let y = stage.y + stage.height / 2;
    let line = Rect::new(stage.x, y, stage.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from("Terminal too small for device"))
            .style(Style::default().fg(palette::BEZEL))
            .alignment(Alignment::Center),
        line,
    );
}
