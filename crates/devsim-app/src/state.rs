//! Simulator state (Model in TEA pattern)

use devsim_core::prelude::*;
use devsim_core::{
    resolve_enabled, zoom_changed, DefaultEnablePolicy, DeviceCatalog, DeviceConfiguration,
    EnablePolicy, HostEnvironment, Orientation, PlatformOverride, RenderContext, Rgb, Size,
};

use crate::config::{resolve_devices, DisplaySettings, Settings};
use crate::post_render::{PostRenderQueue, PostRenderTask};

/// Lifecycle of the simulator loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Toolbar-controlled simulator state
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorState {
    /// Index into the device catalog
    pub device_index: usize,
    pub orientation: Orientation,
    /// The toolbar's on/off switch
    pub simulation_on: bool,
    pub keyboard_visible: bool,
    pub unsafe_area_visible: bool,
    /// Zoom computed by the last render pass
    pub zoom: f64,
    /// Multiplier captured by calibration
    pub zoom_correction: f64,
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self {
            device_index: 0,
            orientation: Orientation::Portrait,
            simulation_on: true,
            keyboard_visible: false,
            unsafe_area_visible: false,
            zoom: 1.0,
            zoom_correction: 1.0,
        }
    }
}

impl SimulatorState {
    /// Zoom as shown to the user: `zoom × correction`.
    pub fn displayed_zoom(&self) -> f64 {
        self.zoom * self.zoom_correction
    }
}

/// Construction-time configuration for a simulator
#[derive(Debug, Clone)]
pub struct SimulatorOptions {
    /// Devices to cycle through; the first is selected initially
    pub devices: Vec<DeviceConfiguration>,
    pub background: Rgb,
    /// Explicit on/off; `None` defers to the enable policy
    pub enabled: Option<bool>,
    /// Device to select at startup instead of the first
    pub initial_device: Option<String>,
    pub display: DisplaySettings,
}

impl SimulatorOptions {
    pub fn new(devices: Vec<DeviceConfiguration>) -> Self {
        Self {
            devices,
            background: Rgb::default(),
            enabled: None,
            initial_device: None,
            display: DisplaySettings::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            devices: resolve_devices(&settings.devices),
            background: settings.simulator.background,
            enabled: settings.simulator.enabled,
            initial_device: settings.simulator.initial_device.clone(),
            display: settings.display,
        }
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    pub fn with_enabled(mut self, enabled: Option<bool>) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_initial_device(mut self, name: impl Into<String>) -> Self {
        self.initial_device = Some(name.into());
        self
    }

    pub fn with_display(mut self, display: DisplaySettings) -> Self {
        self.display = display;
        self
    }
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        Self::new(devsim_core::builtin_devices())
    }
}

/// Complete simulator state
#[derive(Debug)]
pub struct AppState {
    pub catalog: DeviceCatalog,
    pub sim: SimulatorState,
    pub background: Rgb,
    pub display: DisplaySettings,

    /// Result of the enable gate; fixed for the lifetime of the simulator
    pub enabled: bool,

    /// Platform identity presented to the wrapped UI
    pub platform: PlatformOverride,

    /// State changes discovered during rendering
    pub post_render: PostRenderQueue,

    pub phase: AppPhase,
}

impl AppState {
    /// Create state for the current host using the default enable policy.
    pub fn new(options: SimulatorOptions) -> Result<Self> {
        Self::with_policy(options, &DefaultEnablePolicy, &HostEnvironment::current())
    }

    /// Create state with an explicit enable policy and host environment.
    ///
    /// Fails when the device list is empty or holds an invalid device.
    pub fn with_policy(
        options: SimulatorOptions,
        policy: &dyn EnablePolicy,
        env: &HostEnvironment,
    ) -> Result<Self> {
        let catalog = DeviceCatalog::new(options.devices)?;
        let enabled = resolve_enabled(options.enabled, policy, env);

        let mut sim = SimulatorState::default();
        if let Some(name) = options.initial_device.as_deref() {
            match catalog.position(name) {
                Some(index) => sim.device_index = index,
                None => warn!(
                    "{}; starting with {}",
                    Error::unknown_device(name),
                    catalog.first().name
                ),
            }
        }

        let mut state = Self {
            catalog,
            sim,
            background: options.background,
            display: options.display,
            enabled,
            platform: PlatformOverride::new(env.platform),
            post_render: PostRenderQueue::new(),
            phase: AppPhase::Running,
        };
        state.sync_platform_override();

        info!(
            "Simulator {} with {} devices, initial device {}",
            if enabled { "enabled" } else { "disabled" },
            state.catalog.len(),
            state.current_device().name
        );

        Ok(state)
    }

    pub fn current_device(&self) -> &DeviceConfiguration {
        // device_index is only ever set from catalog positions or next_index
        self.catalog
            .get(self.sim.device_index)
            .unwrap_or_else(|| self.catalog.first())
    }

    /// True when the device frame should be drawn.
    pub fn is_simulating(&self) -> bool {
        self.enabled && self.sim.simulation_on
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    // ─────────────────────────────────────────────────────────
    // Toolbar transitions
    // ─────────────────────────────────────────────────────────

    pub fn toggle_simulation(&mut self) {
        self.sim.simulation_on = !self.sim.simulation_on;
        self.sync_platform_override();
    }

    pub fn next_device(&mut self) {
        self.sim.device_index = self.catalog.next_index(self.sim.device_index);
        self.sync_platform_override();
    }

    pub fn toggle_orientation(&mut self) {
        self.sim.orientation = self.sim.orientation.toggled();
    }

    pub fn toggle_keyboard(&mut self) {
        self.sim.keyboard_visible = !self.sim.keyboard_visible;
    }

    pub fn toggle_unsafe_area(&mut self) {
        self.sim.unsafe_area_visible = !self.sim.unsafe_area_visible;
    }

    /// Make the current apparent size read as zoom 1.0.
    ///
    /// Returns false (and leaves the correction alone) when no zoom has been
    /// computed yet.
    pub fn calibrate_zoom(&mut self) -> bool {
        if self.sim.zoom <= 0.0 || !self.sim.zoom.is_finite() {
            return false;
        }
        self.sim.zoom_correction = 1.0 / self.sim.zoom;
        true
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.sim.zoom = zoom;
    }

    /// Point the platform identity at the current device while simulating,
    /// and back at the real platform otherwise.
    pub fn sync_platform_override(&mut self) {
        if self.is_simulating() {
            let platform = self.current_device().platform;
            self.platform.apply(platform);
        } else {
            self.platform.clear();
        }
    }

    // ─────────────────────────────────────────────────────────
    // Render support
    // ─────────────────────────────────────────────────────────

    /// Context for the wrapped UI.
    ///
    /// `viewport` is the logical size of the area the UI is drawn into when
    /// not simulating.
    pub fn render_context(&self, viewport: Size) -> RenderContext {
        if self.is_simulating() {
            RenderContext::simulated(
                self.current_device(),
                self.sim.orientation,
                self.platform.effective(),
                self.sim.keyboard_visible,
            )
        } else {
            RenderContext::passthrough(viewport, self.platform.effective())
        }
    }

    /// Record a zoom computed mid-render; applied after the frame is drawn.
    pub fn schedule_zoom(&mut self, computed: f64) {
        if zoom_changed(self.sim.zoom, computed) {
            trace!("Scheduling zoom update {:.3} -> {:.3}", self.sim.zoom, computed);
            self.post_render.schedule(PostRenderTask::SetZoom(computed));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devsim_core::catalog::{iphone_se, pixel_7};
    use devsim_core::{BuildMode, HostKind, TargetPlatform};

    fn desktop_debug() -> HostEnvironment {
        HostEnvironment {
            build_mode: BuildMode::Debug,
            host_kind: HostKind::Desktop,
            platform: TargetPlatform::Linux,
        }
    }

    fn two_device_state() -> AppState {
        AppState::with_policy(
            SimulatorOptions::new(vec![pixel_7(), iphone_se()]),
            &DefaultEnablePolicy,
            &desktop_debug(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_device_list_is_fatal() {
        let err = AppState::with_policy(
            SimulatorOptions::new(Vec::new()),
            &DefaultEnablePolicy,
            &desktop_debug(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyDeviceList));
    }

    #[test]
    fn test_zero_diagonal_device_is_rejected() {
        let mut broken = iphone_se();
        broken.diagonal_inches = 0.0;
        let err = AppState::with_policy(
            SimulatorOptions::new(vec![pixel_7(), broken]),
            &DefaultEnablePolicy,
            &desktop_debug(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidDevice { .. }));
    }

    #[test]
    fn test_defaults_on_mount() {
        let state = two_device_state();
        assert_eq!(state.sim.device_index, 0);
        assert_eq!(state.sim.orientation, Orientation::Portrait);
        assert!(state.sim.simulation_on);
        assert!(!state.sim.keyboard_visible);
        assert!(!state.sim.unsafe_area_visible);
        assert!(state.enabled);
        assert_eq!(state.current_device().name, "Pixel 7");
        assert_eq!(state.platform.effective(), TargetPlatform::Android);
    }

    #[test]
    fn test_initial_device_by_name() {
        let options = SimulatorOptions::new(vec![pixel_7(), iphone_se()])
            .with_initial_device("iphone se");
        let state =
            AppState::with_policy(options, &DefaultEnablePolicy, &desktop_debug()).unwrap();
        assert_eq!(state.current_device().name, "iPhone SE");
        assert_eq!(state.platform.effective(), TargetPlatform::Ios);
    }

    #[test]
    fn test_unknown_initial_device_falls_back_to_first() {
        let options =
            SimulatorOptions::new(vec![pixel_7(), iphone_se()]).with_initial_device("Nokia");
        let state =
            AppState::with_policy(options, &DefaultEnablePolicy, &desktop_debug()).unwrap();
        assert_eq!(state.sim.device_index, 0);
    }

    #[test]
    fn test_disabled_gate_never_overrides_platform() {
        let options = SimulatorOptions::new(vec![iphone_se()]).with_enabled(Some(false));
        let mut state =
            AppState::with_policy(options, &DefaultEnablePolicy, &desktop_debug()).unwrap();
        assert!(!state.is_simulating());
        assert!(!state.platform.is_overridden());

        state.next_device();
        assert_eq!(state.platform.effective(), TargetPlatform::Linux);
    }

    #[test]
    fn test_release_build_disabled_by_default() {
        let env = HostEnvironment {
            build_mode: BuildMode::Release,
            ..desktop_debug()
        };
        let state =
            AppState::with_policy(SimulatorOptions::default(), &DefaultEnablePolicy, &env)
                .unwrap();
        assert!(!state.enabled);
    }

    #[test]
    fn test_displayed_zoom_after_calibration_is_one() {
        let mut state = two_device_state();
        for zoom in [0.25, 1.0, 1.7, 3.333] {
            state.set_zoom(zoom);
            assert!(state.calibrate_zoom());
            assert!((state.sim.displayed_zoom() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_calibration_replaces_correction() {
        let mut state = two_device_state();
        state.set_zoom(2.0);
        state.calibrate_zoom();
        state.set_zoom(4.0);
        state.calibrate_zoom();
        assert_eq!(state.sim.zoom_correction, 0.25);
    }

    #[test]
    fn test_calibration_ignores_zero_zoom() {
        let mut state = two_device_state();
        state.set_zoom(0.0);
        assert!(!state.calibrate_zoom());
        assert_eq!(state.sim.zoom_correction, 1.0);
    }

    #[test]
    fn test_schedule_zoom_only_when_changed() {
        let mut state = two_device_state();
        state.schedule_zoom(1.0);
        assert!(state.post_render.is_empty());

        state.schedule_zoom(1.25);
        assert_eq!(state.post_render.len(), 1);
        // state itself is untouched until the queue is drained
        assert_eq!(state.sim.zoom, 1.0);
    }

    #[test]
    fn test_render_context_follows_simulation_switch() {
        let mut state = two_device_state();
        let viewport = Size::new(640.0, 480.0);

        let ctx = state.render_context(viewport);
        assert_eq!(ctx.size, pixel_7().screen);
        assert_eq!(ctx.platform, TargetPlatform::Android);

        state.toggle_simulation();
        let ctx = state.render_context(viewport);
        assert_eq!(ctx.size, viewport);
        assert_eq!(ctx.platform, TargetPlatform::Linux);
        assert!(!ctx.is_simulated());
    }
}
