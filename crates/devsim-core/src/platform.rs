//! Host environment, the enable gate, and the platform-identity override
//!
//! Whether the simulator draws at all is a policy decision. The default policy
//! enables it only for debug builds on web or desktop hosts; callers can pass
//! an explicit override or their own [`EnablePolicy`].
//!
//! The platform identity seen by the wrapped UI is an explicit value
//! ([`PlatformOverride`]) carried in the render context rather than a global.

use crate::device::TargetPlatform;

/// Build profile of the running binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Debug
        } else {
            BuildMode::Release
        }
    }
}

/// Broad class of the machine the simulator runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    Web,
    Desktop,
    Mobile,
}

impl HostKind {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            HostKind::Web
        } else if cfg!(any(target_os = "android", target_os = "ios")) {
            HostKind::Mobile
        } else {
            HostKind::Desktop
        }
    }
}

/// Facts about the running process that enable policies inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostEnvironment {
    pub build_mode: BuildMode,
    pub host_kind: HostKind,
    pub platform: TargetPlatform,
}

impl HostEnvironment {
    pub fn current() -> Self {
        Self {
            build_mode: BuildMode::current(),
            host_kind: HostKind::current(),
            platform: TargetPlatform::host(),
        }
    }
}

/// Decides whether the simulator should render for a host environment
pub trait EnablePolicy {
    fn is_enabled(&self, env: &HostEnvironment) -> bool;
}

impl<F> EnablePolicy for F
where
    F: Fn(&HostEnvironment) -> bool,
{
    fn is_enabled(&self, env: &HostEnvironment) -> bool {
        self(env)
    }
}

/// Debug builds on web or desktop; never mobile or release builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEnablePolicy;

impl EnablePolicy for DefaultEnablePolicy {
    fn is_enabled(&self, env: &HostEnvironment) -> bool {
        env.build_mode == BuildMode::Debug
            && matches!(env.host_kind, HostKind::Web | HostKind::Desktop)
    }
}

/// Explicit override wins; otherwise ask the policy.
pub fn resolve_enabled(
    explicit: Option<bool>,
    policy: &dyn EnablePolicy,
    env: &HostEnvironment,
) -> bool {
    explicit.unwrap_or_else(|| policy.is_enabled(env))
}

/// Platform identity presented to the wrapped UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformOverride {
    real: TargetPlatform,
    overridden: Option<TargetPlatform>,
}

impl PlatformOverride {
    pub fn new(real: TargetPlatform) -> Self {
        Self {
            real,
            overridden: None,
        }
    }

    pub fn apply(&mut self, platform: TargetPlatform) {
        self.overridden = Some(platform);
    }

    /// Restore the real platform.
    pub fn clear(&mut self) {
        self.overridden = None;
    }

    pub fn real(&self) -> TargetPlatform {
        self.real
    }

    pub fn overridden(&self) -> Option<TargetPlatform> {
        self.overridden
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden.is_some()
    }

    /// Platform the wrapped UI should behave as.
    pub fn effective(&self) -> TargetPlatform {
        self.overridden.unwrap_or(self.real)
    }
}
