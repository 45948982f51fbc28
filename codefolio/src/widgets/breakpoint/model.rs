use std::time::Duration;

pub(crate) const MOBILE_MAX_WIDTH: f32 = 768.0;
pub(crate) const TABLET_MAX_WIDTH: f32 = 1024.0;
pub(crate) const DEFAULT_VIEWPORT_WIDTH: f32 = 1024.0;
pub(crate) const DEFAULT_VIEWPORT_HEIGHT: f32 = 768.0;

/// Quiet period before a resize is applied.
pub(crate) const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Coarse viewport category driving the shell layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub(crate) fn from_width(width: f32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            DeviceClass::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            DeviceClass::Mobile => "Mobile",
            DeviceClass::Tablet => "Tablet",
            DeviceClass::Desktop => "Desktop",
        }
    }
}

/// Read-only snapshot of the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BreakpointViewModel {
    pub(crate) device: DeviceClass,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) hydrated: bool,
}
