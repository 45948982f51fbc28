use iced::Size;
use iced::task::Handle;

use super::model::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, DeviceClass,
};

/// Observer state: the applied viewport plus the pending debounce.
pub(super) struct BreakpointState {
    size: Size,
    device: DeviceClass,
    hydrated: bool,
    pending: Option<Size>,
    generation: u64,
    timer: Option<Handle>,
}

impl BreakpointState {
    pub(super) fn size(&self) -> Size {
        self.size
    }

    pub(super) fn device(&self) -> DeviceClass {
        self.device
    }

    pub(super) fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub(super) fn generation(&self) -> u64 {
        self.generation
    }

    /// Record a new measurement and return the generation it was tagged
    /// with. The previous timer, if any, is aborted.
    pub(super) fn record_resize(&mut self, size: Size) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(size);
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.generation
    }

    pub(super) fn set_timer(&mut self, timer: Handle) {
        self.timer = Some(timer);
    }

    /// Apply the pending size when `generation` is current.
    ///
    /// Returns the device class to announce: on the first hydration or
    /// whenever the class changes.
    pub(super) fn settle(&mut self, generation: u64) -> Option<DeviceClass> {
        if generation != self.generation {
            return None;
        }
        let size = self.pending.take()?;
        self.timer = None;

        let device = DeviceClass::from_width(size.width);
        let first = !self.hydrated;
        let changed = device != self.device;

        self.size = size;
        self.device = device;
        self.hydrated = true;

        (first || changed).then_some(device)
    }
}

impl Default for BreakpointState {
    fn default() -> Self {
        let size = Size::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT);
        Self {
            size,
            // Desktop until the first measurement settles.
            device: DeviceClass::Desktop,
            hydrated: false,
            pending: None,
            generation: 0,
            timer: None,
        }
    }
}
