mod event;
pub(crate) mod model;
mod reducer;
mod state;

pub(crate) use event::{BreakpointEffect, BreakpointEvent, BreakpointIntent};
use iced::Task;
pub(crate) use model::{BreakpointViewModel, DeviceClass};
use state::BreakpointState;

/// Debounced viewport observer deriving the device class.
pub(crate) struct BreakpointWidget {
    state: BreakpointState,
}

impl BreakpointWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: BreakpointState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: BreakpointIntent,
    ) -> Task<BreakpointEvent> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn vm(&self) -> BreakpointViewModel {
        let size = self.state.size();
        BreakpointViewModel {
            device: self.state.device(),
            width: size.width,
            height: size.height,
            hydrated: self.state.is_hydrated(),
        }
    }

    pub(crate) fn device(&self) -> DeviceClass {
        self.state.device()
    }
}
