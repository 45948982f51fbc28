use iced::Size;

use super::model::DeviceClass;

/// Intent events handled by the breakpoint observer.
#[derive(Debug, Clone)]
pub(crate) enum BreakpointIntent {
    /// Raw viewport size reported by the window.
    Resized(Size),
    /// Quiet period elapsed for the resize tagged with `generation`.
    Settle { generation: u64 },
}

/// Effect events produced by the breakpoint reducer.
#[derive(Debug, Clone)]
pub(crate) enum BreakpointEffect {
    DeviceClassChanged(DeviceClass),
}

/// Breakpoint event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum BreakpointEvent {
    Intent(BreakpointIntent),
    Effect(BreakpointEffect),
}
