use chrono::{DateTime, FixedOffset};

/// Status bar intents.
#[derive(Debug, Clone)]
pub(crate) enum StatusBarIntent {
    /// Wall-clock reading in the local offset.
    Tick { now: DateTime<FixedOffset> },
}

/// Status bar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum StatusBarEvent {
    Intent(StatusBarIntent),
}
