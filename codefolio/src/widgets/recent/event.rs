/// Intent events handled by the recent-files widget.
#[derive(Debug, Clone)]
pub(crate) enum RecentIntent {
    /// Read both persisted logs for display.
    Load,
    /// Upsert a settled route into both logs.
    Record { name: String, path: String },
    /// Recent entry pressed.
    Open { path: String },
}

/// Effect events produced by the recent-files reducer.
#[derive(Debug, Clone)]
pub(crate) enum RecentEffect {
    Navigate { path: String },
}

/// Recent-files event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum RecentEvent {
    Intent(RecentIntent),
    Effect(RecentEffect),
}
