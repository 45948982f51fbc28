/// Page intents raised by page actions.
#[derive(Debug, Clone)]
pub(crate) enum PagesIntent {
    Open { path: String },
    Reload,
    GoHome,
    GoBack,
    OpenAbout,
    CloseAbout,
}

/// Page effects consumed by the app router.
#[derive(Debug, Clone)]
pub(crate) enum PagesEffect {
    Navigate { path: String },
    /// Step back through history, or go home when there is none.
    Back,
    Reloaded,
}

/// Pages event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum PagesEvent {
    Intent(PagesIntent),
    Effect(PagesEffect),
}
