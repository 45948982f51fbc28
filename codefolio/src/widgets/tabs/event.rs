use crate::shared::route::Route;

/// Intent events handled by the tab registry.
#[derive(Debug, Clone)]
pub(crate) enum TabsIntent {
    /// Insert the tab for a settled route unless its path is open.
    Ensure { route: Route },
    /// Tab pill pressed.
    Activate { tab_id: String },
    /// Close affordance pressed.
    Close { tab_id: String },
    /// Drop a tab once the redirect away from it has been applied.
    Remove { tab_id: String },
    /// Return to the home-only tab set.
    Reset,
}

/// Effect events produced by the tabs reducer.
#[derive(Debug, Clone)]
pub(crate) enum TabsEffect {
    Added { tab_id: String },
    NavigateRequested { path: String },
    /// The active tab is closing; navigate to `path`, then remove it.
    RedirectRequested { tab_id: String, path: String },
}

/// Tabs event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum TabsEvent {
    Intent(TabsIntent),
    Effect(TabsEffect),
}
