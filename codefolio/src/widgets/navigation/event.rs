use crate::shared::route::Route;

/// Intent events handled by the navigation widget.
#[derive(Debug, Clone)]
pub(crate) enum NavigationIntent {
    Navigate { path: String },
    Back,
    Forward,
}

/// Effect events produced by the navigation reducer.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEffect {
    /// The current route changed and side channels should run.
    Settled { route: Route },
}

/// Navigation event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    Intent(NavigationIntent),
    Effect(NavigationEffect),
}
