use super::model::HISTORY_STACK_LIMIT;
use crate::shared::route::Route;

/// Current route plus browser-style back/forward stacks.
#[derive(Debug)]
pub(super) struct NavigationState {
    current: Route,
    current_path: String,
    back: Vec<Route>,
    forward: Vec<Route>,
}

impl Default for NavigationState {
    fn default() -> Self {
        let current = Route::default();
        Self {
            current_path: current.path(),
            current,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }
}

impl NavigationState {
    pub(super) fn current(&self) -> &Route {
        &self.current
    }

    /// Canonical path of the current route.
    pub(super) fn current_path(&self) -> &str {
        &self.current_path
    }

    pub(super) fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub(super) fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Make `path` current. Returns `None` when it already is.
    pub(super) fn navigate(&mut self, path: &str) -> Option<Route> {
        let route = Route::parse(path);
        if route == self.current {
            return None;
        }

        let previous = self.replace_current(route.clone());
        push_bounded(&mut self.back, previous);
        self.forward.clear();
        Some(route)
    }

    pub(super) fn go_back(&mut self) -> Option<Route> {
        let route = self.back.pop()?;
        let previous = self.replace_current(route.clone());
        push_bounded(&mut self.forward, previous);
        Some(route)
    }

    pub(super) fn go_forward(&mut self) -> Option<Route> {
        let route = self.forward.pop()?;
        let previous = self.replace_current(route.clone());
        push_bounded(&mut self.back, previous);
        Some(route)
    }

    fn replace_current(&mut self, route: Route) -> Route {
        self.current_path = route.path();
        std::mem::replace(&mut self.current, route)
    }
}

fn push_bounded(stack: &mut Vec<Route>, route: Route) {
    stack.push(route);
    if stack.len() > HISTORY_STACK_LIMIT {
        let overflow = stack.len() - HISTORY_STACK_LIMIT;
        stack.drain(..overflow);
    }
}
