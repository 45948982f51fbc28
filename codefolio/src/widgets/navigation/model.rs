/// Maximum number of entries kept on each history stack.
pub(crate) const HISTORY_STACK_LIMIT: usize = 50;

/// Read-only snapshot for the toolbar.
#[derive(Debug, Clone)]
pub(crate) struct NavigationViewModel {
    pub(crate) can_go_back: bool,
    pub(crate) can_go_forward: bool,
}
