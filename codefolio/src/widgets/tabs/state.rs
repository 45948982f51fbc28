use super::model::Tab;

/// Outcome of a close request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum CloseOutcome {
    /// Home tab or unknown id.
    Ignored,
    Removed,
    /// Active tab; the shell must navigate to `path` before removal.
    Redirect { path: String },
}

/// Ordered set of open tabs. The home tab is always first.
#[derive(Debug)]
pub(super) struct TabsState {
    tabs: Vec<Tab>,
}

impl Default for TabsState {
    fn default() -> Self {
        Self {
            tabs: vec![Tab::home()],
        }
    }
}

impl TabsState {
    pub(super) fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub(super) fn find(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == tab_id)
    }

    pub(super) fn find_by_path(&self, path: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.path == path)
    }

    /// Append `tab` unless a tab with the same path or id is open.
    pub(super) fn ensure(&mut self, tab: Tab) -> bool {
        if self
            .tabs
            .iter()
            .any(|open| open.path == tab.path || open.id == tab.id)
        {
            return false;
        }
        self.tabs.push(tab);
        true
    }

    pub(super) fn close(
        &mut self,
        tab_id: &str,
        current_path: &str,
    ) -> CloseOutcome {
        let Some(index) = self.tabs.iter().position(|tab| tab.id == tab_id)
        else {
            return CloseOutcome::Ignored;
        };
        if self.tabs[index].is_home() {
            return CloseOutcome::Ignored;
        }

        if self.tabs[index].path != current_path {
            self.tabs.remove(index);
            return CloseOutcome::Removed;
        }

        let target = if index > 0 {
            self.tabs.get(index - 1)
        } else {
            self.tabs.iter().rev().find(|tab| tab.id != tab_id)
        };

        match target {
            Some(tab) => CloseOutcome::Redirect {
                path: tab.path.clone(),
            },
            None => {
                self.tabs.remove(index);
                CloseOutcome::Removed
            },
        }
    }

    /// Remove a non-home tab regardless of activity.
    pub(super) fn remove(&mut self, tab_id: &str) -> bool {
        let before = self.tabs.len();
        self.tabs.retain(|tab| tab.is_home() || tab.id != tab_id);
        self.tabs.len() != before
    }

    pub(super) fn reset(&mut self) {
        self.tabs.retain(Tab::is_home);
    }
}
