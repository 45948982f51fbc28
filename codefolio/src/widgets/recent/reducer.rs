use iced::Task;

use super::event::{RecentEffect, RecentEvent, RecentIntent};
use super::model::{HISTORY_KEY, RECENT_FILES_KEY, RecentFileEntry};
use super::state::RecentState;

/// Read-only context for recent-files reduction.
pub(crate) struct RecentCtx {
    /// Wall clock in Unix milliseconds.
    pub(crate) now_ms: u64,
}

/// Reduce a recent-files intent. Storage failures are logged and never
/// block navigation.
pub(crate) fn reduce(
    state: &mut RecentState,
    event: RecentIntent,
    ctx: &RecentCtx,
) -> Task<RecentEvent> {
    match event {
        RecentIntent::Load => {
            state.load();
            Task::none()
        },
        RecentIntent::Record { name, path } => {
            let entry = RecentFileEntry {
                name,
                path: path.clone(),
                timestamp: ctx.now_ms,
            };
            if let Err(err) = state.record_recent(entry) {
                log::warn!("failed to persist `{RECENT_FILES_KEY}`: {err}");
            }
            if let Err(err) = state.record_history(path) {
                log::warn!("failed to persist `{HISTORY_KEY}`: {err}");
            }
            Task::none()
        },
        RecentIntent::Open { path } => {
            Task::done(RecentEvent::Effect(RecentEffect::Navigate { path }))
        },
    }
}
