use iced::Task;

use super::event::{TabsEffect, TabsEvent, TabsIntent};
use super::model::tab_for_route;
use super::state::{CloseOutcome, TabsState};
use crate::shared::content::Catalog;

/// Read-only context for tabs reduction.
pub(crate) struct TabsCtx<'a> {
    pub(crate) catalog: &'a Catalog,
    pub(crate) current_path: &'a str,
}

/// Reduce a tabs intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut TabsState,
    event: TabsIntent,
    ctx: &TabsCtx<'_>,
) -> Task<TabsEvent> {
    match event {
        TabsIntent::Ensure { route } => {
            let tab = tab_for_route(&route, ctx.catalog);
            let tab_id = tab.id.clone();
            if state.ensure(tab) {
                Task::done(TabsEvent::Effect(TabsEffect::Added { tab_id }))
            } else {
                Task::none()
            }
        },
        TabsIntent::Activate { tab_id } => match state.find(&tab_id) {
            Some(tab) if tab.path != ctx.current_path => {
                Task::done(TabsEvent::Effect(TabsEffect::NavigateRequested {
                    path: tab.path.clone(),
                }))
            },
            _ => Task::none(),
        },
        TabsIntent::Close { tab_id } => {
            match state.close(&tab_id, ctx.current_path) {
                CloseOutcome::Ignored => Task::none(),
                CloseOutcome::Removed => {
                    log::debug!("tab closed: {tab_id}");
                    Task::none()
                },
                CloseOutcome::Redirect { path } => {
                    Task::done(TabsEvent::Effect(
                        TabsEffect::RedirectRequested { tab_id, path },
                    ))
                },
            }
        },
        TabsIntent::Remove { tab_id } => {
            if state.remove(&tab_id) {
                log::debug!("tab closed after redirect: {tab_id}");
            }
            Task::none()
        },
        TabsIntent::Reset => {
            state.reset();
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{TabsCtx, reduce};
    use crate::shared::content::Catalog;
    use crate::shared::route::Route;
    use crate::widgets::tabs::TabsIntent;
    use crate::widgets::tabs::model::HOME_TAB_ID;
    use crate::widgets::tabs::state::{CloseOutcome, TabsState};

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{"projects": [
                {"slug": "kama-ayurveda", "short_name": "KamaAyurveda",
                 "title": "Kama Ayurveda E-Commerce Platform"}
            ]}"#,
        )
        .expect("test catalog should parse")
    }

    fn ensure(state: &mut TabsState, catalog: &Catalog, path: &str) {
        let ctx = TabsCtx {
            catalog,
            current_path: path,
        };
        let _task = reduce(
            state,
            TabsIntent::Ensure {
                route: Route::parse(path),
            },
            &ctx,
        );
    }

    fn ids(state: &TabsState) -> Vec<&str> {
        state.tabs().iter().map(|tab| tab.id.as_str()).collect()
    }

    #[test]
    fn given_new_registry_when_inspected_then_home_tab_is_first() {
        let state = TabsState::default();
        assert_eq!(ids(&state), vec![HOME_TAB_ID]);
    }

    #[test]
    fn given_same_path_when_ensured_twice_then_tab_is_added_once() {
        let catalog = catalog();
        let mut state = TabsState::default();

        ensure(&mut state, &catalog, "/Skills");
        ensure(&mut state, &catalog, "/Skills");
        ensure(&mut state, &catalog, "/");

        assert_eq!(ids(&state), vec!["home", "skills"]);
    }

    #[test]
    fn given_home_tab_when_closed_then_request_is_rejected() {
        let mut state = TabsState::default();

        assert_eq!(state.close(HOME_TAB_ID, "/"), CloseOutcome::Ignored);
        assert_eq!(state.close(HOME_TAB_ID, "/Skills"), CloseOutcome::Ignored);
        assert!(!state.remove(HOME_TAB_ID));
        state.reset();
        assert_eq!(ids(&state), vec![HOME_TAB_ID]);
    }

    #[test]
    fn given_unknown_id_when_closed_then_nothing_changes() {
        let catalog = catalog();
        let mut state = TabsState::default();
        ensure(&mut state, &catalog, "/Skills");

        assert_eq!(state.close("nope", "/Skills"), CloseOutcome::Ignored);
        assert_eq!(ids(&state), vec!["home", "skills"]);
    }

    #[test]
    fn given_inactive_tab_when_closed_then_it_is_removed_immediately() {
        let catalog = catalog();
        let mut state = TabsState::default();
        ensure(&mut state, &catalog, "/Skills");
        ensure(&mut state, &catalog, "/Projects/kama-ayurveda");

        let outcome = state.close("skills", "/Projects/kama-ayurveda");

        assert_eq!(outcome, CloseOutcome::Removed);
        assert_eq!(ids(&state), vec!["home", "project-kama-ayurveda"]);
    }

    #[test]
    fn given_active_tab_when_closed_then_redirect_targets_preceding_tab() {
        let catalog = catalog();
        let mut state = TabsState::default();
        ensure(&mut state, &catalog, "/Skills");
        ensure(&mut state, &catalog, "/Projects");
        ensure(&mut state, &catalog, "/Email");

        let outcome = state.close("projects", "/Projects");

        assert_eq!(
            outcome,
            CloseOutcome::Redirect {
                path: String::from("/Skills"),
            }
        );
        // Removal waits for the redirect to be applied.
        assert_eq!(ids(&state), vec!["home", "skills", "projects", "email"]);

        assert!(state.remove("projects"));
        assert_eq!(ids(&state), vec!["home", "skills", "email"]);
    }

    #[test]
    fn given_active_tab_directly_after_home_when_closed_then_home_is_target() {
        let catalog = catalog();
        let mut state = TabsState::default();
        ensure(&mut state, &catalog, "/Email");

        assert_eq!(
            state.close("email", "/Email"),
            CloseOutcome::Redirect {
                path: String::from("/"),
            }
        );
    }
}
