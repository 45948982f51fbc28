use iced::Task;

use super::event::{PagesEffect, PagesEvent, PagesIntent};
use super::state::PagesState;
use crate::shared::route::HOME_PATH;

/// Reduce a pages intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut PagesState,
    event: PagesIntent,
) -> Task<PagesEvent> {
    match event {
        PagesIntent::Open { path } => {
            Task::done(PagesEvent::Effect(PagesEffect::Navigate { path }))
        },
        PagesIntent::Reload => {
            if state.reload() {
                Task::done(PagesEvent::Effect(PagesEffect::Reloaded))
            } else {
                Task::none()
            }
        },
        PagesIntent::GoHome => {
            state.clear_fault();
            Task::done(PagesEvent::Effect(PagesEffect::Navigate {
                path: String::from(HOME_PATH),
            }))
        },
        PagesIntent::GoBack => {
            Task::done(PagesEvent::Effect(PagesEffect::Back))
        },
        PagesIntent::OpenAbout => {
            if state.open_about() {
                log::debug!("about modal opened");
            }
            Task::none()
        },
        PagesIntent::CloseAbout => {
            if state.close_about() {
                log::debug!("about modal closed");
            }
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::reduce;
    use crate::shared::content::{Catalog, CatalogError, load_embedded};
    use crate::widgets::pages::PagesIntent;
    use crate::widgets::pages::state::PagesState;

    fn broken() -> Result<Catalog, CatalogError> {
        Catalog::from_json("{ broken")
    }

    static HEALED: AtomicBool = AtomicBool::new(false);

    fn flaky() -> Result<Catalog, CatalogError> {
        if HEALED.load(Ordering::SeqCst) {
            load_embedded()
        } else {
            broken()
        }
    }

    #[test]
    fn given_valid_catalog_when_created_then_no_fault_is_recorded() {
        let state = PagesState::new(load_embedded);

        assert!(state.fault().is_none());
        assert!(!state.catalog().projects.is_empty());
    }

    #[test]
    fn given_broken_catalog_when_created_then_fault_is_recorded() {
        let state = PagesState::new(broken);

        assert!(state.fault().is_some());
        assert!(state.catalog().projects.is_empty());
    }

    #[test]
    fn given_fault_when_go_home_pressed_then_fault_is_cleared() {
        let mut state = PagesState::new(broken);

        let _task = reduce(&mut state, PagesIntent::GoHome);

        assert!(state.fault().is_none());
    }

    #[test]
    fn given_fault_when_reloaded_after_recovery_then_catalog_is_restored() {
        let mut state = PagesState::new(flaky);
        assert!(state.fault().is_some());

        HEALED.store(true, Ordering::SeqCst);
        let _task = reduce(&mut state, PagesIntent::Reload);

        assert!(state.fault().is_none());
        assert!(!state.catalog().projects.is_empty());
    }

    #[test]
    fn given_closed_about_when_opened_then_modal_is_visible() {
        let mut state = PagesState::new(load_embedded);
        assert!(!state.about_open());

        let _task = reduce(&mut state, PagesIntent::OpenAbout);

        assert!(state.about_open());
    }

    #[test]
    fn given_open_about_when_closed_twice_then_modal_stays_hidden() {
        let mut state = PagesState::new(load_embedded);
        let _task = reduce(&mut state, PagesIntent::OpenAbout);

        let _task = reduce(&mut state, PagesIntent::CloseAbout);
        let _task = reduce(&mut state, PagesIntent::CloseAbout);

        assert!(!state.about_open());
    }
}
