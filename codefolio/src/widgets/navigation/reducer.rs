use iced::Task;

use super::event::{NavigationEffect, NavigationEvent, NavigationIntent};
use super::state::NavigationState;

/// Reduce a navigation intent. The route changes synchronously; the
/// returned task carries the settle notification.
pub(crate) fn reduce(
    state: &mut NavigationState,
    event: NavigationIntent,
) -> Task<NavigationEvent> {
    let settled = match event {
        NavigationIntent::Navigate { path } => state.navigate(&path),
        NavigationIntent::Back => state.go_back(),
        NavigationIntent::Forward => state.go_forward(),
    };

    match settled {
        Some(route) => Task::done(NavigationEvent::Effect(
            NavigationEffect::Settled { route },
        )),
        None => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::reduce;
    use crate::shared::route::Route;
    use crate::widgets::navigation::NavigationIntent;
    use crate::widgets::navigation::model::HISTORY_STACK_LIMIT;
    use crate::widgets::navigation::state::NavigationState;

    fn navigate(state: &mut NavigationState, path: &str) {
        let _task = reduce(
            state,
            NavigationIntent::Navigate {
                path: String::from(path),
            },
        );
    }

    #[test]
    fn given_new_state_when_inspected_then_home_is_current() {
        let state = NavigationState::default();
        assert_eq!(state.current(), &Route::Home);
        assert!(!state.can_go_back());
    }

    #[test]
    fn given_navigation_when_reduced_then_route_changes_synchronously() {
        let mut state = NavigationState::default();

        navigate(&mut state, "/Skills");

        assert_eq!(state.current(), &Route::Skills);
        assert_eq!(state.current_path(), "/Skills");
        assert!(state.can_go_back());
    }

    #[test]
    fn given_current_path_when_navigated_again_then_nothing_changes() {
        let mut state = NavigationState::default();
        navigate(&mut state, "/Skills");

        assert!(state.navigate("/Skills").is_none());
        assert!(state.navigate("/Skills/").is_none());
    }

    #[test]
    fn given_history_when_going_back_and_forward_then_routes_are_restored() {
        let mut state = NavigationState::default();
        navigate(&mut state, "/Skills");
        navigate(&mut state, "/Projects");

        assert_eq!(state.go_back(), Some(Route::Skills));
        assert_eq!(state.go_back(), Some(Route::Home));
        assert_eq!(state.go_back(), None);
        assert_eq!(state.go_forward(), Some(Route::Skills));
        assert!(state.can_go_forward());

        navigate(&mut state, "/Email");
        assert!(!state.can_go_forward());
    }

    #[test]
    fn given_many_navigations_when_recorded_then_back_stack_is_bounded() {
        let mut state = NavigationState::default();
        for index in 0..(HISTORY_STACK_LIMIT + 10) {
            navigate(&mut state, &format!("/Projects/{index}"));
        }

        let mut steps = 0;
        while state.go_back().is_some() {
            steps += 1;
        }
        assert_eq!(steps, HISTORY_STACK_LIMIT);
    }
}
