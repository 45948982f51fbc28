use iced::Task;

use super::event::{StatusBarEvent, StatusBarIntent};
use super::state::StatusBarState;

pub(crate) fn reduce(
    state: &mut StatusBarState,
    event: StatusBarIntent,
) -> Task<StatusBarEvent> {
    match event {
        StatusBarIntent::Tick { now } => {
            state.tick(&now);
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, TimeZone};

    use super::reduce;
    use crate::widgets::status_bar::StatusBarIntent;
    use crate::widgets::status_bar::model::CLOCK_PLACEHOLDER;
    use crate::widgets::status_bar::state::StatusBarState;

    fn utc(millis: i64) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be in range")
            .timestamp_millis_opt(millis)
            .single()
            .expect("timestamp should be unambiguous")
    }

    #[test]
    fn given_new_status_bar_when_inspected_then_clock_shows_placeholder() {
        let state = StatusBarState::default();
        assert_eq!(state.clock(), CLOCK_PLACEHOLDER);
    }

    #[test]
    fn given_tick_when_reduced_then_clock_follows_timestamp() {
        let mut state = StatusBarState::default();

        let _task = reduce(
            &mut state,
            StatusBarIntent::Tick {
                now: utc(3_661_000),
            },
        );

        assert_eq!(state.clock(), "01:01:01");
    }

    #[test]
    fn given_same_second_when_ticked_twice_then_second_tick_is_unchanged() {
        let mut state = StatusBarState::default();

        assert!(state.tick(&utc(5_000)));
        assert!(!state.tick(&utc(5_400)));
    }
}
