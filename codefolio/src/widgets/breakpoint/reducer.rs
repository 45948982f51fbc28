use iced::Task;

use super::event::{BreakpointEffect, BreakpointEvent, BreakpointIntent};
use super::model::RESIZE_DEBOUNCE;
use super::state::BreakpointState;

/// Reduce a breakpoint intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut BreakpointState,
    event: BreakpointIntent,
) -> Task<BreakpointEvent> {
    match event {
        BreakpointIntent::Resized(size) => {
            let generation = state.record_resize(size);
            let (task, handle) = Task::perform(
                async { tokio::time::sleep(RESIZE_DEBOUNCE).await },
                move |_| {
                    BreakpointEvent::Intent(BreakpointIntent::Settle {
                        generation,
                    })
                },
            )
            .abortable();
            state.set_timer(handle);
            task
        },
        BreakpointIntent::Settle { generation } => {
            match state.settle(generation) {
                Some(device) => {
                    log::debug!("device class settled: {}", device.label());
                    Task::done(BreakpointEvent::Effect(
                        BreakpointEffect::DeviceClassChanged(device),
                    ))
                },
                None => Task::none(),
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::reduce;
    use crate::widgets::breakpoint::BreakpointIntent;
    use crate::widgets::breakpoint::model::DeviceClass;
    use crate::widgets::breakpoint::state::BreakpointState;

    fn resize_and_settle(
        state: &mut BreakpointState,
        width: f32,
    ) -> Option<DeviceClass> {
        let _task = reduce(
            state,
            BreakpointIntent::Resized(Size::new(width, 700.0)),
        );
        state.settle(state.generation())
    }

    #[test]
    fn given_new_observer_when_inspected_then_desktop_default_is_not_hydrated()
    {
        let state = BreakpointState::default();

        assert_eq!(state.device(), DeviceClass::Desktop);
        assert_eq!(state.size(), Size::new(1024.0, 768.0));
        assert!(!state.is_hydrated());
    }

    #[test]
    fn given_boundary_widths_when_classified_then_inclusive_upper_bounds_apply()
    {
        assert_eq!(DeviceClass::from_width(768.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(769.0), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1024.0), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1025.0), DeviceClass::Desktop);
    }

    #[test]
    fn given_first_settle_when_class_is_unchanged_then_class_is_still_announced()
    {
        let mut state = BreakpointState::default();

        let announced = resize_and_settle(&mut state, 1440.0);

        assert_eq!(announced, Some(DeviceClass::Desktop));
        assert!(state.is_hydrated());
        assert_eq!(state.size().width, 1440.0);
    }

    #[test]
    fn given_hydrated_observer_when_class_is_unchanged_then_nothing_is_announced()
    {
        let mut state = BreakpointState::default();
        let _ = resize_and_settle(&mut state, 1440.0);

        assert_eq!(resize_and_settle(&mut state, 1300.0), None);
        assert_eq!(
            resize_and_settle(&mut state, 800.0),
            Some(DeviceClass::Tablet)
        );
    }

    #[test]
    fn given_burst_of_resizes_when_stale_timer_fires_then_only_latest_applies()
    {
        let mut state = BreakpointState::default();

        let _first =
            reduce(&mut state, BreakpointIntent::Resized(Size::new(500.0, 700.0)));
        let stale = state.generation();
        let _second = reduce(
            &mut state,
            BreakpointIntent::Resized(Size::new(900.0, 700.0)),
        );

        assert_eq!(state.settle(stale), None);
        assert!(!state.is_hydrated());

        let latest = state.generation();
        assert_eq!(state.settle(latest), Some(DeviceClass::Tablet));
        assert_eq!(state.size().width, 900.0);
    }

    #[test]
    fn given_settled_generation_when_replayed_then_it_is_ignored() {
        let mut state = BreakpointState::default();
        let _ = resize_and_settle(&mut state, 600.0);

        assert_eq!(state.settle(state.generation()), None);
        assert_eq!(state.device(), DeviceClass::Mobile);
    }
}
