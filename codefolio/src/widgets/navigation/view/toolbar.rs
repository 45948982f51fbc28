use iced::widget::{button, row, svg};
use iced::{Alignment, Element, Length};

use crate::shared::ui::icons;
use crate::shared::ui::style::flat_button_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::navigation::model::NavigationViewModel;
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};

const ARROW_ICON_SIZE: f32 = 16.0;
const ARROW_BUTTON_PADDING: f32 = 4.0;

/// Props for the back/forward controls.
#[derive(Debug, Clone)]
pub(crate) struct ToolbarProps<'a> {
    pub(crate) vm: NavigationViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: ToolbarProps<'a>) -> Element<'a, NavigationEvent> {
    let back = arrow_button(
        icons::ARROW_LEFT,
        props.vm.can_go_back.then_some(NavigationIntent::Back),
        props.theme,
    );
    let forward = arrow_button(
        icons::ARROW_RIGHT,
        props.vm.can_go_forward.then_some(NavigationIntent::Forward),
        props.theme,
    );

    row![back, forward]
        .spacing(2)
        .align_y(Alignment::Center)
        .into()
}

fn arrow_button<'a>(
    icon: &'static [u8],
    intent: Option<NavigationIntent>,
    theme: ThemeProps<'a>,
) -> Element<'a, NavigationEvent> {
    let palette = theme.palette();
    let enabled = intent.is_some();

    let icon = svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(ARROW_ICON_SIZE))
        .height(Length::Fixed(ARROW_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(if enabled {
                palette.foreground
            } else {
                palette.dim_foreground
            }),
        });

    button(icon)
        .on_press_maybe(intent.map(NavigationEvent::Intent))
        .padding(ARROW_BUTTON_PADDING)
        .style(flat_button_style(palette))
        .into()
}
