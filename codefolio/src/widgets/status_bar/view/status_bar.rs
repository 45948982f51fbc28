use iced::widget::{Row, Space, container, text};
use iced::{Alignment, Element, Length};

use crate::shared::ui::theme::ThemeProps;
use crate::widgets::breakpoint::{BreakpointViewModel, DeviceClass};
use crate::widgets::status_bar::StatusBarEvent;
use crate::widgets::status_bar::model::{
    ENCODING_LABEL, LANGUAGE_LABEL, LINE_ENDING_LABEL, READY_LABEL,
    StatusBarViewModel,
};

const STATUS_BAR_HEIGHT: f32 = 22.0;
const FONT_SIZE: f32 = 12.0;

/// Props for the bottom status bar.
#[derive(Debug, Clone)]
pub(crate) struct StatusBarProps<'a> {
    pub(crate) vm: StatusBarViewModel,
    pub(crate) viewport: BreakpointViewModel,
    pub(crate) active_label: Option<&'a str>,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: StatusBarProps<'a>) -> Element<'a, StatusBarEvent> {
    let palette = props.theme.palette();
    let item = |label: String| text(label).size(FONT_SIZE).color(palette.bright_foreground);

    let mut left = Row::new()
        .spacing(16)
        .push(item(String::from(READY_LABEL)))
        .push(item(format!("v{}", props.vm.version)));
    if let Some(label) = props.active_label {
        left = left.push(item(label.to_string()));
    }

    let mut right = Row::new().spacing(16);
    // Narrow layouts keep only the device class and clock.
    if props.viewport.device != DeviceClass::Mobile {
        right = right
            .push(item(String::from(ENCODING_LABEL)))
            .push(item(String::from(LINE_ENDING_LABEL)))
            .push(item(String::from(LANGUAGE_LABEL)));
    }
    right = right
        .push(item(viewport_label(props.viewport)))
        .push(item(props.vm.clock));

    container(
        Row::new()
            .push(left)
            .push(Space::new().width(Length::Fill))
            .push(right)
            .align_y(Alignment::Center),
    )
    .padding([0, 10])
    .width(Length::Fill)
    .height(Length::Fixed(STATUS_BAR_HEIGHT))
    .align_y(Alignment::Center)
    .style(move |_| iced::widget::container::Style {
        background: Some(palette.accent.into()),
        ..Default::default()
    })
    .into()
}

fn viewport_label(viewport: BreakpointViewModel) -> String {
    let device = viewport.device.label();
    if viewport.hydrated {
        format!("{device} {:.0}x{:.0}", viewport.width, viewport.height)
    } else {
        device.to_string()
    }
}
