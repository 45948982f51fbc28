use iced::widget::{button, column, container, row, svg, text};
use iced::{Alignment, Element, Length};

use crate::shared::ui::icons;
use crate::shared::ui::style::{accent_button_style, flat_button_style};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::pages::model::FALLBACK_TITLE;
use crate::widgets::pages::{PagesEvent, PagesIntent};

const ICON_SIZE: f32 = 48.0;
const TITLE_FONT_SIZE: f32 = 26.0;
const BODY_FONT_SIZE: f32 = 14.0;

/// Error boundary fallback with Reload and Go Home actions.
pub(crate) fn view<'a>(
    message: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, PagesEvent> {
    let palette = theme.palette();

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::ALERT))
        .width(Length::Fixed(ICON_SIZE))
        .height(Length::Fixed(ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.red),
        });

    let actions = row![
        button(text("Reload").size(BODY_FONT_SIZE))
            .padding([8, 16])
            .on_press(PagesEvent::Intent(PagesIntent::Reload))
            .style(accent_button_style(palette)),
        button(text("Go Home").size(BODY_FONT_SIZE))
            .padding([8, 16])
            .on_press(PagesEvent::Intent(PagesIntent::GoHome))
            .style(flat_button_style(palette)),
    ]
    .spacing(12);

    let body = column![
        icon,
        text(FALLBACK_TITLE)
            .size(TITLE_FONT_SIZE)
            .color(palette.red),
        text(message)
            .size(BODY_FONT_SIZE)
            .color(palette.dim_foreground),
        actions,
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(body)
        .center(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.background.into()),
            ..Default::default()
        })
        .into()
}
