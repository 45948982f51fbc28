use iced::widget::{button, column, row, text};
use iced::{Alignment, Element};

use crate::shared::route::HOME_PATH;
use crate::shared::ui::style::{accent_button_style, flat_button_style};
use crate::shared::ui::theme::IcedColorPalette;
use crate::widgets::pages::{PagesEvent, PagesIntent};

const CODE_FONT_SIZE: f32 = 72.0;
const TITLE_FONT_SIZE: f32 = 22.0;
const BODY_FONT_SIZE: f32 = 14.0;

pub(super) fn view<'a>(
    path: String,
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    column![
        text("404").size(CODE_FONT_SIZE).color(palette.accent),
        text("Page Not Found")
            .size(TITLE_FONT_SIZE)
            .color(palette.bright_foreground),
        text(format!("The file `{path}` does not exist in this workspace."))
            .size(BODY_FONT_SIZE)
            .color(palette.dim_foreground),
        row![
            button(text("Go Back").size(BODY_FONT_SIZE))
                .padding([8, 16])
                .on_press(PagesEvent::Intent(PagesIntent::GoBack))
                .style(flat_button_style(palette)),
            button(text("Go Home").size(BODY_FONT_SIZE))
                .padding([8, 16])
                .on_press(PagesEvent::Intent(PagesIntent::Open {
                    path: String::from(HOME_PATH),
                }))
                .style(accent_button_style(palette)),
        ]
        .spacing(12),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}
