use iced::widget::{Column, button, column, container, text};
use iced::{Element, Length};

use super::page_header;
use crate::shared::content::Project;
use crate::shared::ui::style::{flat_button_style, panel_style};
use crate::shared::ui::theme::IcedColorPalette;
use crate::widgets::pages::{PagesEvent, PagesIntent};

const CARD_TITLE_FONT_SIZE: f32 = 18.0;
const BODY_FONT_SIZE: f32 = 14.0;
const SKILLS_FONT_SIZE: f32 = 12.0;

pub(super) fn view<'a>(
    projects: &'a [Project],
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    let mut page = Column::new()
        .push(page_header(
            "Projects",
            "A selection of products I have designed and built",
            palette,
        ))
        .spacing(16);

    for project in projects {
        let card = column![
            text(project.title.as_str())
                .size(CARD_TITLE_FONT_SIZE)
                .color(palette.bright_foreground),
            text(project.description.as_str())
                .size(BODY_FONT_SIZE)
                .color(palette.foreground),
            text(project.skills.join(" · "))
                .size(SKILLS_FONT_SIZE)
                .color(palette.cyan),
        ]
        .spacing(8);

        page = page.push(
            button(
                container(card)
                    .padding(16)
                    .width(Length::Fill)
                    .style(panel_style(palette.dim_black, Some(palette.overlay))),
            )
            .padding(0)
            .width(Length::Fill)
            .on_press(PagesEvent::Intent(PagesIntent::Open {
                path: project.path(),
            }))
            .style(flat_button_style(palette)),
        );
    }

    page.into()
}
