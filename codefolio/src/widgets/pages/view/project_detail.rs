use iced::widget::{Column, button, column, row, svg, text};
use iced::{Alignment, Element, Length};

use super::page_header;
use crate::shared::content::Project;
use crate::shared::route::PROJECTS_PATH;
use crate::shared::ui::icons;
use crate::shared::ui::style::{accent_button_style, flat_button_style};
use crate::shared::ui::theme::IcedColorPalette;
use crate::widgets::pages::{PagesEvent, PagesIntent};

const SECTION_FONT_SIZE: f32 = 16.0;
const BODY_FONT_SIZE: f32 = 14.0;
const ICON_SIZE: f32 = 14.0;

pub(super) fn view<'a>(
    project: &'a Project,
    others: Vec<&'a Project>,
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    let mut page = Column::new()
        .push(back_link(palette))
        .push(page_header(
            project.title.as_str(),
            project.description.as_str(),
            palette,
        ))
        .spacing(20);

    if let Some(link) = &project.link {
        page = page.push(
            text(format!("Live: {link}"))
                .size(BODY_FONT_SIZE)
                .color(palette.blue),
        );
    }

    if !project.skills.is_empty() {
        page = page.push(section(
            "Tech Stack",
            project.skills.iter().map(String::as_str),
            palette,
        ));
    }
    if !project.features.is_empty() {
        page = page.push(section(
            "Key Features",
            project.features.iter().map(String::as_str),
            palette,
        ));
    }

    if !others.is_empty() {
        let mut list = column![
            text("Other Projects")
                .size(SECTION_FONT_SIZE)
                .color(palette.bright_foreground),
        ]
        .spacing(4);
        for other in others {
            list = list.push(
                button(text(other.title.as_str()).size(BODY_FONT_SIZE))
                    .padding([2, 0])
                    .on_press(PagesEvent::Intent(PagesIntent::Open {
                        path: other.path(),
                    }))
                    .style(flat_button_style(palette)),
            );
        }
        page = page.push(list);
    }

    page.into()
}

/// Page shown for a project segment missing from the catalog.
pub(super) fn not_found<'a>(
    segment: String,
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    column![
        page_header(
            "Project Not Found",
            format!("No project matches \"{segment}\"."),
            palette,
        ),
        button(text("Back to Projects").size(BODY_FONT_SIZE))
            .padding([8, 16])
            .on_press(PagesEvent::Intent(PagesIntent::Open {
                path: String::from(PROJECTS_PATH),
            }))
            .style(accent_button_style(palette)),
    ]
    .spacing(20)
    .into()
}

fn back_link<'a>(palette: IcedColorPalette) -> Element<'a, PagesEvent> {
    let content = row![
        svg::Svg::new(svg::Handle::from_memory(icons::ARROW_LEFT))
            .width(Length::Fixed(ICON_SIZE))
            .height(Length::Fixed(ICON_SIZE))
            .style(move |_, _| svg::Style {
                color: Some(palette.foreground),
            }),
        text("Projects").size(BODY_FONT_SIZE),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    button(content)
        .padding([4, 8])
        .on_press(PagesEvent::Intent(PagesIntent::Open {
            path: String::from(PROJECTS_PATH),
        }))
        .style(flat_button_style(palette))
        .into()
}

fn section<'a>(
    title: &'a str,
    items: impl Iterator<Item = &'a str>,
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    let mut list = column![
        text(title)
            .size(SECTION_FONT_SIZE)
            .color(palette.bright_foreground),
    ]
    .spacing(4);
    for item in items {
        list = list.push(
            text(format!("- {item}"))
                .size(BODY_FONT_SIZE)
                .color(palette.foreground),
        );
    }
    list.into()
}
