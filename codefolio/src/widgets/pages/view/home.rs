use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::shared::content::{About, Profile};
use crate::shared::ui::style::{
    accent_button_style, flat_button_style, panel_style,
};
use crate::shared::ui::theme::IcedColorPalette;
use crate::widgets::pages::model::QUICK_LINKS;
use crate::widgets::pages::{PagesEvent, PagesIntent};

const NAME_FONT_SIZE: f32 = 36.0;
const ROLE_FONT_SIZE: f32 = 18.0;
const BODY_FONT_SIZE: f32 = 14.0;
const CARD_TITLE_FONT_SIZE: f32 = 16.0;
const CODE_FONT_SIZE: f32 = 13.0;
const GUTTER_WIDTH: f32 = 28.0;

pub(super) fn view<'a>(
    profile: &'a Profile,
    about: &'a About,
    history: &'a [String],
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    let hero = column![
        text(profile.name.as_str())
            .size(NAME_FONT_SIZE)
            .color(palette.bright_foreground),
        text(profile.role.as_str())
            .size(ROLE_FONT_SIZE)
            .color(palette.cyan),
        text(profile.tagline.as_str())
            .size(BODY_FONT_SIZE)
            .color(palette.yellow),
        text(profile.summary.as_str())
            .size(BODY_FONT_SIZE)
            .color(palette.foreground),
        text(profile.location.as_str())
            .size(BODY_FONT_SIZE)
            .color(palette.dim_foreground),
    ]
    .spacing(8);

    let mut cards = row![].spacing(12);
    for link in QUICK_LINKS {
        let card = column![
            text(link.title)
                .size(CARD_TITLE_FONT_SIZE)
                .color(palette.blue),
            text(link.description)
                .size(BODY_FONT_SIZE)
                .color(palette.dim_foreground),
        ]
        .spacing(6);

        cards = cards.push(
            button(
                container(card)
                    .padding(12)
                    .width(Length::Fill)
                    .style(panel_style(palette.dim_black, Some(palette.overlay))),
            )
            .padding(0)
            .width(Length::FillPortion(1))
            .on_press(PagesEvent::Intent(PagesIntent::Open {
                path: String::from(link.path),
            }))
            .style(flat_button_style(palette)),
        );
    }

    let mut page = Column::new().push(hero);
    if !about.snippet.is_empty() {
        page = page.push(code_card(about, palette));
    }
    page = page.push(cards).spacing(28);

    if !history.is_empty() {
        let mut visited = column![
            text("Recently visited")
                .size(CARD_TITLE_FONT_SIZE)
                .color(palette.bright_foreground),
        ]
        .spacing(4);
        for path in history {
            visited = visited.push(
                button(text(path.as_str()).size(BODY_FONT_SIZE))
                    .padding([2, 0])
                    .on_press(PagesEvent::Intent(PagesIntent::Open {
                        path: path.clone(),
                    }))
                    .style(flat_button_style(palette)),
            );
        }
        page = page.push(visited);
    }

    page.into()
}

/// `about-me.js` editor card. Running it opens the About Me modal.
fn code_card<'a>(
    about: &'a About,
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    let title_bar = row![
        text("about-me.js")
            .size(BODY_FONT_SIZE)
            .color(palette.dim_foreground),
        Space::new().width(Length::Fill),
        button(text("▶ Run").size(BODY_FONT_SIZE))
            .padding([4, 12])
            .on_press(PagesEvent::Intent(PagesIntent::OpenAbout))
            .style(accent_button_style(palette)),
    ]
    .align_y(Alignment::Center);

    let last = about.snippet.len() + 2;
    let mut lines = Column::new().spacing(2).push(code_line(
        1,
        text("const developer = {")
            .size(CODE_FONT_SIZE)
            .color(palette.blue),
        palette,
    ));
    for (index, field) in about.snippet.iter().enumerate() {
        let entry = row![
            text(format!("  {}: ", field.key))
                .size(CODE_FONT_SIZE)
                .color(palette.cyan),
            text(field.value.as_str())
                .size(CODE_FONT_SIZE)
                .color(palette.green),
            text(",").size(CODE_FONT_SIZE).color(palette.foreground),
        ];
        lines = lines.push(code_line(index + 2, entry, palette));
    }
    lines = lines.push(code_line(
        last,
        text("};").size(CODE_FONT_SIZE).color(palette.blue),
        palette,
    ));

    container(column![title_bar, lines].spacing(12))
        .padding(16)
        .width(Length::Fill)
        .style(panel_style(palette.dim_black, Some(palette.overlay)))
        .into()
}

fn code_line<'a>(
    number: usize,
    content: impl Into<Element<'a, PagesEvent>>,
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    row![
        text(number.to_string())
            .size(CODE_FONT_SIZE)
            .color(palette.dim_foreground)
            .width(Length::Fixed(GUTTER_WIDTH)),
        content.into(),
    ]
    .spacing(8)
    .into()
}
