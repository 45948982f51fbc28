use iced::widget::{
    Column, Row, Space, button, center, column, container, mouse_area,
    opaque, row, scrollable, text,
};
use iced::{Alignment, Color, Element, Length};

use crate::shared::content::{About, Profile};
use crate::shared::ui::style::{
    accent_button_style, flat_button_style, panel_style, thin_scroll_style,
};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::pages::{PagesEvent, PagesIntent};

const BACKDROP_ALPHA: f32 = 0.6;
const CARD_WIDTH: f32 = 640.0;
const CARD_MAX_HEIGHT: f32 = 560.0;
const NAME_FONT_SIZE: f32 = 24.0;
const SECTION_FONT_SIZE: f32 = 16.0;
const BODY_FONT_SIZE: f32 = 14.0;
const CHIP_FONT_SIZE: f32 = 12.0;

/// Props for the About Me modal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AboutModalProps<'a> {
    pub(crate) profile: &'a Profile,
    pub(crate) about: &'a About,
    pub(crate) theme: ThemeProps<'a>,
}

/// Centered card over a dimmed backdrop. Pressing the backdrop or the close
/// button dismisses it.
pub(crate) fn view<'a>(props: AboutModalProps<'a>) -> Element<'a, PagesEvent> {
    let palette = props.theme.palette();
    let profile = props.profile;
    let about = props.about;
    let close = PagesEvent::Intent(PagesIntent::CloseAbout);

    let header = row![
        column![
            text(profile.name.as_str())
                .size(NAME_FONT_SIZE)
                .color(palette.bright_foreground),
            text(profile.role.as_str())
                .size(BODY_FONT_SIZE)
                .color(palette.cyan),
        ]
        .spacing(4)
        .width(Length::Fill),
        button(text("×").size(BODY_FONT_SIZE))
            .padding([4, 8])
            .on_press(close.clone())
            .style(flat_button_style(palette)),
    ]
    .align_y(Alignment::Start);

    let mut info = Column::new().spacing(4);
    for (label, value) in [
        ("Email", profile.email.as_str()),
        ("Phone", about.phone.as_str()),
        ("Location", profile.location.as_str()),
        ("Experience", about.experience.as_str()),
        ("LinkedIn", about.linkedin.as_str()),
        ("GitHub", about.github.as_str()),
    ] {
        if value.is_empty() {
            continue;
        }
        info = info.push(
            row![
                text(label)
                    .size(BODY_FONT_SIZE)
                    .color(palette.dim_foreground)
                    .width(Length::Fixed(96.0)),
                text(value).size(BODY_FONT_SIZE).color(palette.foreground),
            ]
            .spacing(8),
        );
    }

    let mut expertise = Column::new().spacing(10);
    for group in &about.expertise {
        let mut chips = Row::new().spacing(6);
        for skill in &group.skills {
            chips = chips.push(
                container(
                    text(skill.as_str())
                        .size(CHIP_FONT_SIZE)
                        .color(palette.foreground),
                )
                .padding([2, 8])
                .style(panel_style(palette.dim_black, Some(palette.overlay))),
            );
        }
        expertise = expertise.push(
            column![
                text(group.category.as_str())
                    .size(BODY_FONT_SIZE)
                    .color(palette.yellow),
                chips.wrap(),
            ]
            .spacing(6),
        );
    }

    let mut achievements = Column::new().spacing(4);
    for achievement in &about.achievements {
        achievements = achievements.push(
            text(format!("• {achievement}"))
                .size(BODY_FONT_SIZE)
                .color(palette.foreground),
        );
    }

    let mut interests = Column::new().spacing(6);
    for interest in &about.interests {
        interests = interests.push(
            column![
                text(interest.label.as_str())
                    .size(BODY_FONT_SIZE)
                    .color(palette.magenta),
                text(interest.description.as_str())
                    .size(BODY_FONT_SIZE)
                    .color(palette.dim_foreground),
            ]
            .spacing(2),
        );
    }

    let body = column![
        header,
        section("Personal Info", info, palette),
        section("Expertise", expertise, palette),
        section("Achievements", achievements, palette),
        section("Interests", interests, palette),
        row![
            Space::new().width(Length::Fill),
            button(text("Close").size(BODY_FONT_SIZE))
                .padding([6, 16])
                .on_press(close.clone())
                .style(accent_button_style(palette)),
        ],
    ]
    .spacing(20)
    .padding(24);

    let card = container(
        scrollable(body)
            .height(Length::Shrink)
            .style(thin_scroll_style(palette)),
    )
    .width(Length::Fixed(CARD_WIDTH))
    .max_height(CARD_MAX_HEIGHT)
    .style(panel_style(palette.background, Some(palette.overlay)));

    let backdrop = center(opaque(card)).style(|_| {
        iced::widget::container::Style {
            background: Some(
                Color {
                    a: BACKDROP_ALPHA,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..Default::default()
        }
    });

    opaque(mouse_area(backdrop).on_press(close))
}

fn section<'a>(
    title: &'a str,
    content: Column<'a, PagesEvent>,
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    column![
        text(title)
            .size(SECTION_FONT_SIZE)
            .color(palette.bright_foreground),
        content,
    ]
    .spacing(8)
    .into()
}
