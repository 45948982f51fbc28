use iced::widget::{Column, Row, Space, column, container, row, text};
use iced::{Alignment, Element, Length};

use super::page_header;
use crate::shared::content::{SkillCategory, SkillLevel};
use crate::shared::ui::style::panel_style;
use crate::shared::ui::theme::IcedColorPalette;
use crate::widgets::pages::PagesEvent;

const CATEGORY_FONT_SIZE: f32 = 18.0;
const BODY_FONT_SIZE: f32 = 14.0;
const LEVEL_FONT_SIZE: f32 = 12.0;
const METER_HEIGHT: f32 = 4.0;
const METER_WIDTH: f32 = 120.0;
const METER_STEPS: u16 = 4;

pub(super) fn view<'a>(
    categories: &'a [SkillCategory],
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    let mut page = Column::new()
        .push(page_header(
            "Skills",
            "Technologies and tools I work with",
            palette,
        ))
        .spacing(20);

    for category in categories {
        let mut skills = Column::new().spacing(8);
        for skill in &category.skills {
            skills = skills.push(
                row![
                    text(skill.name.as_str())
                        .size(BODY_FONT_SIZE)
                        .width(Length::Fill),
                    meter(skill.level, palette),
                    text(skill.level.label())
                        .size(LEVEL_FONT_SIZE)
                        .color(palette.dim_foreground)
                        .width(Length::Fixed(84.0)),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            );
        }

        page = page.push(
            container(
                column![
                    text(category.title.as_str())
                        .size(CATEGORY_FONT_SIZE)
                        .color(palette.bright_foreground),
                    skills,
                ]
                .spacing(12),
            )
            .padding(16)
            .width(Length::Fill)
            .style(panel_style(palette.dim_black, Some(palette.overlay))),
        );
    }

    page.into()
}

fn filled_steps(level: SkillLevel) -> u16 {
    (level.ratio() * f32::from(METER_STEPS)).round() as u16
}

fn meter<'a>(
    level: SkillLevel,
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    let filled = filled_steps(level).min(METER_STEPS);
    let empty = METER_STEPS - filled;

    let mut bar = Row::new().height(Length::Fixed(METER_HEIGHT));
    if filled > 0 {
        bar = bar.push(
            container(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(move |_| iced::widget::container::Style {
                    background: Some(palette.accent.into()),
                    ..Default::default()
                }),
        );
    }
    if empty > 0 {
        bar = bar.push(
            container(Space::new())
                .width(Length::FillPortion(empty))
                .height(Length::Fill)
                .style(move |_| iced::widget::container::Style {
                    background: Some(palette.overlay.into()),
                    ..Default::default()
                }),
        );
    }

    container(bar).width(Length::Fixed(METER_WIDTH)).into()
}
