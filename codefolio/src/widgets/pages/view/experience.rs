use iced::widget::{Column, Row, column, container, row, text};
use iced::{Element, Length};

use super::page_header;
use crate::shared::content::ExperienceEntry;
use crate::shared::ui::style::panel_style;
use crate::shared::ui::theme::IcedColorPalette;
use crate::widgets::pages::PagesEvent;

const POSITION_FONT_SIZE: f32 = 18.0;
const BODY_FONT_SIZE: f32 = 14.0;
const CHIP_FONT_SIZE: f32 = 12.0;
const MARKER_SIZE: f32 = 10.0;

pub(super) fn view<'a>(
    entries: &'a [ExperienceEntry],
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    let mut timeline = Column::new()
        .push(page_header(
            "Experience",
            "Professional journey and key achievements",
            palette,
        ))
        .spacing(20);

    for entry in entries {
        timeline = timeline.push(entry_card(entry, palette));
    }

    timeline.into()
}

fn entry_card<'a>(
    entry: &'a ExperienceEntry,
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    let mut achievements = Column::new().spacing(4);
    for achievement in &entry.achievements {
        achievements = achievements.push(
            text(format!("- {achievement}"))
                .size(BODY_FONT_SIZE)
                .color(palette.foreground),
        );
    }

    let mut chips = Row::new().spacing(6);
    for technology in &entry.technologies {
        chips = chips.push(
            container(
                text(technology.as_str())
                    .size(CHIP_FONT_SIZE)
                    .color(palette.cyan),
            )
            .padding([2, 8])
            .style(panel_style(palette.dim_black, Some(palette.overlay))),
        );
    }

    let details = column![
        text(entry.position.as_str())
            .size(POSITION_FONT_SIZE)
            .color(palette.bright_foreground),
        text(format!("{} | {}", entry.company, entry.location))
            .size(BODY_FONT_SIZE)
            .color(palette.blue),
        text(entry.duration.as_str())
            .size(BODY_FONT_SIZE)
            .color(palette.dim_foreground),
        achievements,
        chips.wrap(),
    ]
    .spacing(8);

    let marker = container(iced::widget::Space::new())
        .width(Length::Fixed(MARKER_SIZE))
        .height(Length::Fixed(MARKER_SIZE))
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.accent.into()),
            border: iced::Border {
                radius: (MARKER_SIZE / 2.0).into(),
                ..iced::Border::default()
            },
            ..Default::default()
        });

    row![
        container(marker).padding([6, 0]),
        container(details)
            .padding([0, 12])
            .width(Length::Fill)
            .style(panel_style(palette.dim_black, None)),
    ]
    .into()
}
