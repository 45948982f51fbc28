use iced::widget::text::Wrapping;
use iced::widget::{Column, button, container, row, svg, text};
use iced::{Alignment, Element, Length};

use crate::shared::ui::icons;
use crate::shared::ui::style::tree_row_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::recent::model::RecentViewModel;
use crate::widgets::recent::{RecentEvent, RecentIntent};

const TITLE_FONT_SIZE: f32 = 11.0;
const ROW_FONT_SIZE: f32 = 12.0;
const ROW_ICON_SIZE: f32 = 12.0;
const EMPTY_HINT: &str = "No recent files";

/// Props for the explorer footer listing recently visited files.
#[derive(Debug, Clone)]
pub(crate) struct RecentListProps<'a> {
    pub(crate) vm: RecentViewModel,
    pub(crate) current_path: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: RecentListProps<'a>) -> Element<'a, RecentEvent> {
    let palette = props.theme.palette();

    let mut list = Column::new().push(
        container(
            text("RECENT")
                .size(TITLE_FONT_SIZE)
                .color(palette.dim_foreground),
        )
        .padding([6, 12]),
    );

    if props.vm.recent_files.is_empty() {
        list = list.push(
            container(
                text(EMPTY_HINT)
                    .size(ROW_FONT_SIZE)
                    .color(palette.dim_foreground),
            )
            .padding([2, 16]),
        );
    }

    for entry in props.vm.recent_files {
        let selected = entry.path == props.current_path;
        let content = row![
            svg::Svg::new(svg::Handle::from_memory(icons::FILE))
                .width(Length::Fixed(ROW_ICON_SIZE))
                .height(Length::Fixed(ROW_ICON_SIZE))
                .style(move |_, _| svg::Style {
                    color: Some(palette.dim_foreground),
                }),
            text(entry.name)
                .size(ROW_FONT_SIZE)
                .wrapping(Wrapping::None),
        ]
        .spacing(6)
        .align_y(Alignment::Center);

        list = list.push(
            button(content)
                .on_press(RecentEvent::Intent(RecentIntent::Open {
                    path: entry.path,
                }))
                .padding([2, 16])
                .width(Length::Fill)
                .style(move |_, status| {
                    let hovered = matches!(
                        status,
                        iced::widget::button::Status::Hovered
                    );
                    iced::widget::button::Style {
                        background: tree_row_style(&palette, selected, hovered)
                            .background,
                        text_color: palette.foreground,
                        ..Default::default()
                    }
                }),
        );
    }

    container(list)
        .width(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.dim_black.into()),
            border: iced::Border {
                color: palette.overlay,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}
