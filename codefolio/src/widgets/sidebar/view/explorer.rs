use iced::widget::text::Wrapping;
use iced::widget::{
    Column, Space, button, column, container, row, scrollable, svg, text,
};
use iced::{Alignment, Element, Length};

use crate::shared::content::Catalog;
use crate::shared::ui::icons;
use crate::shared::ui::style::{flat_button_style, thin_scroll_style, tree_row_style};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::breakpoint::DeviceClass;
use crate::widgets::sidebar::model::{
    ExplorerFile, ExplorerSection, SidebarViewModel, explorer_files,
};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

const HEADER_HEIGHT: f32 = 35.0;
const HEADER_FONT_SIZE: f32 = 11.0;
const SECTION_FONT_SIZE: f32 = 11.0;
const ROW_FONT_SIZE: f32 = 13.0;
const ROW_HEIGHT: f32 = 22.0;
const ROW_INDENT: f32 = 20.0;
const CHEVRON_SIZE: f32 = 14.0;
const FILE_ICON_SIZE: f32 = 14.0;
const HEADER_ICON_SIZE: f32 = 16.0;

/// Props for the explorer panel.
#[derive(Debug, Clone)]
pub(crate) struct ExplorerProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) catalog: &'a Catalog,
    pub(crate) current_path: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: ExplorerProps<'a>) -> Element<'a, SidebarEvent> {
    let palette = props.theme.palette();

    let mut sections = Column::new();
    for section in ExplorerSection::ALL {
        let expanded = props.vm.is_expanded(section);
        sections = sections.push(section_header(section, expanded, palette));
        if expanded {
            for file in explorer_files(section, props.catalog) {
                let selected = file.path == props.current_path;
                sections = sections.push(file_row(file, selected, palette));
            }
        }
    }

    let body = scrollable(sections)
        .height(Length::Fill)
        .style(thin_scroll_style(palette));

    container(column![header(props.vm, palette), body])
        .width(Length::Fixed(props.vm.explorer_width()))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.dim_black.into()),
            ..Default::default()
        })
        .into()
}

fn header<'a>(
    vm: SidebarViewModel,
    palette: IcedColorPalette,
) -> Element<'a, SidebarEvent> {
    // The drawer closes instead of collapsing on mobile.
    let (icon, intent) = if vm.device == DeviceClass::Mobile {
        (icons::CLOSE, SidebarIntent::ToggleOpen)
    } else {
        (icons::SIDEBAR_COLLAPSE, SidebarIntent::ToggleCollapsed)
    };

    let action = button(
        svg::Svg::new(svg::Handle::from_memory(icon))
            .width(Length::Fixed(HEADER_ICON_SIZE))
            .height(Length::Fixed(HEADER_ICON_SIZE))
            .style(move |_, _| svg::Style {
                color: Some(palette.foreground),
            }),
    )
    .on_press(SidebarEvent::Intent(intent))
    .padding(2)
    .style(flat_button_style(palette));

    container(
        row![
            text("EXPLORER").size(HEADER_FONT_SIZE).color(palette.dim_foreground),
            Space::new().width(Length::Fill),
            action,
        ]
        .align_y(Alignment::Center),
    )
    .padding([0, 12])
    .height(Length::Fixed(HEADER_HEIGHT))
    .align_y(Alignment::Center)
    .into()
}

fn section_header<'a>(
    section: ExplorerSection,
    expanded: bool,
    palette: IcedColorPalette,
) -> Element<'a, SidebarEvent> {
    let chevron = if expanded {
        icons::CHEVRON_DOWN
    } else {
        icons::CHEVRON_RIGHT
    };

    let content = row![
        svg::Svg::new(svg::Handle::from_memory(chevron))
            .width(Length::Fixed(CHEVRON_SIZE))
            .height(Length::Fixed(CHEVRON_SIZE))
            .style(move |_, _| svg::Style {
                color: Some(palette.foreground),
            }),
        text(section.title())
            .size(SECTION_FONT_SIZE)
            .color(palette.foreground),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    button(content)
        .on_press(SidebarEvent::Intent(SidebarIntent::ToggleSection(section)))
        .padding([2, 4])
        .width(Length::Fill)
        .style(flat_button_style(palette))
        .into()
}

fn file_row<'a>(
    file: ExplorerFile,
    selected: bool,
    palette: IcedColorPalette,
) -> Element<'a, SidebarEvent> {
    let tint = extension_color(file.extension(), &palette);
    let icon = svg::Svg::new(svg::Handle::from_memory(icons::FILE))
        .width(Length::Fixed(FILE_ICON_SIZE))
        .height(Length::Fixed(FILE_ICON_SIZE))
        .style(move |_, _| svg::Style { color: Some(tint) });

    let content = row![
        Space::new().width(Length::Fixed(ROW_INDENT)),
        icon,
        text(file.label)
            .size(ROW_FONT_SIZE)
            .wrapping(Wrapping::None),
    ]
    .spacing(6)
    .height(Length::Fixed(ROW_HEIGHT))
    .align_y(Alignment::Center);

    button(content)
        .on_press(SidebarEvent::Intent(SidebarIntent::Select { path: file.path }))
        .padding(0)
        .width(Length::Fill)
        .style(move |_, status| {
            let hovered = matches!(
                status,
                iced::widget::button::Status::Hovered
                    | iced::widget::button::Status::Pressed
            );
            let row_style = tree_row_style(&palette, selected, hovered);
            iced::widget::button::Style {
                background: row_style.background,
                text_color: palette.foreground,
                ..Default::default()
            }
        })
        .into()
}

fn extension_color(extension: &str, palette: &IcedColorPalette) -> iced::Color {
    match extension {
        "html" => palette.red,
        "css" => palette.blue,
        "js" => palette.yellow,
        "ts" => palette.blue,
        "tsx" => palette.cyan,
        _ => palette.dim_foreground,
    }
}
