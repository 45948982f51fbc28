use iced::widget::{Space, button, column, container, row, svg, tooltip};
use iced::{Element, Length};

use crate::shared::ui::icons;
use crate::shared::ui::style::flat_button_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::sidebar::model::{ACTIVITY_BAR_WIDTH, ActivityItem};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

const ACTIVITY_ICON_SIZE: f32 = 22.0;
const ACTIVITY_BUTTON_HEIGHT: f32 = 48.0;
const ACTIVE_MARKER_WIDTH: f32 = 2.0;
const TOOLTIP_FONT_SIZE: f32 = 12.0;

/// Props for the vertical activity bar.
#[derive(Debug, Clone)]
pub(crate) struct ActivityBarProps<'a> {
    pub(crate) current_path: &'a str,
    pub(crate) explorer_open: bool,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: ActivityBarProps<'a>) -> Element<'a, SidebarEvent> {
    let palette = props.theme.palette();

    let mut items = column![activity_button(
        icons::MENU,
        "Explorer",
        props.explorer_open,
        SidebarIntent::ToggleOpen,
        props.theme,
    )];

    for item in ActivityItem::ALL {
        items = items.push(activity_button(
            item_icon(item),
            item.title(),
            item.is_active(props.current_path),
            SidebarIntent::Select {
                path: String::from(item.path()),
            },
            props.theme,
        ));
    }

    container(items)
        .width(Length::Fixed(ACTIVITY_BAR_WIDTH))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.dim_black.into()),
            ..Default::default()
        })
        .into()
}

fn activity_button<'a>(
    icon: &'static [u8],
    title: &'static str,
    is_active: bool,
    intent: SidebarIntent,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarEvent> {
    let palette = theme.palette();

    let icon_view = svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(ACTIVITY_ICON_SIZE))
        .height(Length::Fixed(ACTIVITY_ICON_SIZE))
        .style(move |_, status| {
            let color = if is_active || status == svg::Status::Hovered {
                palette.bright_foreground
            } else {
                palette.dim_foreground
            };
            svg::Style { color: Some(color) }
        });

    let marker = container(Space::new())
        .width(Length::Fixed(ACTIVE_MARKER_WIDTH))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: is_active.then(|| palette.bright_foreground.into()),
            ..Default::default()
        });

    let content = row![
        marker,
        container(icon_view)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    ];

    let control = button(content)
        .on_press(SidebarEvent::Intent(intent))
        .padding(0)
        .width(Length::Fixed(ACTIVITY_BAR_WIDTH))
        .height(Length::Fixed(ACTIVITY_BUTTON_HEIGHT))
        .style(flat_button_style(palette));

    let tip = container(
        iced::widget::text(title)
            .size(TOOLTIP_FONT_SIZE)
            .color(palette.foreground),
    )
    .padding([4, 8])
    .style(move |_| iced::widget::container::Style {
        background: Some(palette.overlay.into()),
        ..Default::default()
    });

    tooltip(control, tip, tooltip::Position::Right).into()
}

fn item_icon(item: ActivityItem) -> &'static [u8] {
    match item {
        ActivityItem::Home => icons::HOME,
        ActivityItem::Skills => icons::CODE,
        ActivityItem::Projects => icons::FOLDER,
        ActivityItem::Experience => icons::BRIEFCASE,
        ActivityItem::Contact => icons::MAIL,
    }
}
