use iced::widget::{Space, container, mouse_area};
use iced::{Color, Element, Length};

use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

const OVERLAY_ALPHA: f32 = 0.5;

/// Dimmed backdrop beside the mobile drawer. Pressing it closes the drawer.
pub(crate) fn view<'a>() -> Element<'a, SidebarEvent> {
    let backdrop = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| iced::widget::container::Style {
            background: Some(
                Color {
                    a: OVERLAY_ALPHA,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..Default::default()
        });

    mouse_area(backdrop)
        .on_press(SidebarEvent::Intent(SidebarIntent::OverlayPressed))
        .into()
}
