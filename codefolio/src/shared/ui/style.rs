use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color};

use super::theme::IcedColorPalette;

/// Return a scrollbar style closure with thin rails and reduced alpha.
pub(crate) fn thin_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;

        let mut scroller_color = match style.vertical_rail.scroller.background {
            Background::Color(color) => color,
            _ => palette.dim_foreground,
        };
        scroller_color.a = (scroller_color.a * 0.7).min(1.0);
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}

/// Return a container style for explorer rows with selection/hover highlights.
pub(crate) fn tree_row_style(
    palette: &IcedColorPalette,
    is_selected: bool,
    is_hovered: bool,
) -> container::Style {
    let background = if is_selected {
        let mut color = palette.dim_blue;
        color.a = 0.7;
        Some(color.into())
    } else if is_hovered {
        let mut color = palette.overlay;
        color.a = 0.6;
        Some(color.into())
    } else {
        None
    };

    container::Style {
        background,
        text_color: Some(palette.foreground),
        ..Default::default()
    }
}

/// Flat button with a hover tint and no border.
pub(crate) fn flat_button_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(palette.overlay.into())
            },
            _ => None,
        };

        button::Style {
            background,
            text_color: palette.foreground,
            border: Border::default(),
            ..Default::default()
        }
    }
}

/// Filled accent button used for primary page actions.
pub(crate) fn accent_button_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_, status| {
        let mut background = palette.accent;
        match status {
            button::Status::Hovered => background.a = 0.85,
            button::Status::Disabled => background.a = 0.4,
            _ => {},
        }

        button::Style {
            background: Some(background.into()),
            text_color: palette.bright_foreground,
            border: Border {
                radius: iced::border::Radius::new(2.0),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Text input style matching the editor panels.
pub(crate) fn text_input_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, text_input::Status) -> text_input::Style + 'static {
    move |theme, status| {
        let mut style = text_input::default(theme, status);
        let border_color = match status {
            text_input::Status::Focused { .. } => palette.accent,
            _ => palette.overlay,
        };

        style.background = Background::Color(palette.dim_black);
        style.value = palette.foreground;
        style.placeholder = palette.dim_foreground;
        style.border = Border {
            color: border_color,
            width: 1.0,
            radius: iced::border::Radius::new(2.0),
        };

        style
    }
}

/// Panel background with an optional hairline border.
pub(crate) fn panel_style(
    background: Color,
    border: Option<Color>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_| container::Style {
        background: Some(background.into()),
        border: border
            .map(|color| Border {
                color,
                width: 1.0,
                radius: iced::border::Radius::new(4.0),
            })
            .unwrap_or_default(),
        ..Default::default()
    }
}
