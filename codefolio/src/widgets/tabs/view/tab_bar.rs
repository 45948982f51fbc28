use iced::widget::text::Wrapping;
use iced::widget::{Space, button, container, row, scrollable, svg, text};
use iced::{Alignment, Element, Length};

use crate::shared::ui::icons;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::tabs::model::{Tab, TabIcon, TabsViewModel};
use crate::widgets::tabs::{TabsEvent, TabsIntent};

pub(crate) const TAB_BAR_HEIGHT: f32 = 35.0;
pub(crate) const TAB_BAR_SCROLL_ID: &str = "tab_bar_scroll";

const TAB_MIN_WIDTH: f32 = 120.0;
const TAB_LABEL_FONT_SIZE: f32 = 13.0;
const TAB_ICON_SIZE: f32 = 14.0;
const TAB_CLOSE_ICON_SIZE: f32 = 14.0;
const TAB_HORIZONTAL_PADDING: f32 = 10.0;
const TAB_ACCENT_HEIGHT: f32 = 1.0;
const DEFAULT_MAX_CHAR_COUNT_BEFORE_ELLIPSIZE: usize = 24;

/// Props for rendering the tab bar.
#[derive(Debug, Clone)]
pub(crate) struct TabBarProps<'a> {
    pub(crate) vm: TabsViewModel,
    /// Drop the extension from labels on narrow viewports.
    pub(crate) compact: bool,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: TabBarProps<'a>) -> Element<'a, TabsEvent> {
    let palette = props.theme.palette();
    let active_id = props.vm.active_tab_id.as_deref();

    let mut tabs_row = row![].spacing(1);
    for tab in &props.vm.tabs {
        let is_active = active_id == Some(tab.id.as_str());
        tabs_row = tabs_row.push(tab_button(tab, is_active, props.compact, palette));
    }

    let scroll = scrollable::Scrollable::with_direction(
        tabs_row,
        scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0)
                .margin(0),
        ),
    )
    .id(TAB_BAR_SCROLL_ID)
    .width(Length::Fill);

    container(scroll)
        .height(Length::Fixed(TAB_BAR_HEIGHT))
        .width(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.dim_black.into()),
            ..Default::default()
        })
        .into()
}

/// A clickable tab pill with an optional close affordance.
fn tab_button<'a>(
    tab: &Tab,
    is_active: bool,
    compact: bool,
    palette: IcedColorPalette,
) -> Element<'a, TabsEvent> {
    let foreground = if is_active {
        palette.bright_foreground
    } else {
        palette.dim_foreground
    };

    let label = if compact {
        tab.label
            .split('.')
            .next()
            .unwrap_or(tab.label.as_str())
            .to_string()
    } else {
        ellipsize(&tab.label)
    };

    let mut content = row![].spacing(6).align_y(Alignment::Center);
    if let Some(icon) = tab_icon(tab.icon) {
        let color = icon_color(tab.icon, &palette);
        content = content.push(
            svg::Svg::new(svg::Handle::from_memory(icon))
                .width(Length::Fixed(TAB_ICON_SIZE))
                .height(Length::Fixed(TAB_ICON_SIZE))
                .style(move |_, _| svg::Style { color: Some(color) }),
        );
    }
    content = content.push(
        text(label)
            .size(TAB_LABEL_FONT_SIZE)
            .color(foreground)
            .wrapping(Wrapping::None),
    );

    if !tab.is_home() {
        let close_svg = svg::Svg::new(svg::Handle::from_memory(icons::CLOSE))
            .width(Length::Fixed(TAB_CLOSE_ICON_SIZE))
            .height(Length::Fixed(TAB_CLOSE_ICON_SIZE))
            .style(move |_, status| {
                let color = if status == svg::Status::Hovered {
                    palette.red
                } else {
                    foreground
                };
                svg::Style { color: Some(color) }
            });

        content = content.push(Space::new().width(Length::Fixed(4.0)));
        content = content.push(
            button(close_svg)
                .on_press(TabsEvent::Intent(TabsIntent::Close {
                    tab_id: tab.id.clone(),
                }))
                .padding(0)
                .style(|_, _| iced::widget::button::Style::default()),
        );
    }

    let accent = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(TAB_ACCENT_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: is_active.then(|| palette.accent.into()),
            ..Default::default()
        });

    let pill = container(
        iced::widget::column![
            accent,
            container(content)
                .padding([0.0, TAB_HORIZONTAL_PADDING])
                .height(Length::Fill)
                .align_y(Alignment::Center),
        ]
        .height(Length::Fill),
    )
    .height(Length::Fill)
    .style(move |_| iced::widget::container::Style {
        background: Some(if is_active {
            palette.background.into()
        } else {
            palette.dim_black.into()
        }),
        text_color: Some(foreground),
        ..Default::default()
    });

    button(pill)
        .on_press(TabsEvent::Intent(TabsIntent::Activate {
            tab_id: tab.id.clone(),
        }))
        .padding(0)
        .width(Length::Shrink)
        .height(Length::Fill)
        .style(|_, _| iced::widget::button::Style::default())
        .into()
}

fn tab_icon(icon: TabIcon) -> Option<&'static [u8]> {
    match icon {
        TabIcon::Home => Some(icons::HOME),
        TabIcon::Briefcase => Some(icons::BRIEFCASE),
        TabIcon::Code => Some(icons::CODE),
        TabIcon::Folder => Some(icons::FOLDER),
        TabIcon::Mail => Some(icons::MAIL),
        TabIcon::React => Some(icons::REACT),
        TabIcon::Blank => None,
    }
}

fn icon_color(icon: TabIcon, palette: &IcedColorPalette) -> iced::Color {
    match icon {
        TabIcon::Home => palette.red,
        TabIcon::Briefcase => palette.blue,
        TabIcon::Code => palette.yellow,
        TabIcon::Folder => palette.blue,
        TabIcon::Mail => palette.magenta,
        TabIcon::React => palette.cyan,
        TabIcon::Blank => palette.dim_foreground,
    }
}

fn ellipsize(s: &str) -> String {
    let total = s.chars().count();
    if total <= DEFAULT_MAX_CHAR_COUNT_BEFORE_ELLIPSIZE {
        return s.to_owned();
    }

    let keep = DEFAULT_MAX_CHAR_COUNT_BEFORE_ELLIPSIZE - 2;
    let tail: String = s.chars().skip(total - keep).collect();

    format!("..{tail}")
}

#[cfg(test)]
mod tests {
    use super::ellipsize;

    #[test]
    fn given_short_label_when_ellipsized_then_it_is_unchanged() {
        assert_eq!(ellipsize("skills.js"), "skills.js");
    }

    #[test]
    fn given_long_label_when_ellipsized_then_tail_is_kept() {
        let label = "AtombergSmartAppliances.tsx";
        let shortened = ellipsize(label);

        assert!(shortened.starts_with(".."));
        assert!(shortened.ends_with("Appliances.tsx"));
        assert_eq!(shortened.chars().count(), 24);
    }
}
