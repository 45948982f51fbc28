pub(crate) mod about_modal;
mod experience;
pub(crate) mod fallback;
mod home;
mod not_found;
mod project_detail;
mod projects;
mod skills;

use iced::widget::{Space, column, container, scrollable, text};
use iced::{Element, Length};

use crate::shared::ui::style::thin_scroll_style;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::pages::PagesEvent;
use crate::widgets::pages::model::Page;

const PAGE_PADDING: u16 = 32;
const TITLE_FONT_SIZE: f32 = 28.0;
const SUBTITLE_FONT_SIZE: f32 = 14.0;
const PAGE_MAX_WIDTH: f32 = 960.0;

/// Props for the routed page content.
#[derive(Debug, Clone)]
pub(crate) struct PageProps<'a> {
    pub(crate) page: Page<'a>,
    pub(crate) history: &'a [String],
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: PageProps<'a>) -> Element<'a, PagesEvent> {
    let palette = props.theme.palette();

    let content: Element<'a, PagesEvent> = match props.page {
        Page::Home { profile, about } => {
            home::view(profile, about, props.history, palette)
        },
        Page::Experience { entries } => experience::view(entries, palette),
        Page::Skills { categories } => skills::view(categories, palette),
        Page::Projects { projects } => projects::view(projects, palette),
        Page::ProjectDetail { project, others } => {
            project_detail::view(project, others, palette)
        },
        Page::ProjectNotFound { segment } => {
            project_detail::not_found(segment, palette)
        },
        Page::NotFound { path } => not_found::view(path, palette),
        Page::Unavailable { reason } => {
            return fallback::view(reason, props.theme);
        },
        // Rendered by the contact widget.
        Page::Contact => return Space::new().into(),
    };

    scrollable(
        container(content)
            .padding(PAGE_PADDING)
            .max_width(PAGE_MAX_WIDTH)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(thin_scroll_style(palette))
    .into()
}

fn page_header<'a>(
    title: &'a str,
    subtitle: impl Into<String>,
    palette: IcedColorPalette,
) -> Element<'a, PagesEvent> {
    column![
        text(title)
            .size(TITLE_FONT_SIZE)
            .color(palette.bright_foreground),
        text(subtitle.into())
            .size(SUBTITLE_FONT_SIZE)
            .color(palette.dim_foreground),
    ]
    .spacing(6)
    .into()
}
