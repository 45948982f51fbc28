use iced::theme::Palette;
use iced::{Color, Theme};

/// Editor palette expressed as hex strings.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) red: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
    pub(crate) blue: String,
    pub(crate) magenta: String,
    pub(crate) cyan: String,
    pub(crate) bright_foreground: String,
    pub(crate) dim_foreground: String,
    pub(crate) dim_black: String,
    pub(crate) dim_blue: String,
    pub(crate) overlay: String,
    pub(crate) accent: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#CCCCCC"),
            background: String::from("#1E1E1E"),
            red: String::from("#F48771"),
            green: String::from("#89D185"),
            yellow: String::from("#DCDCAA"),
            blue: String::from("#569CD6"),
            magenta: String::from("#C586C0"),
            cyan: String::from("#4EC9B0"),
            bright_foreground: String::from("#FFFFFF"),
            dim_foreground: String::from("#858585"),
            // Sidebar, activity bar and inactive tabs
            dim_black: String::from("#252526"),
            dim_blue: String::from("#094771"),
            overlay: String::from("#2A2D2E"),
            // Status bar
            accent: String::from("#007ACC"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) blue: Color,
    pub(crate) magenta: Color,
    pub(crate) cyan: Color,
    pub(crate) bright_foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) dim_black: Color,
    pub(crate) dim_blue: Color,
    pub(crate) overlay: Color,
    pub(crate) accent: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: hex_or_black(&p.foreground),
            background: hex_or_black(&p.background),
            red: hex_or_black(&p.red),
            green: hex_or_black(&p.green),
            yellow: hex_or_black(&p.yellow),
            blue: hex_or_black(&p.blue),
            magenta: hex_or_black(&p.magenta),
            cyan: hex_or_black(&p.cyan),
            bright_foreground: hex_or_black(&p.bright_foreground),
            dim_foreground: hex_or_black(&p.dim_foreground),
            dim_black: hex_or_black(&p.dim_black),
            dim_blue: hex_or_black(&p.dim_blue),
            overlay: hex_or_black(&p.overlay),
            accent: hex_or_black(&p.accent),
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a color.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    let channel = |start: usize| u8::from_str_radix(&hex[start..start + 2], 16);

    match hex.len() {
        6 => Some(Color::from_rgb8(
            channel(0).ok()?,
            channel(2).ok()?,
            channel(4).ok()?,
        )),
        8 => Some(Color::from_rgba8(
            channel(0).ok()?,
            channel(2).ok()?,
            channel(4).ok()?,
            f32::from(channel(6).ok()?) / 255.0,
        )),
        _ => None,
    }
}

fn hex_or_black(value: &str) -> Color {
    parse_hex_color(value).unwrap_or_else(|| {
        log::warn!("invalid palette color {value:?}");
        Color::BLACK
    })
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("codefolio-dark"), &ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn from_palette(id: String, raw_palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(raw_palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed from the app view down to widget views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }

    pub(crate) fn palette(&self) -> IcedColorPalette {
        *self.theme.iced_palette()
    }
}

/// Owner of the active theme.
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{AppTheme, parse_hex_color};

    #[test]
    fn given_rgb_and_rgba_hex_when_parsed_then_channels_match() {
        assert_eq!(
            parse_hex_color("#FF8000"),
            Some(Color::from_rgb8(255, 128, 0))
        );

        let translucent =
            parse_hex_color("#00000080").expect("rgba hex should parse");
        assert!((translucent.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_none_is_returned() {
        assert_eq!(parse_hex_color("FF8000"), None);
        assert_eq!(parse_hex_color("#FF80"), None);
        assert_eq!(parse_hex_color("#GG8000"), None);
        assert_eq!(parse_hex_color("#ÿÿÿ"), None);
    }

    #[test]
    fn given_default_theme_when_converted_then_background_is_editor_dark() {
        let theme = AppTheme::default();
        assert_eq!(
            theme.iced_palette().background,
            Color::from_rgb8(0x1E, 0x1E, 0x1E)
        );
    }
}
