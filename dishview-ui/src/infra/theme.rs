use dishview_model::{CategoryStyle, Rgba};
use iced::{
    Background, Border, Color, Shadow, Theme, Vector, theme,
    widget::{button, container, text, text_input},
};

use crate::infra::constants::layout::overlay;

/// Dark-first palette with a warm accent for food photography.
#[derive(Debug, Clone, Copy)]
pub struct DishviewTheme;

impl DishviewTheme {
    // Core colors
    pub const BACKGROUND_DARK: Color = Color::from_rgb(0.04, 0.04, 0.05);
    pub const BACKGROUND_LIGHT: Color = Color::from_rgb(0.96, 0.95, 0.93);
    pub const ACCENT: Color = Color::from_rgb(1.0, 0.58, 0.0);
    pub const ACCENT_HOVER: Color = Color::from_rgb(1.0, 0.66, 0.2);
    pub const ACCENT_GLOW: Color = Color::from_rgba(1.0, 0.58, 0.0, 0.3);

    // Overlay
    pub const SCRIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.82);
    pub const CARD_BG: Color = Color::from_rgb(0.11, 0.11, 0.12);
    pub const CARD_HOVER: Color = Color::from_rgb(0.16, 0.16, 0.18);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.22, 0.22, 0.24);

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.72, 0.72, 0.72);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.5, 0.5);

    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.8, 0.4);
    pub const ERROR: Color = Color::from_rgb(1.0, 0.2, 0.2);

    pub fn theme(dark: bool) -> Theme {
        let mut palette = if dark {
            theme::Palette::DARK
        } else {
            theme::Palette::LIGHT
        };
        palette.background = if dark {
            Self::BACKGROUND_DARK
        } else {
            Self::BACKGROUND_LIGHT
        };
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        let name = if dark { "Dishview Dark" } else { "Dishview Light" };
        Theme::custom(name, palette)
    }
}

pub fn rgba_to_color(rgba: Rgba) -> Color {
    Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Resolved stroke and glow colors for one card.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CardAccent {
    pub stroke: Option<Color>,
    pub glow: Option<Color>,
}

impl CardAccent {
    pub fn from_style(style: Option<&CategoryStyle>) -> Self {
        let Some(style) = style else {
            return Self::default();
        };
        Self {
            stroke: style.stroke().map(rgba_to_color),
            glow: style.glow().map(rgba_to_color),
        }
    }
}

/// Muted text on the launcher, derived from the active palette so it stays
/// readable in both schemes. The overlay keeps its fixed dark colors.
pub fn secondary_text_color(theme: &Theme) -> Color {
    let base = theme.extended_palette().background.base.text;
    Color { a: base.a * 0.7, ..base }
}

pub fn secondary_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(secondary_text_color(theme)),
    }
}

pub fn overlay_style(_: &Theme) -> container::Style {
    container::Style {
        text_color: Some(DishviewTheme::TEXT_PRIMARY),
        background: Some(Background::Color(DishviewTheme::SCRIM)),
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Menu card button; border and glow follow the category's tokens.
pub fn card_style(
    accent: CardAccent,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let stroke = accent.stroke.unwrap_or(DishviewTheme::BORDER_COLOR);
        let (background, blur_radius) = match status {
            button::Status::Hovered => (DishviewTheme::CARD_HOVER, 22.0),
            button::Status::Pressed => (DishviewTheme::CARD_HOVER, 10.0),
            _ => (DishviewTheme::CARD_BG, 14.0),
        };
        let shadow = match accent.glow {
            Some(glow) => Shadow {
                color: glow,
                offset: Vector::new(0.0, 0.0),
                blur_radius,
            },
            None => Shadow::default(),
        };

        button::Style {
            text_color: DishviewTheme::TEXT_PRIMARY,
            background: Some(Background::Color(background)),
            border: Border {
                color: stroke,
                width: 1.5,
                radius: overlay::CARD_RADIUS.into(),
            },
            shadow,
            snap: false,
        }
    }
}

pub fn chrome_button_style(_: &Theme, status: button::Status) -> button::Style {
    let (background, border_color) = match status {
        button::Status::Hovered => {
            (DishviewTheme::CARD_HOVER, DishviewTheme::ACCENT)
        }
        button::Status::Disabled => {
            (Color::TRANSPARENT, DishviewTheme::BORDER_COLOR)
        }
        _ => (DishviewTheme::CARD_BG, DishviewTheme::BORDER_COLOR),
    };
    let text_color = if matches!(status, button::Status::Disabled) {
        DishviewTheme::TEXT_DIMMED
    } else {
        DishviewTheme::TEXT_PRIMARY
    };

    button::Style {
        text_color,
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn primary_button_style(_: &Theme, status: button::Status) -> button::Style {
    let (background, blur_radius) = match status {
        button::Status::Hovered => (DishviewTheme::ACCENT_HOVER, 16.0),
        _ => (DishviewTheme::ACCENT, 8.0),
    };

    button::Style {
        text_color: DishviewTheme::BACKGROUND_DARK,
        background: Some(Background::Color(background)),
        border: Border {
            color: background,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: DishviewTheme::ACCENT_GLOW,
            offset: Vector::new(0.0, 2.0),
            blur_radius,
        },
        snap: false,
    }
}

pub fn search_style(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let base = text_input::default(theme, status);
    let border_color = match status {
        text_input::Status::Focused { .. } => DishviewTheme::ACCENT,
        _ => DishviewTheme::BORDER_COLOR,
    };

    text_input::Style {
        background: Background::Color(DishviewTheme::CARD_BG),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        value: DishviewTheme::TEXT_PRIMARY,
        placeholder: DishviewTheme::TEXT_DIMMED,
        ..base
    }
}
