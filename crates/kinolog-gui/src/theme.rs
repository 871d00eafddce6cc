//! Material Design 3 theme — violet accent with tonal surfaces.
//!
//! Built on the MD3 tonal surface system: layered violet-tinted neutrals
//! create depth, while a purple primary accent drives interactivity and a
//! warm gold tertiary marks ratings. Supports dark and light themes via
//! `ColorScheme`.

use iced::widget::{button, container, scrollable, text_input};
use iced::{color, Background, Border, Color, Shadow, Theme};

use crate::style;

// ── Theme mode ──────────────────────────────────────────────────────

/// Light or dark theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Detect the OS color preference at launch.
pub fn detect_mode() -> ThemeMode {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

// ── Color scheme ────────────────────────────────────────────────────

/// All semantic color tokens for the application.
///
/// Mirrors MD3's tonal surface hierarchy. Construct via
/// `ColorScheme::dark()` or `ColorScheme::light()`.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct ColorScheme {
    // Surfaces (7 levels, low → high elevation)
    pub surface_container_lowest: Color,
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_container_highest: Color,
    pub surface_bright: Color,

    // Text hierarchy
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    // Primary accent (violet)
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_dim: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,

    // Secondary
    pub secondary_container: Color,
    pub on_secondary_container: Color,

    // Tertiary (warm gold, rating stars)
    pub tertiary: Color,
    pub on_tertiary: Color,

    // Success (theme palette only)
    pub success: Color,

    // Error
    pub error: Color,
    pub error_hover: Color,
    pub error_pressed: Color,
    pub on_error: Color,
}

impl ColorScheme {
    /// Dark theme — violet-tinted neutrals with lavender accent.
    pub fn dark() -> Self {
        Self {
            // Surfaces
            surface_container_lowest: color!(0x100D17),
            surface: color!(0x14101E),
            surface_container_low: color!(0x1C1727),
            surface_container: color!(0x221C2F),
            surface_container_high: color!(0x2C2539),
            surface_container_highest: color!(0x372E46),
            surface_bright: color!(0x3D3449),

            // Text
            on_surface: color!(0xE7DFF2),
            on_surface_variant: color!(0xCBC1DB),
            outline: color!(0x948BA5),
            outline_variant: color!(0x49425A),

            // Primary
            primary: color!(0xC9B8FF),
            primary_hover: color!(0xD8CBFF),
            primary_dim: color!(0xAE9BEB),
            on_primary: color!(0x32206C),
            primary_container: color!(0x4A3A85),
            on_primary_container: color!(0xE5DEFF),

            // Secondary
            secondary_container: color!(0x474058),
            on_secondary_container: color!(0xCBC1DB),

            // Tertiary
            tertiary: color!(0xFCC419),
            on_tertiary: color!(0x3F2E04),

            // Success
            success: color!(0x4AC78B),

            // Error
            error: color!(0xFFB4AB),
            error_hover: color!(0xCC3030),
            error_pressed: color!(0xAA2020),
            on_error: Color::WHITE,
        }
    }

    /// Light theme — violet-tinted whites with deeper purple accent.
    pub fn light() -> Self {
        Self {
            // Surfaces
            surface_container_lowest: color!(0xFFFFFF),
            surface: color!(0xFDF7FF),
            surface_container_low: color!(0xF7F0FB),
            surface_container: color!(0xF1EAF6),
            surface_container_high: color!(0xEBE4F1),
            surface_container_highest: color!(0xE5DEEB),
            surface_bright: color!(0xDED6E6),

            // Text (dark on light)
            on_surface: color!(0x1C1B20),
            on_surface_variant: color!(0x49454E),
            outline: color!(0x7A757F),
            outline_variant: color!(0xCBC4CF),

            // Primary (deeper purple for contrast on light bg)
            primary: color!(0x6741D9),
            primary_hover: color!(0x5A36C4),
            primary_dim: color!(0x7950E8),
            on_primary: Color::WHITE,
            primary_container: color!(0xE5DEFF),
            on_primary_container: color!(0x22005D),

            // Secondary
            secondary_container: color!(0xE8DEF8),
            on_secondary_container: color!(0x1E192B),

            // Tertiary
            tertiary: color!(0x7D5C00),
            on_tertiary: Color::WHITE,

            // Success
            success: color!(0x1B6E42),

            // Error
            error: color!(0xBA1A1A),
            error_hover: color!(0x9C1414),
            error_pressed: color!(0x7E0E0E),
            on_error: Color::WHITE,
        }
    }

    /// Get the color scheme for a given theme mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

// ── Theme constructor ───────────────────────────────────────────────

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "Kinolog",
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.success,
            warning: cs.tertiary,
            danger: cs.error,
        },
    )
}

// ── Style functions (parameterized by ColorScheme) ──────────────────

/// A card container: surface background, rounded corners, subtle border.
pub fn card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_LG.into(),
        },
        ..Default::default()
    }
}

/// Status bar container style.
pub fn status_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let text = cs.on_surface_variant;
    let bg = cs.surface_container_lowest;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// List item button — card-like with selection highlight.
pub fn list_item(
    selected: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_container_high = cs.surface_container_high;
    let surface_container = cs.surface_container;
    let outline_variant = cs.outline_variant;
    let primary = cs.primary;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let (bg, border_color) = if selected {
            (Some(Background::Color(surface_container_high)), primary)
        } else {
            match status {
                button::Status::Hovered => {
                    (Some(Background::Color(surface_container)), outline_variant)
                }
                _ => (None, Color::TRANSPARENT),
            }
        };

        button::Style {
            background: bg,
            text_color: on_surface,
            border: Border {
                color: border_color,
                width: if selected { 1.0 } else { 0.0 },
                radius: style::RADIUS_MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Primary action button (Add to watched, etc.).
pub fn primary_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary = cs.primary;
    let primary_hover = cs.primary_hover;
    let primary_dim = cs.primary_dim;
    let on_primary = cs.on_primary;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => primary_hover,
            button::Status::Pressed => primary_dim,
            _ => primary,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: on_primary,
            border: Border {
                radius: style::RADIUS_MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Ghost / outlined button — transparent bg, border outline.
pub fn ghost_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;
    let outline_variant = cs.outline_variant;

    move |_theme, status| {
        let (bg, text_color) = match status {
            button::Status::Hovered => (Some(Background::Color(surface_bright)), on_surface),
            _ => (None, on_surface_variant),
        };
        button::Style {
            background: bg,
            text_color,
            border: Border {
                color: outline_variant,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Remove button — quiet icon button that turns red on hover.
pub fn remove_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let error = cs.error;
    let error_pressed = cs.error_pressed;
    let on_error = cs.on_error;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        let (bg, text_color) = match status {
            button::Status::Hovered => (Some(Background::Color(error)), on_error),
            button::Status::Pressed => (Some(Background::Color(error_pressed)), on_error),
            _ => (None, on_surface_variant),
        };
        button::Style {
            background: bg,
            text_color,
            border: Border {
                radius: style::RADIUS_FULL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Frameless icon button (clear query, close detail).
pub fn icon_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => Some(Background::Color(surface_bright)),
            _ => None,
        };
        button::Style {
            background: bg,
            text_color: Color::TRANSPARENT,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: style::RADIUS_FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Borderless text input for use inside a composite search bar.
pub fn text_input_borderless(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;
    let outline = cs.outline;
    let primary = cs.primary;

    move |_theme, _status| text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 0.0.into(),
        },
        icon: on_surface_variant,
        placeholder: outline,
        value: on_surface,
        selection: primary,
    }
}

/// Composite search bar container — pill-shaped with subtle border.
pub fn search_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_FULL.into(),
        },
        ..Default::default()
    }
}

/// Poster placeholder container.
pub fn poster_placeholder(cs: &ColorScheme, radius: f32) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

/// Fluent Design overlay scrollbar: thin transparent rail, pill scroller
/// that becomes more visible on hover/drag.
pub fn overlay_scrollbar(
    cs: &ColorScheme,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let on_surface = cs.on_surface;
    let primary = cs.primary;

    move |_theme, status| {
        let (scroller_color, scroller_alpha) = match status {
            scrollable::Status::Dragged { .. } => (primary, 0.7),
            scrollable::Status::Hovered {
                is_vertical_scrollbar_hovered: true,
                ..
            } => (on_surface, 0.5),
            scrollable::Status::Hovered { .. } => (on_surface, 0.25),
            _ => (on_surface, 0.15),
        };

        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(Color {
                    a: scroller_alpha,
                    ..scroller_color
                }),
                border: Border {
                    radius: style::RADIUS_FULL.into(),
                    ..Border::default()
                },
            },
        };

        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::AutoScroll {
                background: Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                shadow: Shadow::default(),
                icon: on_surface,
            },
        }
    }
}
