use iced::widget::{center, column, text, Text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::ColorScheme;

/// A centered placeholder for a pane with nothing to show yet.
///
/// Takes the bare lucide glyph and applies the muted empty-state styling
/// itself, so call sites only pick the icon and the copy.
pub fn empty_state<'a, Message: 'a>(
    cs: &ColorScheme,
    icon: Text<'a>,
    title: &'a str,
    subtitle: &'a str,
) -> Element<'a, Message> {
    let content = column![
        icon.size(style::TEXT_2XL).color(cs.outline).center(),
        text(title)
            .size(style::TEXT_XL)
            .font(style::FONT_HEADING)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_TIGHT),
        text(subtitle)
            .size(style::TEXT_SM)
            .color(cs.outline)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_MD)
    .align_x(Alignment::Center);

    center(content).width(Length::Fill).height(Length::Fill).into()
}
