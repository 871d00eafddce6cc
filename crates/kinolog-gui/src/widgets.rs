pub mod empty_state;
pub mod rounded_poster;
pub mod star_rating;

pub use empty_state::empty_state;
pub use rounded_poster::rounded_poster;
pub use star_rating::StarRating;

use iced::widget::scrollable;
use iced::Element;

use crate::theme::{self, ColorScheme};

/// A scrollable with consistent direction and style across the application.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new().width(6).scroller_width(4).margin(2),
        ))
        .style(theme::overlay_scrollbar(cs))
}
