use iced::widget::{mouse_area, row, text};
use iced::{mouse, Alignment, Element};
use lucide_icons::iced::icon_star;

use crate::style;
use crate::theme::ColorScheme;

/// Interactive star rating strip with hover preview.
///
/// Hovering a star previews that value without committing it; a value is
/// committed only on click. A leading run of stars is filled: the preview
/// wins while the pointer is over the strip, otherwise the committed
/// value shows.
#[derive(Debug, Clone)]
pub struct StarRating {
    max: u8,
    committed: u8,
    preview: u8,
    labels: Vec<String>,
}

impl Default for StarRating {
    fn default() -> Self {
        Self::new(5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Entered(u8),
    Left,
    Clicked(u8),
}

impl StarRating {
    /// A strip with `max` positions and nothing committed yet.
    pub fn new(max: u8) -> Self {
        Self {
            max,
            committed: 0,
            preview: 0,
            labels: Vec::new(),
        }
    }

    /// Word captions per position, honored only when one is given per star.
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Start from a committed value instead of an empty strip.
    #[allow(dead_code)]
    pub fn with_committed(mut self, value: u8) -> Self {
        self.committed = value;
        self
    }

    pub fn committed(&self) -> u8 {
        self.committed
    }

    /// Handle a message; returns the newly committed value on click.
    pub fn update(&mut self, message: Message) -> Option<u8> {
        match message {
            Message::Entered(position) => {
                self.preview = position;
                None
            }
            Message::Left => {
                self.preview = 0;
                None
            }
            Message::Clicked(position) => {
                self.committed = position;
                Some(position)
            }
        }
    }

    // Preview wins while hovering, otherwise the committed value shows.
    fn is_full(&self, position: u8) -> bool {
        if self.preview > 0 {
            self.preview >= position
        } else {
            self.committed >= position
        }
    }

    fn caption(&self) -> String {
        let shown = if self.preview > 0 {
            self.preview
        } else {
            self.committed
        };
        if shown == 0 {
            return String::new();
        }
        if self.labels.len() == usize::from(self.max) {
            self.labels
                .get(usize::from(shown) - 1)
                .cloned()
                .unwrap_or_else(|| shown.to_string())
        } else {
            shown.to_string()
        }
    }

    pub fn view(&self, cs: &ColorScheme) -> Element<'_, Message> {
        let mut stars = row![]
            .spacing(style::STAR_SPACING)
            .align_y(Alignment::Center);
        for position in 1..=self.max {
            let color = if self.is_full(position) {
                cs.tertiary
            } else {
                cs.outline_variant
            };
            stars = stars.push(
                mouse_area(icon_star().size(style::STAR_SIZE).color(color))
                    .interaction(mouse::Interaction::Pointer)
                    .on_enter(Message::Entered(position))
                    .on_exit(Message::Left)
                    .on_press(Message::Clicked(position)),
            );
        }

        row![
            stars,
            text(self.caption())
                .size(style::TEXT_BASE)
                .color(cs.on_surface_variant),
        ]
        .spacing(style::SPACE_MD)
        .align_y(Alignment::Center)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_count(rating: &StarRating) -> u8 {
        (1..=rating.max).filter(|&p| rating.is_full(p)).count() as u8
    }

    #[test]
    fn hover_previews_without_committing() {
        let mut rating = StarRating::new(5);
        assert_eq!(rating.update(Message::Entered(4)), None);
        assert_eq!(rating.committed(), 0);
        assert_eq!(full_count(&rating), 4);
    }

    #[test]
    fn leaving_resets_the_preview() {
        let mut rating = StarRating::new(5);
        rating.update(Message::Entered(4));
        assert_eq!(rating.update(Message::Left), None);
        assert_eq!(full_count(&rating), 0);
    }

    #[test]
    fn click_commits_the_value() {
        let mut rating = StarRating::new(5);
        rating.update(Message::Entered(3));
        assert_eq!(rating.update(Message::Clicked(3)), Some(3));
        assert_eq!(rating.committed(), 3);
    }

    #[test]
    fn preview_wins_over_committed_while_hovering() {
        let mut rating = StarRating::new(5);
        rating.update(Message::Clicked(3));
        rating.update(Message::Entered(5));
        assert_eq!(full_count(&rating), 5);

        rating.update(Message::Left);
        assert_eq!(full_count(&rating), 3);
    }

    #[test]
    fn lower_preview_shrinks_the_filled_run() {
        let mut rating = StarRating::new(5);
        rating.update(Message::Clicked(4));
        rating.update(Message::Entered(2));
        assert!(rating.is_full(2));
        assert!(!rating.is_full(3));
    }

    #[test]
    fn caption_is_empty_until_something_shows() {
        let rating = StarRating::new(5);
        assert_eq!(rating.caption(), "");
    }

    #[test]
    fn initial_committed_value_shows_and_survives_hover() {
        let mut rating = StarRating::default().with_committed(4);
        assert_eq!(rating.committed(), 4);
        assert_eq!(full_count(&rating), 4);

        rating.update(Message::Entered(1));
        rating.update(Message::Left);
        assert_eq!(rating.committed(), 4);
    }

    #[test]
    fn caption_uses_labels_when_one_per_star() {
        let mut rating =
            StarRating::new(3).with_labels(vec!["Bad".into(), "Okay".into(), "Great".into()]);
        rating.update(Message::Clicked(3));
        assert_eq!(rating.caption(), "Great");

        rating.update(Message::Entered(1));
        assert_eq!(rating.caption(), "Bad");
    }

    #[test]
    fn mismatched_labels_fall_back_to_numbers() {
        let mut rating = StarRating::new(5).with_labels(vec!["Bad".into(), "Great".into()]);
        rating.update(Message::Clicked(4));
        assert_eq!(rating.caption(), "4");
    }
}
