use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Task};

use kinolog_api::omdb::OmdbClient;
use kinolog_api::traits::{MovieCatalog, MovieDetail};
use kinolog_core::models::{self, WatchedRecord};

use crate::app;
use crate::poster_cache::PosterCache;
use crate::screen::browse;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, star_rating, StarRating};

// ── State ─────────────────────────────────────────────────────────

/// Phase of the detail fetch for the selected movie.
#[derive(Debug)]
enum Phase {
    Loading,
    Ready(Box<MovieDetail>),
    Failed(String),
}

/// Detail pane state for one selected movie.
///
/// Every instance is tied to the id it was opened for; responses tagged
/// with any other id are dropped, so a slow fetch can never paint the
/// pane of a movie the user has already navigated away from.
#[derive(Debug)]
pub struct Detail {
    id: String,
    phase: Phase,
    rating: StarRating,
    interactions: u32,
    already_rated: Option<u8>,
}

// ── Messages ──────────────────────────────────────────────────────

/// Messages handled by the detail pane.
#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        id: String,
        result: Result<Box<MovieDetail>, String>,
    },
    Rating(star_rating::Message),
    AddToWatched,
    Close,
}

/// What the owning screen should do after an update.
#[derive(Debug)]
pub enum Event {
    None,
    /// The user committed a rating; add this record and close the pane.
    Committed(WatchedRecord),
    Close,
}

// ── Implementation ────────────────────────────────────────────────

impl Detail {
    /// Open the pane for `id` and start fetching its detail.
    ///
    /// `already_rated` carries the stored rating when the movie is in the
    /// watched list; the rating strip is inert in that case.
    pub fn open(
        id: String,
        already_rated: Option<u8>,
        rating_max: u8,
        rating_labels: Vec<String>,
        catalog: &OmdbClient,
    ) -> (Self, Task<app::Message>) {
        let state = Self {
            id: id.clone(),
            phase: Phase::Loading,
            rating: StarRating::new(rating_max).with_labels(rating_labels),
            interactions: 0,
            already_rated,
        };
        let catalog = catalog.clone();
        let task = Task::perform(
            async move {
                let result = catalog.fetch_detail(&id).await;
                (id, result.map(Box::new).map_err(|e| e.to_string()))
            },
            |(id, result)| {
                app::Message::Browse(browse::Message::Detail(Message::Loaded { id, result }))
            },
        );
        (state, task)
    }

    /// The id this pane was opened for.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Title of the loaded movie, once the fetch has completed.
    pub fn ready_title(&self) -> Option<&str> {
        match &self.phase {
            Phase::Ready(detail) => Some(detail.title.as_str()),
            _ => None,
        }
    }

    /// Poster cache request for the loaded movie.
    pub fn poster_info(&self) -> Option<(String, Option<String>)> {
        match &self.phase {
            Phase::Ready(detail) => Some((self.id.clone(), detail.poster.clone())),
            _ => None,
        }
    }

    /// Handle a detail message, returning an event for the owning screen.
    pub fn update(&mut self, msg: Message) -> Event {
        match msg {
            Message::Loaded { id, result } => {
                if id != self.id {
                    tracing::debug!(arrived = %id, current = %self.id, "Discarding stale detail response");
                    return Event::None;
                }
                self.phase = match result {
                    Ok(detail) => Phase::Ready(detail),
                    Err(e) => Phase::Failed(e),
                };
                Event::None
            }
            Message::Rating(msg) => {
                // The strip is read-only once a rating is on record.
                if self.already_rated.is_some() {
                    return Event::None;
                }
                let before = self.rating.committed();
                if let Some(value) = self.rating.update(msg) {
                    if value != before {
                        self.interactions += 1;
                    }
                }
                Event::None
            }
            Message::AddToWatched => match &self.phase {
                Phase::Ready(detail) if self.rating.committed() > 0 => {
                    Event::Committed(self.build_record(detail, self.rating.committed()))
                }
                _ => Event::None,
            },
            Message::Close => Event::Close,
        }
    }

    fn build_record(&self, detail: &MovieDetail, user_rating: u8) -> WatchedRecord {
        let runtime_minutes = models::parse_runtime_minutes(&detail.runtime).unwrap_or_else(|e| {
            tracing::warn!(runtime = %detail.runtime, "Unparseable runtime, storing 0: {e}");
            0
        });
        WatchedRecord {
            id: detail.id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster: detail.poster.clone().unwrap_or_default(),
            runtime_minutes,
            external_rating: detail.external_rating,
            user_rating,
            interaction_count: self.interactions,
        }
    }

    // ── View ──────────────────────────────────────────────────────

    pub fn view<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
    ) -> Element<'a, Message> {
        let back_size = style::TEXT_BASE + style::SPACE_SM * 2.0;
        let back = button(
            container(
                lucide_icons::iced::icon_arrow_left()
                    .size(style::TEXT_BASE)
                    .color(cs.on_surface_variant),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        )
        .on_press(Message::Close)
        .padding(0)
        .width(Length::Fixed(back_size))
        .height(Length::Fixed(back_size))
        .style(theme::icon_button(cs));

        let body: Element<'_, Message> = match &self.phase {
            Phase::Loading => centered_note(cs, "Loading..."),
            Phase::Failed(err) => container(
                text(err.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.error)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            )
            .padding(style::SPACE_3XL)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into(),
            Phase::Ready(detail) => self.view_ready(cs, posters, detail),
        };

        column![
            container(back).padding([style::SPACE_SM, style::SPACE_LG]),
            body
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn view_ready<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        detail: &'a MovieDetail,
    ) -> Element<'a, Message> {
        let poster = widgets::rounded_poster(
            cs,
            posters,
            &self.id,
            style::POSTER_WIDTH,
            style::POSTER_HEIGHT,
            style::RADIUS_LG,
        );

        let mut overview = column![text(detail.title.as_str())
            .size(style::TEXT_XL)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_TIGHT)]
        .spacing(style::SPACE_SM);

        let mut meta_parts: Vec<&str> = Vec::new();
        if !detail.released.is_empty() {
            meta_parts.push(detail.released.as_str());
        }
        if !detail.runtime.is_empty() {
            meta_parts.push(detail.runtime.as_str());
        }
        if !meta_parts.is_empty() {
            overview = overview.push(
                text(meta_parts.join("  \u{00B7}  "))
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }
        if !detail.genre.is_empty() {
            overview = overview.push(
                text(detail.genre.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }
        if detail.external_rating > 0.0 {
            overview = overview.push(
                row![
                    lucide_icons::iced::icon_star()
                        .size(style::TEXT_SM)
                        .color(cs.tertiary),
                    text(format!("{:.1} IMDb rating", detail.external_rating))
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                ]
                .spacing(style::SPACE_XS)
                .align_y(Alignment::Center),
            );
        }

        let header = row![poster, overview.width(Length::Fill)]
            .spacing(style::SPACE_LG)
            .align_y(Alignment::Center);

        let rating_section: Element<'_, Message> = if let Some(stored) = self.already_rated {
            row![
                lucide_icons::iced::icon_star()
                    .size(style::TEXT_BASE)
                    .color(cs.tertiary),
                text(format!("You rated this movie {stored}"))
                    .size(style::TEXT_BASE)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            ]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center)
            .into()
        } else {
            let mut section = column![self.rating.view(cs).map(Message::Rating)]
                .spacing(style::SPACE_MD)
                .align_x(Alignment::Center);
            if self.rating.committed() > 0 {
                section = section.push(
                    button(
                        row![
                            lucide_icons::iced::icon_plus().size(style::TEXT_SM).center(),
                            text("Add to watched list")
                                .size(style::TEXT_SM)
                                .line_height(style::LINE_HEIGHT_NORMAL),
                        ]
                        .spacing(style::SPACE_SM)
                        .align_y(Alignment::Center),
                    )
                    .padding([style::SPACE_SM, style::SPACE_XL])
                    .on_press(Message::AddToWatched)
                    .style(theme::primary_button(cs)),
                );
            }
            section.into()
        };

        let rating_card = container(rating_section)
            .padding(style::SPACE_LG)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(theme::card(cs));

        let mut content = column![header, rating_card].spacing(style::SPACE_XL);

        if !detail.plot.is_empty() {
            content = content.push(
                text(detail.plot.as_str())
                    .size(style::TEXT_BASE)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            );
        }
        if !detail.actors.is_empty() {
            content = content.push(
                text(format!("Starring {}", detail.actors))
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }
        if !detail.director.is_empty() {
            content = content.push(
                text(format!("Directed by {}", detail.director))
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }

        widgets::styled_scrollable(
            content.padding([style::SPACE_SM, style::SPACE_XL]),
            cs,
        )
        .height(Length::Fill)
        .into()
    }
}

fn centered_note<'a>(cs: &ColorScheme, note: &'a str) -> Element<'a, Message> {
    container(
        text(note)
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    )
    .padding(style::SPACE_3XL)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> OmdbClient {
        OmdbClient::new(String::new(), "https://example.invalid".into())
    }

    fn opened(id: &str) -> Detail {
        let (detail, _task) = Detail::open(id.to_string(), None, 5, Vec::new(), &catalog());
        detail
    }

    fn sample_detail(id: &str, title: &str, runtime: &str) -> MovieDetail {
        MovieDetail {
            id: id.to_string(),
            title: title.to_string(),
            year: "2010".into(),
            poster: Some("https://example.invalid/poster.jpg".into()),
            released: "16 Jul 2010".into(),
            runtime: runtime.to_string(),
            genre: "Drama".into(),
            plot: "Plot.".into(),
            director: "Someone".into(),
            actors: "A, B".into(),
            external_rating: 7.5,
        }
    }

    fn loaded(id: &str, title: &str) -> Detail {
        let mut detail = opened(id);
        detail.update(Message::Loaded {
            id: id.to_string(),
            result: Ok(Box::new(sample_detail(id, title, "120 min"))),
        });
        detail
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut detail = opened("tt0002");
        detail.update(Message::Loaded {
            id: "tt0001".into(),
            result: Ok(Box::new(sample_detail("tt0001", "Wrong Movie", "90 min"))),
        });
        assert!(matches!(detail.phase, Phase::Loading));
        assert_eq!(detail.ready_title(), None);
    }

    #[test]
    fn test_matching_response_becomes_ready() {
        let detail = loaded("tt0001", "Inception");
        assert_eq!(detail.ready_title(), Some("Inception"));
    }

    #[test]
    fn test_failed_fetch_keeps_the_error() {
        let mut detail = opened("tt0001");
        detail.update(Message::Loaded {
            id: "tt0001".into(),
            result: Err("connection refused".into()),
        });
        match &detail.phase {
            Phase::Failed(e) => assert_eq!(e, "connection refused"),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_commit_requires_a_loaded_detail() {
        let mut detail = opened("tt0001");
        detail.update(Message::Rating(star_rating::Message::Clicked(4)));
        match detail.update(Message::AddToWatched) {
            Event::None => {}
            other => panic!("expected None while loading, got {other:?}"),
        }
    }

    #[test]
    fn test_commit_requires_a_rating() {
        let mut detail = loaded("tt0001", "Inception");
        match detail.update(Message::AddToWatched) {
            Event::None => {}
            other => panic!("expected None without a rating, got {other:?}"),
        }
    }

    #[test]
    fn test_commit_builds_the_record() {
        let mut detail = loaded("tt0001", "Inception");
        detail.update(Message::Rating(star_rating::Message::Clicked(4)));
        match detail.update(Message::AddToWatched) {
            Event::Committed(record) => {
                assert_eq!(record.id, "tt0001");
                assert_eq!(record.title, "Inception");
                assert_eq!(record.user_rating, 4);
                assert_eq!(record.runtime_minutes, 120);
                assert_eq!(record.external_rating, 7.5);
                assert_eq!(record.interaction_count, 1);
            }
            other => panic!("expected Committed, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_runtime_is_stored_as_zero() {
        let mut detail = opened("tt0001");
        detail.update(Message::Loaded {
            id: "tt0001".into(),
            result: Ok(Box::new(sample_detail("tt0001", "Short", "N/A"))),
        });
        detail.update(Message::Rating(star_rating::Message::Clicked(2)));
        match detail.update(Message::AddToWatched) {
            Event::Committed(record) => assert_eq!(record.runtime_minutes, 0),
            other => panic!("expected Committed, got {other:?}"),
        }
    }

    #[test]
    fn test_interactions_count_rating_changes() {
        let mut detail = loaded("tt0001", "Inception");
        detail.update(Message::Rating(star_rating::Message::Entered(5)));
        detail.update(Message::Rating(star_rating::Message::Clicked(3)));
        detail.update(Message::Rating(star_rating::Message::Clicked(5)));
        detail.update(Message::Rating(star_rating::Message::Clicked(3)));
        // Re-clicking the current value is not a change.
        detail.update(Message::Rating(star_rating::Message::Clicked(3)));
        assert_eq!(detail.interactions, 3);
    }

    #[test]
    fn test_already_rated_pane_is_inert() {
        let (mut detail, _task) =
            Detail::open("tt0001".to_string(), Some(6), 5, Vec::new(), &catalog());
        detail.update(Message::Loaded {
            id: "tt0001".into(),
            result: Ok(Box::new(sample_detail("tt0001", "Inception", "120 min"))),
        });
        detail.update(Message::Rating(star_rating::Message::Clicked(3)));
        assert_eq!(detail.rating.committed(), 0);
        assert_eq!(detail.interactions, 0);
        match detail.update(Message::AddToWatched) {
            Event::None => {}
            other => panic!("expected None for an already rated movie, got {other:?}"),
        }
    }
}
