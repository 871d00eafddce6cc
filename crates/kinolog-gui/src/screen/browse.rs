use std::time::Duration;

use iced::widget::{button, column, container, row, rule, text, text_input};
use iced::{Alignment, Element, Length, Task};

use kinolog_api::omdb::OmdbClient;
use kinolog_api::traits::{MovieCatalog, MovieSummary};
use kinolog_core::config::AppConfig;
use kinolog_core::models::WatchedRecord;
use kinolog_core::storage::WatchedStore;

use crate::app;
use crate::poster_cache::PosterCache;
use crate::screen::{detail, Action};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, empty_state, rounded_poster};

/// Widget id of the search input, for keyboard-driven focus.
pub const SEARCH_INPUT_ID: &str = "browse-search-input";

// ── State ─────────────────────────────────────────────────────────

/// The single screen: search pane on the left, detail or watched list
/// on the right.
///
/// Selection is the presence of a [`detail::Detail`]; selecting the
/// movie that is already open closes it again. Search responses carry
/// the generation they were spawned under so late arrivals from an
/// abandoned query never overwrite newer results.
pub struct Browse {
    query: String,
    results: Vec<MovieSummary>,
    searching: bool,
    search_error: Option<String>,
    search_generation: u64,
    detail: Option<detail::Detail>,
}

// ── Messages ──────────────────────────────────────────────────────

/// Messages handled by the browse screen.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    /// Enter inside the search box — search right away, skipping the
    /// debounce.
    SubmitQuery,
    SearchLoaded {
        generation: u64,
        result: Result<Vec<MovieSummary>, String>,
    },
    MovieSelected(String),
    Detail(detail::Message),
    RemoveWatched(String),
    CloseDetail,
}

// ── Implementation ────────────────────────────────────────────────

impl Browse {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            searching: false,
            search_error: None,
            search_generation: 0,
            detail: None,
        }
    }

    /// Window title contribution, once a detail pane has loaded.
    pub fn window_title(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(|d| d.ready_title())
            .map(|title| format!("Movie | {title}"))
    }

    /// Poster requests for everything this screen currently shows.
    pub fn poster_info(&self) -> Vec<(String, Option<String>)> {
        let mut info: Vec<(String, Option<String>)> = self
            .results
            .iter()
            .map(|m| (m.id.clone(), m.poster.clone()))
            .collect();
        if let Some(detail) = &self.detail {
            info.extend(detail.poster_info());
        }
        info
    }

    /// Clear the query and results, used by the focus-search shortcut.
    pub fn reset_query(&mut self) {
        self.query.clear();
        self.results.clear();
        self.searching = false;
        self.search_error = None;
        self.search_generation += 1;
    }

    /// Handle a browse message, returning an Action for the app router.
    pub fn update(
        &mut self,
        msg: Message,
        watched: &mut WatchedStore,
        catalog: &OmdbClient,
        config: &AppConfig,
    ) -> Action {
        match msg {
            Message::QueryChanged(new_query) => {
                self.query = new_query;
                if self.trimmed_query_len() < config.search.min_query_len {
                    self.results.clear();
                    self.searching = false;
                    self.search_error = None;
                    // Invalidate anything still in flight.
                    self.search_generation += 1;
                    return Action::None;
                }
                self.start_search(catalog, config.search.debounce_ms)
            }
            Message::SubmitQuery => {
                if self.trimmed_query_len() < config.search.min_query_len {
                    return Action::None;
                }
                self.start_search(catalog, 0)
            }
            Message::SearchLoaded { generation, result } => {
                if generation != self.search_generation {
                    tracing::debug!(
                        arrived = generation,
                        current = self.search_generation,
                        "Discarding stale search results"
                    );
                    return Action::None;
                }
                self.searching = false;
                match result {
                    Ok(results) => {
                        self.results = results;
                        self.search_error = None;
                    }
                    Err(e) => {
                        self.results.clear();
                        self.search_error = Some(e);
                    }
                }
                Action::None
            }
            Message::MovieSelected(id) => {
                if self.detail.as_ref().is_some_and(|d| d.id() == id) {
                    self.detail = None;
                    return Action::None;
                }
                let already_rated = watched.get(&id).map(|r| r.user_rating);
                let (detail, task) = detail::Detail::open(
                    id,
                    already_rated,
                    config.rating.max,
                    config.rating.labels.clone(),
                    catalog,
                );
                self.detail = Some(detail);
                Action::RunTask(task)
            }
            Message::Detail(msg) => {
                let Some(detail) = self.detail.as_mut() else {
                    tracing::debug!("Detail message after the pane closed, ignoring");
                    return Action::None;
                };
                match detail.update(msg) {
                    detail::Event::None => Action::None,
                    detail::Event::Close => {
                        self.detail = None;
                        Action::None
                    }
                    detail::Event::Committed(record) => {
                        let title = record.title.clone();
                        watched.add(record);
                        self.detail = None;
                        Action::SetStatus(format!("Added {title} to watched"))
                    }
                }
            }
            Message::RemoveWatched(id) => {
                let title = watched
                    .get(&id)
                    .map(|r| r.title.clone())
                    .unwrap_or_else(|| "movie".into());
                if watched.remove(&id) {
                    Action::SetStatus(format!("Removed {title} from watched"))
                } else {
                    Action::None
                }
            }
            Message::CloseDetail => {
                self.detail = None;
                Action::None
            }
        }
    }

    fn trimmed_query_len(&self) -> usize {
        self.query.trim().chars().count()
    }

    fn start_search(&mut self, catalog: &OmdbClient, debounce_ms: u64) -> Action {
        self.searching = true;
        self.search_error = None;
        self.search_generation += 1;
        let generation = self.search_generation;
        let query = self.query.trim().to_string();
        let catalog = catalog.clone();
        Action::RunTask(Task::perform(
            async move {
                if debounce_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(debounce_ms)).await;
                }
                let result = catalog.search_movies(&query).await.map_err(|e| e.to_string());
                (generation, result)
            },
            |(generation, result)| {
                app::Message::Browse(Message::SearchLoaded { generation, result })
            },
        ))
    }

    // ── View ──────────────────────────────────────────────────────

    pub fn view<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        watched: &'a WatchedStore,
    ) -> Element<'a, Message> {
        let left = self.view_search_pane(cs, posters);

        let right: Element<'_, Message> = match &self.detail {
            Some(detail) => detail.view(cs, posters).map(Message::Detail),
            None => watched_pane(cs, posters, watched),
        };

        row![
            container(left)
                .width(Length::FillPortion(style::SEARCH_PANE_WIDTH))
                .height(Length::Fill),
            rule::vertical(1),
            container(right)
                .width(Length::FillPortion(style::DETAIL_PANE_WIDTH))
                .height(Length::Fill),
        ]
        .height(Length::Fill)
        .into()
    }

    fn view_search_pane<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
    ) -> Element<'a, Message> {
        let search_icon = lucide_icons::iced::icon_search()
            .size(style::TEXT_BASE)
            .color(cs.on_surface_variant);

        let search_input = text_input("Search movies...", &self.query)
            .id(text_input::Id::new(SEARCH_INPUT_ID))
            .on_input(Message::QueryChanged)
            .on_submit(Message::SubmitQuery)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .width(Length::Fill)
            .style(theme::text_input_borderless(cs));

        let mut search_row = row![search_icon, search_input]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center);

        if !self.query.is_empty() {
            let clear_size = style::TEXT_SM + style::SPACE_XS * 2.0;
            let clear_btn = button(
                container(
                    lucide_icons::iced::icon_x()
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant),
                )
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            )
            .on_press(Message::QueryChanged(String::new()))
            .padding(0)
            .width(Length::Fixed(clear_size))
            .height(Length::Fixed(clear_size))
            .style(theme::icon_button(cs));
            search_row = search_row.push(clear_btn);
        }

        let header = container(
            container(search_row)
                .style(theme::search_bar(cs))
                .padding([style::SPACE_SM, style::SPACE_MD])
                .width(Length::Fill),
        )
        .padding([style::SPACE_SM, style::SPACE_LG]);

        let mut pane = column![header].spacing(0).width(Length::Fill);

        if !self.results.is_empty() {
            let count = format!(
                "Found {} {}",
                self.results.len(),
                if self.results.len() == 1 {
                    "result"
                } else {
                    "results"
                }
            );
            pane = pane.push(
                container(
                    text(count)
                        .size(style::TEXT_XS)
                        .color(cs.outline)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                )
                .padding([0.0, style::SPACE_XL]),
            );
        }

        let list: Element<'_, Message> = if self.searching {
            container(
                text("Searching...")
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            )
            .padding(style::SPACE_3XL)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
        } else if let Some(err) = &self.search_error {
            container(
                column![
                    text(err.as_str())
                        .size(style::TEXT_SM)
                        .color(cs.error)
                        .line_height(style::LINE_HEIGHT_NORMAL),
                    button(text("Retry").size(style::TEXT_SM))
                        .padding([style::SPACE_SM, style::SPACE_XL])
                        .on_press(Message::SubmitQuery)
                        .style(theme::ghost_button(cs)),
                ]
                .spacing(style::SPACE_MD)
                .align_x(Alignment::Center),
            )
            .padding(style::SPACE_3XL)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
        } else if self.results.is_empty() {
            empty_state(
                cs,
                lucide_icons::iced::icon_search(),
                "Search for a movie",
                "Results appear as you type",
            )
        } else {
            let selected = self.detail.as_ref().map(|d| d.id());
            let items: Vec<Element<'a, Message>> = self
                .results
                .iter()
                .map(|movie| {
                    movie_list_item(cs, posters, movie, selected == Some(movie.id.as_str()))
                })
                .collect();

            widgets::styled_scrollable(
                column(items)
                    .spacing(style::SPACE_XXS)
                    .padding([style::SPACE_XS, style::SPACE_LG]),
                cs,
            )
            .height(Length::Fill)
            .into()
        };

        pane.push(list).height(Length::Fill).into()
    }
}

// ── Helper functions ──────────────────────────────────────────────

/// A single search result row.
fn movie_list_item<'a>(
    cs: &'a ColorScheme,
    posters: &'a PosterCache,
    movie: &'a MovieSummary,
    selected: bool,
) -> Element<'a, Message> {
    let thumb = rounded_poster(
        cs,
        posters,
        &movie.id,
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let info = column![
        text(movie.title.as_str())
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_NORMAL),
        text(movie.year.as_str())
            .size(style::TEXT_XS)
            .color(cs.outline)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_XXS);

    button(
        row![thumb, info.width(Length::Fill)]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([style::SPACE_XS, style::SPACE_MD])
    .on_press(Message::MovieSelected(movie.id.clone()))
    .style(theme::list_item(selected, cs))
    .into()
}

/// The right pane when nothing is selected: aggregate summary over the
/// watched list plus one row per watched movie.
fn watched_pane<'a>(
    cs: &'a ColorScheme,
    posters: &'a PosterCache,
    watched: &'a WatchedStore,
) -> Element<'a, Message> {
    if watched.records().is_empty() {
        return empty_state(
            cs,
            lucide_icons::iced::icon_film(),
            "Nothing watched yet",
            "Rate a movie to start your log",
        );
    }

    let aggregates = watched.aggregates();
    let count = format!(
        "{} {}",
        aggregates.count,
        if aggregates.count == 1 {
            "movie"
        } else {
            "movies"
        }
    );

    let stat = |icon: iced::widget::Text<'a>, value: String| {
        row![
            icon.size(style::TEXT_SM),
            text(value)
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center)
    };

    let summary = container(
        column![
            text("Movies you watched")
                .size(style::TEXT_LG)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            row![
                stat(
                    lucide_icons::iced::icon_film().color(cs.on_surface_variant),
                    count
                ),
                stat(
                    lucide_icons::iced::icon_star().color(cs.tertiary),
                    format!("{:.2}", aggregates.mean_external_rating)
                ),
                stat(
                    lucide_icons::iced::icon_star().color(cs.primary),
                    format!("{:.2}", aggregates.mean_user_rating)
                ),
                stat(
                    lucide_icons::iced::icon_clock().color(cs.on_surface_variant),
                    format!("{:.0} min", aggregates.mean_runtime_minutes)
                ),
            ]
            .spacing(style::SPACE_LG)
            .align_y(Alignment::Center),
        ]
        .spacing(style::SPACE_SM),
    )
    .padding(style::SPACE_LG)
    .width(Length::Fill)
    .style(theme::card(cs));

    let rows: Vec<Element<'a, Message>> = watched
        .records()
        .iter()
        .map(|record| watched_row(cs, posters, record))
        .collect();

    column![
        container(summary).padding([style::SPACE_SM, style::SPACE_LG]),
        widgets::styled_scrollable(
            column(rows)
                .spacing(style::SPACE_XXS)
                .padding([style::SPACE_XS, style::SPACE_LG]),
            cs,
        )
        .height(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// A single watched list row with its stored ratings and a remove button.
fn watched_row<'a>(
    cs: &'a ColorScheme,
    posters: &'a PosterCache,
    record: &'a WatchedRecord,
) -> Element<'a, Message> {
    let thumb = rounded_poster(
        cs,
        posters,
        &record.id,
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let stat = |icon: iced::widget::Text<'a>, value: String| {
        row![
            icon.size(style::TEXT_XS),
            text(value)
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center)
    };

    let info = column![
        text(record.title.as_str())
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_NORMAL),
        row![
            stat(
                lucide_icons::iced::icon_star().color(cs.tertiary),
                format!("{:.1}", record.external_rating)
            ),
            stat(
                lucide_icons::iced::icon_star().color(cs.primary),
                record.user_rating.to_string()
            ),
            stat(
                lucide_icons::iced::icon_clock().color(cs.on_surface_variant),
                format!("{} min", record.runtime_minutes)
            ),
        ]
        .spacing(style::SPACE_MD)
        .align_y(Alignment::Center),
    ]
    .spacing(style::SPACE_XXS);

    let remove_size = style::TEXT_SM + style::SPACE_XS * 2.0;
    let remove = button(
        container(lucide_icons::iced::icon_x().size(style::TEXT_SM))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(Message::RemoveWatched(record.id.clone()))
    .padding(0)
    .width(Length::Fixed(remove_size))
    .height(Length::Fixed(remove_size))
    .style(theme::remove_button(cs));

    container(
        row![thumb, info.width(Length::Fill), remove]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([style::SPACE_XS, style::SPACE_MD])
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (WatchedStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        (WatchedStore::load(dir.path().join("watched.json")), dir)
    }

    fn catalog() -> OmdbClient {
        OmdbClient::new("key".into(), "https://example.invalid".into())
    }

    fn summary(id: &str, title: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: title.to_string(),
            year: "2010".into(),
            poster: None,
        }
    }

    fn loaded_detail(id: &str, title: &str) -> Message {
        Message::Detail(detail::Message::Loaded {
            id: id.to_string(),
            result: Ok(Box::new(kinolog_api::traits::MovieDetail {
                id: id.to_string(),
                title: title.to_string(),
                year: "2010".into(),
                poster: None,
                released: "16 Jul 2010".into(),
                runtime: "148 min".into(),
                genre: "Sci-Fi".into(),
                plot: "Plot.".into(),
                director: "Someone".into(),
                actors: "A, B".into(),
                external_rating: 8.8,
            })),
        })
    }

    #[test]
    fn test_short_query_clears_results_without_searching() {
        let (mut watched, _dir) = store();
        let mut browse = Browse::new();
        browse.results = vec![summary("tt0001", "Old")];

        let action = browse.update(
            Message::QueryChanged("ab".into()),
            &mut watched,
            &catalog(),
            &AppConfig::default(),
        );

        assert!(matches!(action, Action::None));
        assert!(browse.results.is_empty());
        assert!(!browse.searching);
    }

    #[test]
    fn test_query_spawns_a_search_task() {
        let (mut watched, _dir) = store();
        let mut browse = Browse::new();

        let action = browse.update(
            Message::QueryChanged("dune".into()),
            &mut watched,
            &catalog(),
            &AppConfig::default(),
        );

        assert!(matches!(action, Action::RunTask(_)));
        assert!(browse.searching);
    }

    #[test]
    fn test_stale_search_results_are_discarded() {
        let (mut watched, _dir) = store();
        let catalog = catalog();
        let config = AppConfig::default();
        let mut browse = Browse::new();

        browse.update(
            Message::QueryChanged("dune".into()),
            &mut watched,
            &catalog,
            &config,
        );
        browse.update(
            Message::QueryChanged("dune part".into()),
            &mut watched,
            &catalog,
            &config,
        );

        // The first query resolves after the second superseded it.
        browse.update(
            Message::SearchLoaded {
                generation: 1,
                result: Ok(vec![summary("tt0001", "Dune")]),
            },
            &mut watched,
            &catalog,
            &config,
        );
        assert!(browse.results.is_empty());
        assert!(browse.searching);

        browse.update(
            Message::SearchLoaded {
                generation: 2,
                result: Ok(vec![summary("tt0002", "Dune: Part Two")]),
            },
            &mut watched,
            &catalog,
            &config,
        );
        assert_eq!(browse.results.len(), 1);
        assert_eq!(browse.results[0].id, "tt0002");
        assert!(!browse.searching);
    }

    #[test]
    fn test_search_failure_is_kept_for_display() {
        let (mut watched, _dir) = store();
        let catalog = catalog();
        let config = AppConfig::default();
        let mut browse = Browse::new();

        browse.update(
            Message::QueryChanged("dune".into()),
            &mut watched,
            &catalog,
            &config,
        );
        browse.update(
            Message::SearchLoaded {
                generation: 1,
                result: Err("Movie not found!".into()),
            },
            &mut watched,
            &catalog,
            &config,
        );

        assert_eq!(browse.search_error.as_deref(), Some("Movie not found!"));
        assert!(browse.results.is_empty());
    }

    #[test]
    fn test_selecting_the_open_movie_closes_the_pane() {
        let (mut watched, _dir) = store();
        let catalog = catalog();
        let config = AppConfig::default();
        let mut browse = Browse::new();

        let action = browse.update(
            Message::MovieSelected("tt0001".into()),
            &mut watched,
            &catalog,
            &config,
        );
        assert!(matches!(action, Action::RunTask(_)));
        assert!(browse.detail.is_some());

        let action = browse.update(
            Message::MovieSelected("tt0001".into()),
            &mut watched,
            &catalog,
            &config,
        );
        assert!(matches!(action, Action::None));
        assert!(browse.detail.is_none());
    }

    #[test]
    fn test_selecting_another_movie_replaces_the_pane() {
        let (mut watched, _dir) = store();
        let catalog = catalog();
        let config = AppConfig::default();
        let mut browse = Browse::new();

        browse.update(
            Message::MovieSelected("tt0001".into()),
            &mut watched,
            &catalog,
            &config,
        );
        browse.update(
            Message::MovieSelected("tt0002".into()),
            &mut watched,
            &catalog,
            &config,
        );

        assert_eq!(browse.detail.as_ref().map(|d| d.id()), Some("tt0002"));

        // The fetch for the first selection resolves late and must not
        // paint the pane now tied to the second movie.
        browse.update(
            loaded_detail("tt0001", "First Movie"),
            &mut watched,
            &catalog,
            &config,
        );
        assert_eq!(browse.window_title(), None);
    }

    #[test]
    fn test_detail_response_after_close_is_ignored() {
        let (mut watched, _dir) = store();
        let catalog = catalog();
        let config = AppConfig::default();
        let mut browse = Browse::new();

        browse.update(
            Message::MovieSelected("tt0001".into()),
            &mut watched,
            &catalog,
            &config,
        );
        browse.update(Message::CloseDetail, &mut watched, &catalog, &config);

        let action = browse.update(
            loaded_detail("tt0001", "First Movie"),
            &mut watched,
            &catalog,
            &config,
        );
        assert!(matches!(action, Action::None));
        assert!(browse.detail.is_none());
    }

    #[test]
    fn test_window_title_follows_the_loaded_detail() {
        let (mut watched, _dir) = store();
        let catalog = catalog();
        let config = AppConfig::default();
        let mut browse = Browse::new();

        assert_eq!(browse.window_title(), None);

        browse.update(
            Message::MovieSelected("tt0001".into()),
            &mut watched,
            &catalog,
            &config,
        );
        assert_eq!(browse.window_title(), None);

        browse.update(
            loaded_detail("tt0001", "Inception"),
            &mut watched,
            &catalog,
            &config,
        );
        assert_eq!(browse.window_title(), Some("Movie | Inception".into()));

        browse.update(Message::CloseDetail, &mut watched, &catalog, &config);
        assert_eq!(browse.window_title(), None);
    }

    #[test]
    fn test_committing_a_rating_adds_and_deselects() {
        let (mut watched, _dir) = store();
        let catalog = catalog();
        let config = AppConfig::default();
        let mut browse = Browse::new();

        browse.update(
            Message::MovieSelected("tt0001".into()),
            &mut watched,
            &catalog,
            &config,
        );
        browse.update(
            loaded_detail("tt0001", "Inception"),
            &mut watched,
            &catalog,
            &config,
        );
        browse.update(
            Message::Detail(detail::Message::Rating(
                crate::widgets::star_rating::Message::Clicked(7),
            )),
            &mut watched,
            &catalog,
            &config,
        );
        let action = browse.update(
            Message::Detail(detail::Message::AddToWatched),
            &mut watched,
            &catalog,
            &config,
        );

        match action {
            Action::SetStatus(status) => assert_eq!(status, "Added Inception to watched"),
            _ => panic!("expected SetStatus"),
        }
        assert!(browse.detail.is_none());

        let record = watched.get("tt0001").expect("record was added");
        assert_eq!(record.user_rating, 7);
        assert_eq!(record.runtime_minutes, 148);
        assert_eq!(record.interaction_count, 1);
    }

    #[test]
    fn test_reopening_a_rated_movie_cannot_rate_again() {
        let (mut watched, _dir) = store();
        let catalog = catalog();
        let config = AppConfig::default();
        let mut browse = Browse::new();

        browse.update(
            Message::MovieSelected("tt0001".into()),
            &mut watched,
            &catalog,
            &config,
        );
        browse.update(
            loaded_detail("tt0001", "Inception"),
            &mut watched,
            &catalog,
            &config,
        );
        browse.update(
            Message::Detail(detail::Message::Rating(
                crate::widgets::star_rating::Message::Clicked(7),
            )),
            &mut watched,
            &catalog,
            &config,
        );
        browse.update(
            Message::Detail(detail::Message::AddToWatched),
            &mut watched,
            &catalog,
            &config,
        );

        // Second visit: the stored rating locks the strip.
        browse.update(
            Message::MovieSelected("tt0001".into()),
            &mut watched,
            &catalog,
            &config,
        );
        browse.update(
            loaded_detail("tt0001", "Inception"),
            &mut watched,
            &catalog,
            &config,
        );
        browse.update(
            Message::Detail(detail::Message::Rating(
                crate::widgets::star_rating::Message::Clicked(3),
            )),
            &mut watched,
            &catalog,
            &config,
        );
        let action = browse.update(
            Message::Detail(detail::Message::AddToWatched),
            &mut watched,
            &catalog,
            &config,
        );

        assert!(matches!(action, Action::None));
        assert_eq!(watched.get("tt0001").map(|r| r.user_rating), Some(7));
    }

    #[test]
    fn test_remove_watched_updates_store_and_status() {
        let (mut watched, _dir) = store();
        let catalog = catalog();
        let config = AppConfig::default();
        let mut browse = Browse::new();

        watched.add(WatchedRecord {
            id: "tt0001".into(),
            title: "Inception".into(),
            year: "2010".into(),
            poster: String::new(),
            runtime_minutes: 148,
            external_rating: 8.8,
            user_rating: 7,
            interaction_count: 1,
        });

        let action = browse.update(
            Message::RemoveWatched("tt0001".into()),
            &mut watched,
            &catalog,
            &config,
        );

        match action {
            Action::SetStatus(status) => assert_eq!(status, "Removed Inception from watched"),
            _ => panic!("expected SetStatus"),
        }
        assert!(!watched.contains("tt0001"));

        let action = browse.update(
            Message::RemoveWatched("tt0001".into()),
            &mut watched,
            &catalog,
            &config,
        );
        assert!(matches!(action, Action::None));
    }

    #[test]
    fn test_reset_query_invalidates_inflight_search() {
        let (mut watched, _dir) = store();
        let catalog = catalog();
        let config = AppConfig::default();
        let mut browse = Browse::new();

        browse.update(
            Message::QueryChanged("dune".into()),
            &mut watched,
            &catalog,
            &config,
        );
        browse.reset_query();

        browse.update(
            Message::SearchLoaded {
                generation: 1,
                result: Ok(vec![summary("tt0001", "Dune")]),
            },
            &mut watched,
            &catalog,
            &config,
        );

        assert!(browse.query.is_empty());
        assert!(browse.results.is_empty());
    }
}
