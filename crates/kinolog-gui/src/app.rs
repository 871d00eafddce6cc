//! Application state and the top-level message router.

use std::path::PathBuf;

use iced::widget::{column, container, text, text_input};
use iced::{window, Alignment, Element, Length, Subscription, Task, Theme};

use kinolog_api::omdb::OmdbClient;
use kinolog_core::config::AppConfig;
use kinolog_core::storage::WatchedStore;

use crate::keyboard;
use crate::poster_cache::{self, PosterCache, PosterState};
use crate::screen::{browse, Action};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::window_state::WindowState;

pub struct Kinolog {
    config: AppConfig,
    watched: WatchedStore,
    catalog: OmdbClient,
    browse: browse::Browse,
    posters: PosterCache,
    cs: ColorScheme,
    status_message: String,
    window_state: WindowState,
}

#[derive(Debug, Clone)]
pub enum Message {
    Browse(browse::Message),
    Shortcut(keyboard::Shortcut),
    PosterLoaded {
        id: String,
        result: Result<PathBuf, String>,
    },
    WindowEvent(window::Event),
}

impl Kinolog {
    pub fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {e}");
            AppConfig::default()
        });
        let watched_path = AppConfig::ensure_watched_path().unwrap_or_else(|e| {
            tracing::warn!("Failed to prepare the data directory: {e}");
            AppConfig::watched_path()
        });

        let catalog = OmdbClient::new(
            config.catalog.api_key.clone(),
            config.catalog.base_url.clone(),
        );

        let mut app = Self {
            config,
            watched: WatchedStore::load(watched_path),
            catalog,
            browse: browse::Browse::new(),
            posters: PosterCache::default(),
            cs: ColorScheme::for_mode(theme::detect_mode()),
            status_message: String::from("Ready"),
            window_state: WindowState::load(),
        };

        // The watched list restored from disk already needs its posters.
        let posters = app.request_visible_posters();
        (app, posters)
    }

    pub fn title(&self) -> String {
        self.browse
            .window_title()
            .unwrap_or_else(|| String::from("Kinolog"))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Browse(msg) => {
                let action =
                    self.browse
                        .update(msg, &mut self.watched, &self.catalog, &self.config);
                let task = self.handle_action(action);
                let posters = self.request_visible_posters();
                Task::batch([task, posters])
            }
            Message::Shortcut(shortcut) => match shortcut {
                keyboard::Shortcut::FocusSearch => {
                    self.browse.reset_query();
                    text_input::focus(text_input::Id::new(browse::SEARCH_INPUT_ID))
                }
                keyboard::Shortcut::CloseDetail => {
                    let action = self.browse.update(
                        browse::Message::CloseDetail,
                        &mut self.watched,
                        &self.catalog,
                        &self.config,
                    );
                    self.handle_action(action)
                }
            },
            Message::PosterLoaded { id, result } => {
                match result {
                    Ok(path) => {
                        self.posters.states.insert(id, PosterState::Loaded(path));
                    }
                    Err(e) => {
                        tracing::warn!(movie = %id, "Poster download failed: {e}");
                        self.posters.states.insert(id, PosterState::Failed);
                    }
                }
                Task::none()
            }
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Resized(size) => {
                        self.window_state.width = size.width;
                        self.window_state.height = size.height;
                        self.window_state.save();
                    }
                    window::Event::Moved(position) => {
                        self.window_state.x = position.x;
                        self.window_state.y = position.y;
                        self.window_state.save();
                    }
                    _ => {}
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = self
            .browse
            .view(&self.cs, &self.posters, &self.watched)
            .map(Message::Browse);

        let status_bar = container(
            text(self.status_message.as_str())
                .size(style::TEXT_XS)
                .color(self.cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([4.0, style::SPACE_MD])
        .align_y(Alignment::Center)
        .style(theme::status_bar(&self.cs));

        column![content, status_bar].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            keyboard::keyboard_subscription(),
            iced::event::listen_with(|event, _status, _id| match event {
                iced::Event::Window(e @ (window::Event::Resized(_) | window::Event::Moved(_))) => {
                    Some(Message::WindowEvent(e))
                }
                _ => None,
            }),
        ])
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.cs)
    }

    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::SetStatus(status) => {
                self.status_message = status;
                Task::none()
            }
            Action::RunTask(task) => task,
        }
    }

    /// Kick off poster downloads for everything currently on screen.
    ///
    /// Ids already in the cache are skipped, so calling this after every
    /// browse message is cheap.
    fn request_visible_posters(&mut self) -> Task<Message> {
        let mut info = self.browse.poster_info();
        info.extend(self.watched.records().iter().map(|record| {
            let poster = (!record.poster.is_empty()).then(|| record.poster.clone());
            (record.id.clone(), poster)
        }));

        let tasks: Vec<Task<Message>> = info
            .into_iter()
            .map(|(id, url)| self.request_poster(id, url))
            .collect();
        Task::batch(tasks)
    }

    fn request_poster(&mut self, id: String, url: Option<String>) -> Task<Message> {
        let Some(url) = url else {
            self.posters.states.entry(id).or_insert(PosterState::Failed);
            return Task::none();
        };

        if self.posters.states.contains_key(&id) {
            return Task::none();
        }

        let path = poster_cache::poster_path(&id);
        if path.exists() {
            self.posters.states.insert(id, PosterState::Loaded(path));
            return Task::none();
        }

        self.posters.states.insert(id.clone(), PosterState::Loading);
        let key = id.clone();
        Task::perform(poster_cache::fetch_poster(id, url), move |result| {
            Message::PosterLoaded {
                id: key.clone(),
                result,
            }
        })
    }
}
