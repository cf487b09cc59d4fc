// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search panel, the
//! translation modal and the movie database client.
//!
//! The `App` struct owns the components and translates their events into
//! side effects: HTTP requests, poster downloads, preference persistence and
//! toast notifications.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::domain::search::Generation;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{ApiError, TmdbClient};
use crate::ui::notifications::{self, Notification};
use crate::ui::search_panel;
use crate::ui::theming::ThemeMode;
use crate::ui::translation_modal::State as ModalState;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    search_panel: search_panel::State,
    /// Open translation modal, if any.
    modal: Option<ModalState>,
    /// Bumped each time a modal opens.
    modal_generation: Generation,
    /// Client built from the startup configuration.
    client: Result<TmdbClient, ApiError>,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("languages", self.search_panel.languages())
            .field("status", self.search_panel.status())
            .field("modal", &self.modal)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, injects the language table into the search
    /// panel and optionally submits the `--query` search.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let (table, table_warning) = config.language_table();
        let languages = table.default_pair(
            config.search.default_source.as_deref(),
            config.search.default_destination.as_deref(),
        );
        let search_panel = search_panel::State::new(table, languages, config.overview_limit());
        let client = TmdbClient::new(config.client_settings(flags.api_key.clone()));

        let mut app = App {
            i18n,
            search_panel,
            modal: None,
            modal_generation: Generation::default(),
            client,
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::new(),
        };

        for key in [config_warning, table_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        let key_error = match &app.client {
            Ok(client) => client.api_key().err(),
            Err(error) => Some(error.clone()),
        };
        if let Some(error) = key_error {
            tracing::warn!(%error, "movie database client unavailable");
            app.notifications.push(Notification::api_error(&error));
        }

        let task = match flags.query {
            Some(query) => {
                app.search_panel.set_query(query);
                Task::done(Message::SearchPanel(search_panel::Message::Submit))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.modal {
            Some(modal) => format!("{} - {app_name}", modal.title()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.modal.is_some());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            search_panel: &mut self.search_panel,
            modal: &mut self.modal,
            modal_generation: &mut self.modal_generation,
            client: &self.client,
            notifications: &mut self.notifications,
        };

        match message {
            Message::SearchPanel(panel_message) => {
                update::handle_search_panel_message(&mut ctx, panel_message)
            }
            Message::Modal(modal_message) => update::handle_modal_message(&mut ctx, modal_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SearchCompleted { generation, result } => {
                update::handle_search_completed(&mut ctx, generation, result)
            }
            Message::PosterLoaded {
                generation,
                movie_id,
                result,
            } => update::handle_poster_loaded(&mut ctx, generation, movie_id, result),
            Message::DetailLoaded { generation, result } => {
                update::handle_detail_loaded(&mut ctx, generation, result)
            }
            Message::Tick(_now) => {
                ctx.notifications.tick();
                Task::none()
            }
            Message::EscapePressed => {
                update::close_modal(&mut ctx);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            search_panel: &self.search_panel,
            modal: self.modal.as_ref(),
            notifications: &self.notifications,
        })
    }
}
