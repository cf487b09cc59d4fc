// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Component events are turned into requests here: every request is a
//! `Task` tagged with the generation that issued it, and every response is
//! routed back to the component that owns that generation.

use super::{persistence, Message};
use crate::domain::language::Language;
use crate::domain::movie::{MovieDetail, SearchPage};
use crate::domain::search::{Generation, SearchQuery};
use crate::infrastructure::{ApiError, TmdbClient};
use crate::ui::notifications::{self, Notification};
use crate::ui::poster;
use crate::ui::search_panel::{self, Applied};
use crate::ui::translation_modal::{self, State as ModalState};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub search_panel: &'a mut search_panel::State,
    pub modal: &'a mut Option<ModalState>,
    pub modal_generation: &'a mut Generation,
    pub client: &'a Result<TmdbClient, ApiError>,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_search_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: search_panel::Message,
) -> Task<Message> {
    match search_panel::update(ctx.search_panel, message) {
        search_panel::Event::None => Task::none(),
        search_panel::Event::Search { query, generation } => {
            if let Some(key) = persistence::persist_language_pair(query.languages()) {
                ctx.notifications.push(Notification::warning(key));
            }
            search_task(ctx.client, query, generation)
        }
        search_panel::Event::OpenTranslation {
            movie_id,
            title,
            language,
        } => open_modal(ctx, movie_id, title, language),
    }
}

fn search_task(
    client: &Result<TmdbClient, ApiError>,
    query: SearchQuery,
    generation: Generation,
) -> Task<Message> {
    tracing::info!(
        %generation,
        source = query.source_code(),
        destination = query.destination_code(),
        "search issued"
    );
    match client {
        Ok(client) => {
            let client = client.clone();
            Task::perform(
                async move { client.search_movies(&query).await },
                move |result| Message::SearchCompleted { generation, result },
            )
        }
        Err(error) => Task::done(Message::SearchCompleted {
            generation,
            result: Err(error.clone()),
        }),
    }
}

pub fn handle_search_completed(
    ctx: &mut UpdateContext<'_>,
    generation: Generation,
    result: Result<SearchPage, ApiError>,
) -> Task<Message> {
    match ctx.search_panel.apply_results(generation, result) {
        Applied::Loaded => {
            ctx.notifications.clear_api_errors();
            poster_tasks(ctx.client, ctx.search_panel.poster_requests(), generation)
        }
        Applied::Failed | Applied::Stale => Task::none(),
    }
}

fn poster_tasks(
    client: &Result<TmdbClient, ApiError>,
    requests: Vec<(u64, String)>,
    generation: Generation,
) -> Task<Message> {
    let Ok(client) = client else {
        return Task::none();
    };

    Task::batch(requests.into_iter().map(|(movie_id, path)| {
        let client = client.clone();
        Task::perform(
            async move { client.fetch_poster(&path).await },
            move |result| Message::PosterLoaded {
                generation,
                movie_id,
                result,
            },
        )
    }))
}

pub fn handle_poster_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: Generation,
    movie_id: u64,
    result: Result<Vec<u8>, ApiError>,
) -> Task<Message> {
    match result {
        Ok(bytes) => {
            ctx.search_panel
                .poster_loaded(generation, movie_id, poster::handle_from_bytes(bytes));
        }
        Err(error) => {
            tracing::debug!(%error, movie_id, "poster unavailable, keeping placeholder");
        }
    }
    Task::none()
}

fn open_modal(
    ctx: &mut UpdateContext<'_>,
    movie_id: u64,
    title: String,
    language: Language,
) -> Task<Message> {
    close_modal(ctx);

    let generation = ctx.modal_generation.bump();
    let poster = ctx.search_panel.poster(movie_id).cloned();
    let mut state = ModalState::open(movie_id, title, language.clone(), generation, poster);

    let task = match ctx.client {
        Ok(client) => {
            let client = client.clone();
            let (task, handle) = Task::perform(
                async move { client.movie_details(movie_id, &language.code).await },
                move |result| Message::DetailLoaded { generation, result },
            )
            .abortable();
            state.track_request(handle);
            task
        }
        Err(error) => Task::done(Message::DetailLoaded {
            generation,
            result: Err(error.clone()),
        }),
    };

    *ctx.modal = Some(state);
    task
}

/// Closes the modal, if open, cancelling its request.
pub fn close_modal(ctx: &mut UpdateContext<'_>) {
    if let Some(state) = ctx.modal.take() {
        state.close();
    }
}

pub fn handle_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: translation_modal::Message,
) -> Task<Message> {
    match translation_modal::update(message) {
        translation_modal::Event::Closed => close_modal(ctx),
    }
    Task::none()
}

pub fn handle_detail_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: Generation,
    result: Result<MovieDetail, ApiError>,
) -> Task<Message> {
    match ctx.modal.as_mut() {
        Some(state) => {
            if state.apply_detail(generation, result) {
                ctx.notifications.clear_api_errors();
            }
        }
        None => tracing::debug!(%generation, "detail response after close dropped"),
    }
    Task::none()
}
