// SPDX-License-Identifier: MPL-2.0
//! Translation modal: one movie's details in the destination language.
//!
//! The modal is created when a card's "See Translation" button is pressed
//! and dropped when it closes. The detail request it triggers is abortable;
//! closing the modal aborts it, and a response that still arrives is
//! rejected by its generation.

use crate::domain::language::Language;
use crate::domain::movie::{score_percent, MovieDetail};
use crate::domain::search::Generation;
use crate::i18n::fluent::I18n;
use crate::infrastructure::ApiError;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::poster;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::task;
use iced::widget::{
    button, center, image, mouse_area, opaque, scrollable, stack, Column, Container, Row, Text,
};
use iced::{alignment, Element, Length};

/// Loading progress of the detail request.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Loaded(Box<MovieDetail>),
    Failed(ApiError),
}

/// State of an open modal.
pub struct State {
    movie_id: u64,
    card_title: String,
    language: Language,
    generation: Generation,
    phase: Phase,
    poster: Option<image::Handle>,
    request: Option<task::Handle>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("movie_id", &self.movie_id)
            .field("language", &self.language.code)
            .field("generation", &self.generation)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

/// Messages emitted by the modal widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Closed,
}

impl State {
    /// Opens the modal for `movie_id` in `language`. `card_title` and
    /// `poster` come from the search result and are shown until the detail
    /// arrives.
    #[must_use]
    pub fn open(
        movie_id: u64,
        card_title: String,
        language: Language,
        generation: Generation,
        poster: Option<image::Handle>,
    ) -> Self {
        Self {
            movie_id,
            card_title,
            language,
            generation,
            phase: Phase::Loading,
            poster,
            request: None,
        }
    }

    /// Keeps the handle of the in-flight detail request so it can be aborted.
    pub fn track_request(&mut self, handle: task::Handle) {
        self.request = Some(handle);
    }

    #[must_use]
    pub fn movie_id(&self) -> u64 {
        self.movie_id
    }

    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Window title: the translated one once loaded, the card's before.
    #[must_use]
    pub fn title(&self) -> &str {
        self.translated_title().unwrap_or(&self.card_title)
    }

    /// Dialog heading. Empty until the detail in the target language arrives.
    #[must_use]
    pub fn translated_title(&self) -> Option<&str> {
        match &self.phase {
            Phase::Loaded(detail) if !detail.title.is_empty() => Some(&detail.title),
            _ => None,
        }
    }

    /// Applies a detail response. Returns `false` when it belongs to another
    /// generation and was ignored.
    pub fn apply_detail(
        &mut self,
        generation: Generation,
        result: Result<MovieDetail, ApiError>,
    ) -> bool {
        if !self.generation.is_current(generation) {
            tracing::debug!(%generation, current = %self.generation, "stale detail response dropped");
            return false;
        }
        self.request = None;
        self.phase = match result {
            Ok(detail) => Phase::Loaded(Box::new(detail)),
            Err(error) => {
                tracing::warn!(%error, movie_id = self.movie_id, "movie detail failed");
                Phase::Failed(error)
            }
        };
        true
    }

    /// Closes the modal, aborting the detail request if still running.
    pub fn close(mut self) {
        if let Some(handle) = self.request.take() {
            tracing::debug!(movie_id = self.movie_id, "aborting detail request");
            handle.abort();
        }
    }
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Close => Event::Closed,
    }
}

/// Display values of the info row, with "N/A" for unknown values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub runtime: String,
    pub score: String,
    pub original_language: String,
}

impl InfoRow {
    #[must_use]
    pub fn from_phase(phase: &Phase, i18n: &I18n) -> Self {
        let unavailable = || i18n.tr("score-unavailable");
        match phase {
            Phase::Loaded(detail) => Self {
                runtime: detail.known_runtime().map_or_else(unavailable, |minutes| {
                    i18n.tr_with_args("modal-runtime", &[("minutes", minutes.to_string().as_str())])
                }),
                score: score_percent(detail.vote_average).map_or_else(unavailable, |percent| {
                    i18n.tr_with_args("score-percent", &[("percent", percent.to_string().as_str())])
                }),
                original_language: if detail.original_language.is_empty() {
                    unavailable()
                } else {
                    detail.original_language.clone()
                },
            },
            Phase::Loading | Phase::Failed(_) => Self {
                runtime: String::new(),
                score: String::new(),
                original_language: String::new(),
            },
        }
    }
}

/// Contextual data needed to render the modal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Renders the modal over `base`.
pub fn view<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    ctx: ViewContext<'a>,
    map: fn(Message) -> M,
) -> Element<'a, M> {
    let dialog = Element::from(dialog(ctx)).map(map);

    let backdrop = mouse_area(
        center(opaque(dialog))
            .padding(spacing::XL)
            .style(container_styles::backdrop),
    )
    .on_press(map(Message::Close));

    stack![base, opaque(backdrop)].into()
}

fn dialog(ctx: ViewContext<'_>) -> Container<'_, Message> {
    let ViewContext { i18n, state } = ctx;

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr_with_args(
                "modal-heading",
                &[("language", state.language.label.as_str())],
            ))
            .size(typography::CAPTION)
            .width(Length::Fill),
        )
        .push(
            button(Text::new("×").size(typography::TITLE_MD))
                .on_press(Message::Close)
                .padding([0.0, spacing::XS])
                .style(button_styles::glyph),
        );

    let info = InfoRow::from_phase(&state.phase, i18n);
    let info_row = Row::new()
        .spacing(spacing::LG)
        .push(labelled(i18n.tr("modal-runtime-label"), info.runtime))
        .push(labelled(i18n.tr("modal-score-label"), info.score))
        .push(labelled(
            i18n.tr("modal-original-language-label"),
            info.original_language,
        ));

    let mut details = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(
            Text::new(state.translated_title().unwrap_or_default()).size(typography::TITLE_MD),
        )
        .push(info_row);

    details = match &state.phase {
        Phase::Loading => details.push(Text::new(i18n.tr("modal-loading")).size(typography::BODY)),
        Phase::Failed(error) => details.push(
            Container::new(
                Text::new(i18n.tr_with_args(
                    error.i18n_key(),
                    &[("detail", error.detail().as_str())],
                ))
                .size(typography::BODY),
            )
            .padding([spacing::XS, spacing::MD])
            .style(container_styles::feedback(palette::ERROR_500)),
        ),
        Phase::Loaded(detail) => {
            let mut loaded = details;
            if !detail.original_title.is_empty() && detail.original_title != detail.title {
                loaded = loaded.push(
                    Text::new(i18n.tr_with_args(
                        "modal-original-title",
                        &[("title", detail.original_title.as_str())],
                    ))
                    .size(typography::BODY_SM),
                );
            }
            if let Some(genres) = detail.genre_names() {
                loaded = loaded.push(Text::new(genres).size(typography::BODY_SM));
            }
            let overview = if detail.overview.trim().is_empty() {
                i18n.tr("card-no-overview")
            } else {
                detail.overview.clone()
            };
            loaded.push(Text::new(overview).size(typography::BODY))
        }
    };

    let body = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Top)
        .push(poster::view(
            state.poster.as_ref(),
            sizing::POSTER_WIDTH,
            sizing::POSTER_HEIGHT,
        ))
        .push(details);

    Container::new(scrollable(
        Column::new().spacing(spacing::MD).push(header).push(body),
    ))
    .padding(spacing::LG)
    .max_width(sizing::MODAL_MAX_WIDTH)
    .style(container_styles::dialog)
}

fn labelled<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(Text::new(value).size(typography::BODY))
        .into()
}
