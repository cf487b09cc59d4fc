// SPDX-License-Identifier: MPL-2.0
//! Search panel: query box, language pickers and the result list.
//!
//! The panel owns everything the user types or picks, validates it on
//! submit and asks the application (through [`Event::Search`]) to run the
//! request. Results come back through [`State::apply_results`], which drops
//! anything that does not carry the latest generation.

use crate::domain::card::{cards_from_page, MovieCard};
use crate::domain::language::{Language, LanguagePair, LanguageTable};
use crate::domain::movie::SearchPage;
use crate::domain::search::{Generation, SearchQuery, ValidationError};
use crate::i18n::fluent::I18n;
use crate::infrastructure::ApiError;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::movie_card;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{
    button, image, pick_list, scrollable, text, text_input, Column, Container, Row, Text,
};
use iced::{alignment, Element, Length};
use std::collections::HashMap;

/// Why the last submit did not produce results.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Validation(ValidationError),
    Network(ApiError),
}

impl Feedback {
    /// Localized message shown above the result list.
    #[must_use]
    pub fn message(&self, i18n: &I18n) -> String {
        match self {
            Feedback::Validation(error) => i18n.tr(error.i18n_key()),
            Feedback::Network(error) => {
                i18n.tr_with_args(error.i18n_key(), &[("detail", error.detail().as_str())])
            }
        }
    }
}

/// Where the panel is in its search cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(Feedback),
}

/// Search panel state.
#[derive(Debug, Clone)]
pub struct State {
    query: String,
    table: LanguageTable,
    languages: LanguagePair,
    overview_limit: usize,
    generation: Generation,
    /// Pair of the request tagged with `generation`.
    pending_languages: Option<LanguagePair>,
    status: Status,
    cards: Vec<MovieCard>,
    /// Generation and pair the displayed cards were searched with.
    results_generation: Generation,
    results_languages: Option<LanguagePair>,
    total_results: u32,
    posters: HashMap<u64, image::Handle>,
}

/// Messages emitted by the search panel widgets.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SourceSelected(Language),
    DestinationSelected(Language),
    SwapLanguages,
    Submit,
    OpenTranslation(u64),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Input passed validation; the request must be issued with this tag.
    Search {
        query: SearchQuery,
        generation: Generation,
    },
    /// The user asked for a movie's translation.
    OpenTranslation {
        movie_id: u64,
        title: String,
        language: Language,
    },
}

/// What happened to a response handed to [`State::apply_results`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response was older than the latest request and was dropped.
    Stale,
    Loaded,
    Failed,
}

impl State {
    #[must_use]
    pub fn new(table: LanguageTable, languages: LanguagePair, overview_limit: usize) -> Self {
        Self {
            query: String::new(),
            table,
            languages,
            overview_limit,
            generation: Generation::default(),
            pending_languages: None,
            status: Status::Idle,
            cards: Vec::new(),
            results_generation: Generation::default(),
            results_languages: None,
            total_results: 0,
            posters: HashMap::new(),
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[must_use]
    pub fn languages(&self) -> &LanguagePair {
        &self.languages
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn cards(&self) -> &[MovieCard] {
        &self.cards
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn poster(&self, movie_id: u64) -> Option<&image::Handle> {
        self.posters.get(&movie_id)
    }

    /// Validates the current input.
    ///
    /// Every submit starts a new generation, so a response still in flight
    /// cannot overwrite what this submit shows. On success the caller must
    /// issue the request; on failure the validation message replaces the
    /// status and nothing is sent.
    pub fn submit(&mut self) -> Event {
        let generation = self.generation.bump();
        match SearchQuery::new(&self.query, &self.languages) {
            Ok(query) => {
                self.pending_languages = Some(query.languages().clone());
                self.status = Status::Loading;
                Event::Search { query, generation }
            }
            Err(error) => {
                tracing::debug!(%error, %generation, "search rejected");
                self.pending_languages = None;
                self.status = Status::Failed(Feedback::Validation(error));
                Event::None
            }
        }
    }

    /// Applies a search response tagged with `generation`.
    ///
    /// A success replaces the result list; a failure keeps the previous
    /// cards and shows the error above them.
    pub fn apply_results(
        &mut self,
        generation: Generation,
        result: Result<SearchPage, ApiError>,
    ) -> Applied {
        if !self.generation.is_current(generation) {
            tracing::debug!(%generation, current = %self.generation, "stale search response dropped");
            return Applied::Stale;
        }

        match result {
            Ok(page) => {
                self.cards = cards_from_page(&page, self.overview_limit);
                self.results_generation = generation;
                self.results_languages = self.pending_languages.clone();
                self.total_results = page.total_results;
                self.posters.clear();
                self.status = Status::Loaded;
                Applied::Loaded
            }
            Err(error) => {
                tracing::warn!(%error, %generation, "search failed");
                self.status = Status::Failed(Feedback::Network(error));
                Applied::Failed
            }
        }
    }

    /// Image paths to download for the current cards, keyed by movie id.
    #[must_use]
    pub fn poster_requests(&self) -> Vec<(u64, String)> {
        self.cards
            .iter()
            .filter_map(|card| {
                card.poster
                    .remote_path()
                    .map(|path| (card.id, path.to_string()))
            })
            .collect()
    }

    /// Stores a downloaded poster if it belongs to the displayed results.
    pub fn poster_loaded(&mut self, generation: Generation, movie_id: u64, handle: image::Handle) {
        if self.results_generation.is_current(generation)
            && self.cards.iter().any(|c| c.id == movie_id)
        {
            self.posters.insert(movie_id, handle);
        }
    }
}

/// Process a search panel message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::QueryChanged(query) => {
            state.query = query;
            Event::None
        }
        Message::SourceSelected(language) => {
            state.languages.source = language;
            Event::None
        }
        Message::DestinationSelected(language) => {
            state.languages.destination = language;
            Event::None
        }
        Message::SwapLanguages => {
            state.languages.swap();
            Event::None
        }
        Message::Submit => state.submit(),
        // Cards are translated into the language they were searched for,
        // not whatever the picker shows now.
        Message::OpenTranslation(movie_id) => {
            let Some(languages) = &state.results_languages else {
                return Event::None;
            };
            state
                .cards
                .iter()
                .find(|card| card.id == movie_id)
                .map_or(Event::None, |card| Event::OpenTranslation {
                    movie_id,
                    title: card.title.clone(),
                    language: languages.destination.clone(),
                })
        }
    }
}

/// Contextual data needed to render the search panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the search panel.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext { i18n, state } = ctx;

    let heading = Text::new(i18n.tr("app-heading")).size(typography::TITLE_LG);

    let search_box = text_input(&i18n.tr("search-placeholder"), &state.query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    let languages = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Bottom)
        .push(language_picker(
            i18n.tr("search-source-label"),
            state.table.entries(),
            &state.languages.source,
            Message::SourceSelected,
        ))
        .push(
            button(Text::new("⇄").size(typography::TITLE_MD))
                .on_press(Message::SwapLanguages)
                .padding([spacing::XXS, spacing::XS])
                .style(button_styles::glyph),
        )
        .push(language_picker(
            i18n.tr("search-destination-label"),
            state.table.entries(),
            &state.languages.destination,
            Message::DestinationSelected,
        ));

    let search_label = if state.status == Status::Loading {
        i18n.tr("search-button-loading")
    } else {
        i18n.tr("search-button")
    };
    let search_button = button(Text::new(search_label).size(typography::BODY_LG))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::XL])
        .style(button_styles::primary);

    let form = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(search_box)
        .push(languages)
        .push(search_button);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(form)
        .push(status_line(i18n, state))
        .push(result_list(i18n, state));

    scrollable(content).height(Length::Fill).into()
}

fn language_picker<'a>(
    label: String,
    options: &'a [Language],
    selected: &Language,
    on_selected: fn(Language) -> Message,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fixed(sizing::LANGUAGE_PICKER_WIDTH))
        .push(Text::new(label).size(typography::CAPTION))
        .push(
            pick_list(options, Some(selected.clone()), on_selected)
                .padding(spacing::XS)
                .width(Length::Fill),
        )
        .into()
}

/// Warning, error, loading or result-count line above the list.
fn status_line<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    match &state.status {
        Status::Idle => Container::new(text("")).into(),
        Status::Loading => Text::new(i18n.tr("search-loading"))
            .size(typography::BODY)
            .into(),
        Status::Loaded => Text::new(i18n.tr_with_args(
            "search-results-count",
            &[("count", state.total_results.to_string().as_str())],
        ))
        .size(typography::BODY_SM)
        .into(),
        Status::Failed(feedback) => {
            let accent = match feedback {
                Feedback::Validation(_) => palette::WARNING_500,
                Feedback::Network(_) => palette::ERROR_500,
            };
            Container::new(Text::new(feedback.message(i18n)).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(container_styles::feedback(accent))
                .into()
        }
    }
}

fn result_list<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let cards = state.cards.iter().map(|card| {
        movie_card::view(movie_card::ViewContext {
            i18n,
            card,
            poster: state.poster(card.id),
        })
    });

    Column::with_children(cards)
        .spacing(spacing::SM)
        .max_width(sizing::CARD_MAX_WIDTH)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::{ENGLISH_US, PORTUGUESE_BR};
    use crate::domain::movie::MovieSummary;

    fn panel() -> State {
        let table = LanguageTable::default();
        let pair = table.default_pair(None, None);
        State::new(table, pair, 170)
    }

    fn godfather_page() -> SearchPage {
        SearchPage {
            page: 1,
            results: vec![
                MovieSummary {
                    id: 238,
                    title: "The Godfather".into(),
                    poster_path: Some("/3bhkrj58Vtu7enYsRolD1fZdja1.jpg".into()),
                    overview: "Spanning the years 1945 to 1955.".into(),
                    ..MovieSummary::default()
                },
                MovieSummary {
                    id: 240,
                    title: "The Godfather Part II".into(),
                    ..MovieSummary::default()
                },
            ],
            total_pages: 1,
            total_results: 2,
        }
    }

    fn searching(state: &mut State, query: &str) -> Generation {
        update(state, Message::QueryChanged(query.into()));
        match update(state, Message::Submit) {
            Event::Search { generation, .. } => generation,
            other => panic!("expected a search, got {other:?}"),
        }
    }

    #[test]
    fn empty_query_is_rejected_without_request() {
        let mut state = panel();
        for query in ["", "   ", "\t\n"] {
            update(&mut state, Message::QueryChanged(query.into()));
            assert_eq!(update(&mut state, Message::Submit), Event::None);
            assert_eq!(
                state.status(),
                &Status::Failed(Feedback::Validation(ValidationError::EmptyQuery))
            );
        }
    }

    #[test]
    fn rejected_submit_discards_pending_response() {
        let mut state = panel();
        let first = searching(&mut state, "the godfather");

        update(&mut state, Message::QueryChanged(String::new()));
        assert_eq!(update(&mut state, Message::Submit), Event::None);
        assert_ne!(state.generation(), first);

        assert_eq!(state.apply_results(first, Ok(godfather_page())), Applied::Stale);
        assert_eq!(
            state.status(),
            &Status::Failed(Feedback::Validation(ValidationError::EmptyQuery))
        );
        assert!(state.cards().is_empty());
    }

    #[test]
    fn same_languages_are_rejected_without_request() {
        let mut state = panel();
        let english = state.languages().source.clone();
        update(&mut state, Message::QueryChanged("the godfather".into()));
        update(&mut state, Message::DestinationSelected(english));

        assert_eq!(update(&mut state, Message::Submit), Event::None);
        assert_eq!(
            state.status(),
            &Status::Failed(Feedback::Validation(ValidationError::SameLanguages))
        );
    }

    #[test]
    fn valid_submit_starts_a_new_generation() {
        let mut state = panel();
        update(&mut state, Message::QueryChanged("  the godfather ".into()));

        match update(&mut state, Message::Submit) {
            Event::Search { query, generation } => {
                assert_eq!(query.text(), "the godfather");
                assert_eq!(query.source_code(), ENGLISH_US);
                assert_eq!(query.destination_code(), PORTUGUESE_BR);
                assert_eq!(generation, state.generation());
            }
            other => panic!("expected a search, got {other:?}"),
        }
        assert_eq!(state.status(), &Status::Loading);
    }

    #[test]
    fn swapping_twice_restores_the_pair() {
        let mut state = panel();
        let original = state.languages().clone();

        update(&mut state, Message::SwapLanguages);
        assert_eq!(state.languages().source.code, PORTUGUESE_BR);
        assert_eq!(state.languages().destination.label, "English");

        update(&mut state, Message::SwapLanguages);
        assert_eq!(state.languages(), &original);
    }

    #[test]
    fn results_become_cards_in_order() {
        let mut state = panel();
        let generation = searching(&mut state, "the godfather");

        assert_eq!(state.apply_results(generation, Ok(godfather_page())), Applied::Loaded);
        let titles: Vec<_> = state.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["The Godfather", "The Godfather Part II"]);
        assert_eq!(state.status(), &Status::Loaded);
        assert_eq!(
            state.poster_requests(),
            vec![(238, "/3bhkrj58Vtu7enYsRolD1fZdja1.jpg".to_string())]
        );
    }

    #[test]
    fn stale_response_does_not_replace_newer_state() {
        let mut state = panel();
        let first = searching(&mut state, "the godfather");
        let second = searching(&mut state, "casablanca");

        assert_eq!(state.apply_results(first, Ok(godfather_page())), Applied::Stale);
        assert!(state.cards().is_empty());
        assert_eq!(state.status(), &Status::Loading);

        let empty = SearchPage::default();
        assert_eq!(state.apply_results(second, Ok(empty)), Applied::Loaded);
    }

    #[test]
    fn network_error_is_an_explicit_status() {
        let mut state = panel();
        let generation = searching(&mut state, "the godfather");
        state.apply_results(generation, Ok(godfather_page()));

        let next = searching(&mut state, "the godfather");
        let error = ApiError::Network("connection refused".into());
        assert_eq!(state.apply_results(next, Err(error.clone())), Applied::Failed);

        assert_eq!(state.status(), &Status::Failed(Feedback::Network(error)));
        assert_eq!(state.cards().len(), 2, "previous results stay visible");
    }

    #[test]
    fn open_translation_uses_destination_language() {
        let mut state = panel();
        let generation = searching(&mut state, "the godfather");
        state.apply_results(generation, Ok(godfather_page()));

        match update(&mut state, Message::OpenTranslation(238)) {
            Event::OpenTranslation {
                movie_id,
                title,
                language,
            } => {
                assert_eq!(movie_id, 238);
                assert_eq!(title, "The Godfather");
                assert_eq!(language.code, PORTUGUESE_BR);
            }
            other => panic!("expected OpenTranslation, got {other:?}"),
        }
        assert_eq!(update(&mut state, Message::OpenTranslation(1)), Event::None);
    }

    #[test]
    fn open_translation_keeps_language_of_displayed_results() {
        let mut state = panel();
        let generation = searching(&mut state, "the godfather");
        state.apply_results(generation, Ok(godfather_page()));

        let english = state.languages().source.clone();
        update(&mut state, Message::DestinationSelected(english));

        match update(&mut state, Message::OpenTranslation(238)) {
            Event::OpenTranslation { language, .. } => {
                assert_eq!(language.code, PORTUGUESE_BR);
            }
            other => panic!("expected OpenTranslation, got {other:?}"),
        }
    }

    #[test]
    fn posters_survive_a_rejected_submit() {
        let mut state = panel();
        let generation = searching(&mut state, "the godfather");
        state.apply_results(generation, Ok(godfather_page()));

        update(&mut state, Message::QueryChanged(String::new()));
        update(&mut state, Message::Submit);

        state.poster_loaded(generation, 238, image::Handle::from_bytes(vec![0u8; 4]));
        assert!(state.poster(238).is_some());
    }

    #[test]
    fn posters_from_older_searches_are_ignored() {
        let mut state = panel();
        let first = searching(&mut state, "the godfather");
        state.apply_results(first, Ok(godfather_page()));
        let second = searching(&mut state, "the godfather");
        state.apply_results(second, Ok(godfather_page()));

        state.poster_loaded(first, 238, image::Handle::from_bytes(vec![0u8; 4]));
        assert!(state.poster(238).is_none());

        state.poster_loaded(second, 238, image::Handle::from_bytes(vec![0u8; 4]));
        assert!(state.poster(238).is_some());
    }

    #[test]
    fn feedback_messages_are_localized() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        assert_eq!(
            Feedback::Validation(ValidationError::EmptyQuery).message(&i18n),
            "Search field cannot be empty"
        );
        let network = Feedback::Network(ApiError::Network("timed out".into())).message(&i18n);
        assert!(network.contains("timed out"), "{network}");
    }
}
