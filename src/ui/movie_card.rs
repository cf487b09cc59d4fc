// SPDX-License-Identifier: MPL-2.0
//! One search result: poster, title, short overview and the translation button.

use crate::domain::card::{MovieCard, Overview};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::poster;
use crate::ui::search_panel::Message;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render a card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub card: &'a MovieCard,
    pub poster: Option<&'a image::Handle>,
}

/// Text shown in place of the overview.
#[must_use]
pub fn overview_text(overview: &Overview, i18n: &I18n) -> String {
    match overview {
        Overview::Text(text) => text.clone(),
        Overview::Missing => i18n.tr(Overview::MISSING_KEY),
    }
}

/// Secondary line: release year, original language and score, when known.
#[must_use]
pub fn metadata_line(card: &MovieCard, i18n: &I18n) -> String {
    let score = match card.score {
        Some(percent) => i18n.tr_with_args("score-percent", &[("percent", percent.to_string().as_str())]),
        None => i18n.tr("score-unavailable"),
    };

    card.release_year
        .map(|year| year.to_string())
        .into_iter()
        .chain((!card.original_language.is_empty()).then(|| card.original_language.clone()))
        .chain(std::iter::once(score))
        .collect::<Vec<_>>()
        .join(" · ")
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext { i18n, card, poster } = ctx;

    let title = Text::new(card.title.as_str()).size(typography::TITLE_SM);
    let mut details = Column::new().spacing(spacing::XXS).push(title);

    if !card.original_title.is_empty() && card.original_title != card.title {
        details = details.push(
            Text::new(card.original_title.as_str())
                .size(typography::BODY_SM)
                .style(secondary_text),
        );
    }

    let details = details
        .push(
            Text::new(metadata_line(card, i18n))
                .size(typography::CAPTION)
                .style(secondary_text),
        )
        .push(Text::new(overview_text(&card.overview, i18n)).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("card-see-translation")).size(typography::BODY))
                .on_press(Message::OpenTranslation(card.id))
                .padding([spacing::XXS, 0.0])
                .style(button_styles::link),
        )
        .width(Length::Fill);

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Top)
        .push(poster::view(
            poster,
            sizing::CARD_POSTER_WIDTH,
            sizing::CARD_POSTER_HEIGHT,
        ))
        .push(details);

    Container::new(content)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(container_styles::card)
        .into()
}

fn secondary_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::card::PosterSource;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".into()), &Config::default())
    }

    fn card() -> MovieCard {
        MovieCard {
            id: 238,
            title: "The Godfather".into(),
            original_title: "The Godfather".into(),
            poster: PosterSource::Placeholder,
            overview: Overview::Missing,
            release_year: Some(1972),
            original_language: "en".into(),
            score: Some(87),
        }
    }

    #[test]
    fn missing_overview_uses_placeholder_text() {
        assert_eq!(overview_text(&Overview::Missing, &i18n()), "No overview available");
        assert_eq!(
            overview_text(&Overview::Text("A story.".into()), &i18n()),
            "A story."
        );
    }

    #[test]
    fn metadata_line_lists_known_fields() {
        assert_eq!(metadata_line(&card(), &i18n()), "1972 · en · 87% TMDb");
    }

    #[test]
    fn metadata_line_without_votes_or_date() {
        let card = MovieCard {
            release_year: None,
            original_language: String::new(),
            score: None,
            ..card()
        };
        assert_eq!(metadata_line(&card, &i18n()), "N/A");
    }
}
