// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled light-blue button for the main action (Search).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active | button::Status::Pressed => palette::PRIMARY_400,
        button::Status::Hovered => palette::PRIMARY_500,
        button::Status::Disabled => palette::GRAY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::NAVY_900,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Borderless text button in the brand color ("See Translation").
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let brand = theme.palette().primary;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM / 4.0,
            ..brand
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: brand,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Round, transparent button for single-glyph actions (swap, close).
pub fn glyph(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM / 2.0,
            ..palette::GRAY_500
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_500
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: text,
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_uses_dark_text_on_light_blue() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.text_color, palette::NAVY_900);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_400))
        );
    }

    #[test]
    fn hover_changes_primary_background() {
        let active = primary(&Theme::Dark, button::Status::Active);
        let hovered = primary(&Theme::Dark, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn glyph_is_transparent_at_rest() {
        assert!(glyph(&Theme::Dark, button::Status::Active).background.is_none());
        assert!(link(&Theme::Dark, button::Status::Active).background.is_none());
    }
}
