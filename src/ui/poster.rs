// SPDX-License-Identifier: MPL-2.0
//! Poster thumbnails with the bundled placeholder.

use iced::widget::{image, svg, Container};
use iced::{ContentFit, Element, Length};

/// Shown while a poster loads, when it failed, or when the movie has none.
const PLACEHOLDER_SVG: &[u8] = include_bytes!("../../assets/no-image-available.svg");

/// Decoded poster bytes ready for the image widget.
#[must_use]
pub fn handle_from_bytes(bytes: Vec<u8>) -> image::Handle {
    image::Handle::from_bytes(bytes)
}

/// Renders `poster` at the given size, or the placeholder when `None`.
pub fn view<'a, Message: 'a>(
    poster: Option<&image::Handle>,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match poster {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => svg(svg::Handle::from_memory(PLACEHOLDER_SVG))
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Contain)
            .into(),
    };

    Container::new(content)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_an_svg_document() {
        let source = std::str::from_utf8(PLACEHOLDER_SVG).expect("placeholder is utf-8");
        assert!(source.trim_start().starts_with("<svg"));
        assert!(source.trim_end().ends_with("</svg>"));
    }
}
