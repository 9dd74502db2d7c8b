// SPDX-License-Identifier: MPL-2.0
//! Artwork placard: the caption strip under the active artwork.
//!
//! Layout follows gallery convention: title on its own line, then the author
//! in bold with the year in italics beside it.

use crate::gallery::Artwork;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::font::{Style, Weight};
use iced::{
    widget::{Column, Container, Row, Text},
    Element, Font, Length,
};

/// Renders the caption strip for one artwork.
pub fn view<'a, Message: 'a>(
    artwork: &'a Artwork,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };
    let italic = Font {
        style: Style::Italic,
        ..Font::DEFAULT
    };

    let title = Text::new(artwork.title())
        .size(typography::TITLE)
        .color(scheme.placard_text);

    let author = Text::new(artwork.author())
        .size(typography::BODY)
        .font(bold)
        .color(scheme.placard_text);

    let year = Text::new(format!("({})", artwork.year()))
        .size(typography::BODY)
        .font(italic)
        .color(scheme.placard_text);

    let byline = Row::new()
        .spacing(spacing::XXS)
        .push(author)
        .push(year);

    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(title)
        .push(byline);

    Container::new(caption)
        .style(styles::container::placard(scheme))
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Gallery;
    use crate::ui::theming::ColorScheme;

    #[test]
    fn placard_view_renders_for_builtin_artworks() {
        let gallery = Gallery::builtin();
        let scheme = ColorScheme::light();
        for i in 0..gallery.len() {
            let artwork = gallery.get(i).expect("index in range");
            let _element: Element<'_, ()> = view(artwork, &scheme);
        }
    }
}
