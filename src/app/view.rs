// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The screen is a single column: the framed artwork on an elevated surface,
//! the placard beneath it, and the navigation controls at the bottom. Every
//! call starts from a fresh presentation snapshot, so the rendered controls
//! can never lag behind the navigation state.

use super::Message;
use crate::gallery::GalleryNavigator;
use crate::i18n::fluent::I18n;
use crate::ui::assets::ArtworkHandles;
use crate::ui::controls;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::placard;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    widget::{image::Image, Column, Container, Text},
    ContentFit, Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigator: &'a GalleryNavigator,
    pub handles: &'a ArtworkHandles,
    pub scheme: &'a ColorScheme,
}

/// Renders the gallery screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let presentation = ctx.navigator.presentation();
    let artwork = ctx.navigator.active_artwork();

    let image: Element<'_, Message> = match ctx.handles.get(presentation.current_index) {
        Some(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Text::new(ctx.i18n.tr("artwork-image-missing")).into(),
    };

    let frame = Container::new(image)
        .style(styles::container::artwork_frame(ctx.scheme))
        .padding(spacing::LG)
        .max_width(sizing::FRAME_MAX_WIDTH)
        .width(Length::Fill)
        .height(Length::Fill);

    let stage = Container::new(frame)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    let caption = placard::view(artwork, ctx.scheme);

    let control_row = controls::view(
        controls::ViewContext { i18n: ctx.i18n },
        presentation,
    )
    .map(Message::Controls);

    Column::new()
        .push(stage)
        .push(caption)
        .push(control_row)
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
