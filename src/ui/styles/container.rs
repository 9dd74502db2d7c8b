// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Elevated surface behind the active artwork.
///
/// The frame carries the gallery's only drop shadow, so the artwork reads as
/// a mounted print rather than a flat image.
pub fn artwork_frame(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.frame_background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        shadow: shadow::FRAME,
        ..Default::default()
    }
}

/// Tinted strip behind the artwork caption.
pub fn placard(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.placard_background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
