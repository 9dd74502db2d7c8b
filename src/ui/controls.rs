// SPDX-License-Identifier: MPL-2.0
//! Navigation controls: the previous/next button row.
//!
//! Visibility comes from the enablement flags; placement comes from the
//! arrangement. The two are distinct on the last artwork, where the lone
//! "previous" button stays in the leading slot instead of being pushed to
//! the trailing edge the way "next" is on the first artwork.

use crate::gallery::{ControlArrangement, Presentation};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Button, Row, Space, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the control row. The two controls are independently
/// identified actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
}

fn navigation_button<'a>(label: String, message: Message) -> Button<'a, Message> {
    button(
        Text::new(label)
            .size(typography::LABEL)
            .width(Length::Fill)
            .center(),
    )
    .on_press(message)
    .style(styles::button::navigation)
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fixed(sizing::BUTTON_MIN_WIDTH))
}

/// Renders the button row for the given presentation snapshot.
pub fn view<'a>(ctx: ViewContext<'a>, presentation: Presentation) -> Element<'a, Message> {
    let previous = || {
        navigation_button(
            ctx.i18n.tr("gallery-previous-button"),
            Message::Previous,
        )
    };
    let next = || navigation_button(ctx.i18n.tr("gallery-next-button"), Message::Next);

    let mut row = Row::new().width(Length::Fill).align_y(Vertical::Center);

    match presentation.arrangement {
        ControlArrangement::NextOnly => {
            row = row.push(Space::new().width(Length::Fill).height(Length::Shrink));
            if presentation.can_go_next {
                row = row.push(next());
            }
        }
        ControlArrangement::Spread => {
            if presentation.can_go_previous {
                row = row.push(previous());
            }
            row = row.push(Space::new().width(Length::Fill).height(Length::Shrink));
            if presentation.can_go_next {
                row = row.push(next());
            }
        }
        ControlArrangement::PreviousOnly => {
            if presentation.can_go_previous {
                row = row.push(previous());
            }
        }
    }

    row.into()
}
