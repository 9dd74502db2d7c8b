// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Navigation intents are gated on the derived enablement flags before being
//! forwarded into the navigator; the navigator additionally treats
//! out-of-range steps as no-ops.

use super::Message;
use crate::gallery::GalleryNavigator;
use crate::ui::controls;
use iced::Task;

/// Applies one message to the navigation state.
pub fn update(navigator: &mut GalleryNavigator, message: Message) -> Task<Message> {
    match message {
        Message::Controls(controls::Message::Previous) => {
            if navigator.presentation().can_go_previous {
                navigator.previous();
            }
            Task::none()
        }
        Message::Controls(controls::Message::Next) => {
            if navigator.presentation().can_go_next {
                navigator.next();
            }
            Task::none()
        }
    }
}
