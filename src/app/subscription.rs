// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Arrow keys mirror the on-screen navigation buttons. Key presses are
//! forwarded unconditionally; the update loop and the navigator's boundary
//! no-ops keep out-of-range steps harmless.

use super::Message;
use crate::ui::controls;
use iced::{event, keyboard, Subscription};

/// Routes Left/Right arrow key presses to navigation messages.
pub fn keyboard_navigation() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if matches!(status, event::Status::Captured) {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => Some(Message::Controls(controls::Message::Previous)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => Some(Message::Controls(controls::Message::Next)),
            _ => None,
        }
    })
}
