// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery navigator, localization, and
//! theming, and hands the Iced runtime its update/view/subscription hooks.
//! All navigation policy lives in `gallery::navigator`; this module only
//! routes messages and re-reads the derived presentation on every render.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::gallery::{Gallery, GalleryNavigator};
use crate::i18n::fluent::I18n;
use crate::ui::assets::ArtworkHandles;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging the navigation core, localization,
/// and theming.
pub struct App {
    pub i18n: I18n,
    navigator: GalleryNavigator,
    artwork_handles: ArtworkHandles,
    theme: AppTheme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.navigator.current_index())
            .field("theme_mode", &self.theme.mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 520;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let gallery = Gallery::builtin();
        let artwork_handles = ArtworkHandles::load(&gallery);

        let app = App {
            i18n,
            navigator: GalleryNavigator::new(gallery),
            artwork_handles,
            theme: AppTheme::new(config.theme_mode),
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme.mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::keyboard_navigation()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(&mut self.navigator, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            navigator: &self.navigator,
            handles: &self.artwork_handles,
            scheme: &self.theme.colors,
        })
    }
}
