// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a single-screen gallery viewer built with the Iced GUI
//! framework.
//!
//! It presents one artwork at a time from a fixed collection and lets the
//! user step forward and backward through it. The navigation core
//! ([`gallery`]) is plain synchronous Rust; the Iced layer ([`app`], [`ui`])
//! only renders its derived state and forwards user intents back in.

#![doc(html_root_url = "https://docs.rs/art_space/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
