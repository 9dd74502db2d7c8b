// SPDX-License-Identifier: MPL-2.0
//! Embedded artwork images and their Iced handles.
//!
//! This is the only module that interprets an [`ImageRef`]: the navigation
//! core treats the reference as opaque, and everything about turning it into
//! pixels (asset lookup, decoding, GPU upload) stays on this side of the
//! boundary. Handles are built once at startup and reused across redraws.

use crate::gallery::{Gallery, ImageRef};
use iced::widget::image::Handle;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/artworks/"]
struct ArtworkAssets;

/// Resolves a single image reference against the embedded catalog.
///
/// Returns `None` when no asset with that name was embedded; the caller is
/// expected to render a textual fallback.
#[must_use]
pub fn artwork_handle(image: ImageRef) -> Option<Handle> {
    ArtworkAssets::get(image.asset_name()).map(|file| Handle::from_bytes(file.data.into_owned()))
}

/// Image handles for every artwork in a gallery, indexed by position.
#[derive(Debug, Clone)]
pub struct ArtworkHandles {
    handles: Vec<Option<Handle>>,
}

impl ArtworkHandles {
    /// Builds handles for the whole collection up front.
    #[must_use]
    pub fn load(gallery: &Gallery) -> Self {
        let handles = (0..gallery.len())
            .map(|i| {
                gallery
                    .get(i)
                    .ok()
                    .and_then(|artwork| artwork_handle(artwork.image()))
            })
            .collect();
        Self { handles }
    }

    /// Handle for the artwork at `index`, if its asset was embedded.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Handle> {
        self.handles.get(index).and_then(Option::as_ref)
    }
}
