// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation: current position plus the view state derived from it.
//!
//! [`GalleryNavigator`] is the single source of truth for which artwork is
//! active. It owns the collection and a position index, and everything the
//! screen needs to render — active artwork, control enablement, control
//! arrangement — is recomputed from that index on every read via
//! [`GalleryNavigator::presentation`]. Nothing derived is ever stored, so the
//! snapshot can never go stale relative to the position.

use super::{Artwork, Gallery};

/// How the navigation controls are laid out for the current position.
///
/// The three cases are checked in order; the first match wins, so a
/// single-artwork gallery resolves to `NextOnly` (with both controls hidden
/// by their enablement flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlArrangement {
    /// First artwork: only the "next" control, pushed to the trailing edge.
    NextOnly,
    /// Interior artwork: both controls, spread to opposite edges.
    Spread,
    /// Last artwork: only the "previous" control, kept in the leading slot.
    ///
    /// Distinct from `Spread` with a hidden "next" only in alignment; the
    /// control sits at the leading edge rather than being pushed trailing.
    PreviousOnly,
}

impl ControlArrangement {
    /// Resolves the arrangement for `index` in a gallery of `len` artworks.
    #[must_use]
    pub fn for_position(index: usize, len: usize) -> Self {
        if index == 0 {
            Self::NextOnly
        } else if index < len - 1 {
            Self::Spread
        } else {
            Self::PreviousOnly
        }
    }
}

/// Snapshot of the derived view state for one position.
///
/// Contains everything the screen needs to render navigation without direct
/// access to the collection. Always produced fresh by
/// [`GalleryNavigator::presentation`]; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    /// Whether stepping backward is possible (`current_index > 0`).
    pub can_go_previous: bool,
    /// Whether stepping forward is possible (`current_index < len - 1`).
    pub can_go_next: bool,
    /// Layout of the navigation controls for this position.
    pub arrangement: ControlArrangement,
    /// Current position in the collection (0-indexed).
    pub current_index: usize,
    /// Total number of artworks in the collection.
    pub total_count: usize,
}

/// Steps through the gallery one artwork at a time.
///
/// The position starts at 0 and always stays inside `[0, len - 1]`: stepping
/// past either end is a silent no-op rather than a wrap-around or an error.
/// Callers are expected to gate on [`Presentation::can_go_previous`] /
/// [`Presentation::can_go_next`], but the navigator stays safe if they don't.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryNavigator {
    gallery: Gallery,
    current_index: usize,
}

impl GalleryNavigator {
    /// Creates a navigator positioned on the first artwork.
    #[must_use]
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            current_index: 0,
        }
    }

    /// Returns the collection being navigated.
    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Current position in the collection (0-indexed).
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The artwork at the current position.
    #[must_use]
    pub fn active_artwork(&self) -> &Artwork {
        self.gallery
            .get(self.current_index)
            .expect("navigator position stays inside the gallery")
    }

    /// Steps backward one artwork. No-op on the first artwork.
    pub fn previous(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Steps forward one artwork. No-op on the last artwork.
    pub fn next(&mut self) {
        if self.current_index < self.gallery.last_index() {
            self.current_index += 1;
        }
    }

    /// Whether stepping backward is possible.
    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Whether stepping forward is possible.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.current_index < self.gallery.last_index()
    }

    /// Returns a fresh snapshot of the derived view state.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        Presentation {
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
            arrangement: ControlArrangement::for_position(self.current_index, self.gallery.len()),
            current_index: self.current_index,
            total_count: self.gallery.len(),
        }
    }
}
