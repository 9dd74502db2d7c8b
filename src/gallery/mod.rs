// SPDX-License-Identifier: MPL-2.0
//! Gallery collection: the fixed, ordered set of artworks on display.
//!
//! The collection is immutable once constructed and never empty. Lookup by
//! position is the only behavior it carries; everything stateful lives in
//! [`navigator::GalleryNavigator`].

pub mod navigator;

pub use navigator::{ControlArrangement, GalleryNavigator, Presentation};

use crate::error::GalleryError;

/// Opaque reference to an artwork's image data.
///
/// The gallery core never interprets this value. The rendering layer resolves
/// it against the embedded asset catalog (`ui::assets`) to obtain pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef(&'static str);

impl ImageRef {
    /// Creates a reference to a named embedded asset.
    #[must_use]
    pub const fn new(asset_name: &'static str) -> Self {
        Self(asset_name)
    }

    /// Returns the asset name this reference points at.
    #[must_use]
    pub fn asset_name(&self) -> &'static str {
        self.0
    }
}

/// One displayable artwork: an image reference plus its placard data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    image: ImageRef,
    title: String,
    author: String,
    year: i32,
}

impl Artwork {
    /// Creates an artwork record. `title` and `author` are display strings
    /// and must be non-empty; `year` is display-only and unvalidated.
    #[must_use]
    pub fn new(image: ImageRef, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        let title = title.into();
        let author = author.into();
        debug_assert!(!title.is_empty(), "artwork title must be non-empty");
        debug_assert!(!author.is_empty(), "artwork author must be non-empty");
        Self {
            image,
            title,
            author,
            year,
        }
    }

    #[must_use]
    pub fn image(&self) -> ImageRef {
        self.image
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }
}

/// Fixed, non-empty ordered collection of artworks, indexed `0..len - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    artworks: Vec<Artwork>,
}

impl Gallery {
    /// Builds a gallery from an ordered collection.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Empty`] when `artworks` is empty. A gallery
    /// with no artworks has no valid current position, so construction is
    /// where that degenerate case is rejected.
    pub fn new(artworks: Vec<Artwork>) -> std::result::Result<Self, GalleryError> {
        if artworks.is_empty() {
            return Err(GalleryError::Empty);
        }
        Ok(Self { artworks })
    }

    /// The built-in collection: four works by Viktor Vasnetsov.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Artwork::new(
                ImageRef::new("alyonushka.png"),
                "Алёнушка",
                "Виктор Васнецов",
                1881,
            ),
            Artwork::new(
                ImageRef::new("grey-wolf.png"),
                "Иван-царевич на сером волке",
                "Виктор Васнецов",
                1889,
            ),
            Artwork::new(
                ImageRef::new("bogatyrs.png"),
                "Богатыри",
                "Виктор Васнецов",
                1898,
            ),
            Artwork::new(
                ImageRef::new("sleeping-tsarevna.png"),
                "Сказка о спящей царевне",
                "Виктор Васнецов",
                1926,
            ),
        ])
        .expect("built-in collection is non-empty")
    }

    /// Returns the artwork at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::IndexOutOfRange`] when `index` is outside
    /// `[0, len - 1]`.
    pub fn get(&self, index: usize) -> std::result::Result<&Artwork, GalleryError> {
        self.artworks.get(index).ok_or(GalleryError::IndexOutOfRange {
            index,
            len: self.artworks.len(),
        })
    }

    /// Number of artworks in the collection. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    /// Position of the last artwork (`len - 1`).
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.artworks.len() - 1
    }
}
