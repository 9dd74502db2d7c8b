// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Config(String),
    Gallery(GalleryError),
}

/// Faults raised by the gallery collection itself.
///
/// Both variants are programming-error class: `Empty` is a construction
/// precondition checked once at startup, and `IndexOutOfRange` is unreachable
/// as long as the navigator keeps its position invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// The gallery was constructed from an empty collection.
    Empty,

    /// A lookup used a position outside `[0, len - 1]`.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Empty => write!(f, "gallery must contain at least one artwork"),
            GalleryError::IndexOutOfRange { index, len } => {
                write!(f, "artwork index {} out of range (gallery size {})", index, len)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Gallery(e) => write!(f, "Gallery Error: {}", e),
        }
    }
}

impl From<GalleryError> for Error {
    fn from(err: GalleryError) -> Self {
        Error::Gallery(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_config_error() {
        let err = Error::Config("bad field".to_string());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn display_formats_out_of_range() {
        let err = GalleryError::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(
            format!("{}", err),
            "artwork index 7 out of range (gallery size 4)"
        );
    }

    #[test]
    fn display_formats_empty_gallery() {
        let err = GalleryError::Empty;
        assert!(format!("{}", err).contains("at least one artwork"));
    }

    #[test]
    fn from_io_error_produces_config_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Config(message) => assert!(message.contains("boom")),
            _ => panic!("expected Config variant"),
        }
    }

    #[test]
    fn from_gallery_error_wraps_variant() {
        let err: Error = GalleryError::Empty.into();
        assert!(matches!(err, Error::Gallery(GalleryError::Empty)));
    }
}
