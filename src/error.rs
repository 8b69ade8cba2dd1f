// SPDX-License-Identifier: MPL-2.0
use crate::carousel::CarouselError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Deck(String),
    Carousel(CarouselError),
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Deck(_) => "error-deck",
            Error::Carousel(err) => err.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Deck(e) => write!(f, "Deck Error: {}", e),
            Error::Carousel(e) => write!(f, "Carousel Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CarouselError> for Error {
    fn from(err: CarouselError) -> Self {
        Error::Carousel(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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
    use crate::carousel::Surface;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn carousel_error_converts_and_keeps_key() {
        let err: Error = CarouselError::MissingSurface(Surface::Progress).into();
        assert!(matches!(err, Error::Carousel(_)));
        assert_eq!(err.i18n_key(), "error-missing-surface");
        assert!(format!("{}", err).starts_with("Carousel Error:"));
    }

    #[test]
    fn deck_error_i18n_key() {
        assert_eq!(Error::Deck("x".into()).i18n_key(), "error-deck");
    }
}
