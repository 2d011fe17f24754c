// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Content(String),
    Playback(PlaybackError),
}

/// Specific error types for the lesson player.
/// Used to provide user-friendly, localized error messages.
///
/// None of these are fatal: the worst outcome is an inert player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// Requested playback rate is not one of the allowed presets.
    InvalidPlaybackRate(f64),

    /// Media metadata never loaded, so duration-dependent controls are disabled.
    MediaUnavailable,

    /// The host refused to enter fullscreen.
    FullscreenDenied(String),

    /// Operation requires a current video lesson.
    NoVideoLesson,
}

impl PlaybackError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PlaybackError::InvalidPlaybackRate(_) => "error-playback-invalid-rate",
            PlaybackError::MediaUnavailable => "error-playback-media-unavailable",
            PlaybackError::FullscreenDenied(_) => "error-playback-fullscreen-denied",
            PlaybackError::NoVideoLesson => "error-playback-no-video-lesson",
        }
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::InvalidPlaybackRate(rate) => {
                write!(f, "Unsupported playback rate: {}", rate)
            }
            PlaybackError::MediaUnavailable => write!(f, "Media is unavailable"),
            PlaybackError::FullscreenDenied(reason) => {
                write!(f, "Fullscreen request denied: {}", reason)
            }
            PlaybackError::NoVideoLesson => write!(f, "No video lesson is selected"),
        }
    }
}

impl std::error::Error for PlaybackError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::Playback(e) => write!(f, "Playback Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PlaybackError> for Error {
    fn from(err: PlaybackError) -> Self {
        Error::Playback(err)
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
    fn content_error_formats_properly() {
        let err = Error::Content("duplicate lesson id 4".into());
        assert_eq!(format!("{}", err), "Content Error: duplicate lesson id 4");
    }

    #[test]
    fn playback_error_wraps_into_error() {
        let err: Error = PlaybackError::InvalidPlaybackRate(3.0).into();
        assert!(matches!(
            err,
            Error::Playback(PlaybackError::InvalidPlaybackRate(rate)) if rate == 3.0
        ));
        assert!(format!("{}", err).contains("3"));
    }

    #[test]
    fn playback_error_i18n_keys() {
        assert_eq!(
            PlaybackError::InvalidPlaybackRate(0.1).i18n_key(),
            "error-playback-invalid-rate"
        );
        assert_eq!(
            PlaybackError::MediaUnavailable.i18n_key(),
            "error-playback-media-unavailable"
        );
        assert_eq!(
            PlaybackError::FullscreenDenied(String::new()).i18n_key(),
            "error-playback-fullscreen-denied"
        );
        assert_eq!(
            PlaybackError::NoVideoLesson.i18n_key(),
            "error-playback-no-video-lesson"
        );
    }

    #[test]
    fn fullscreen_denied_display_includes_reason() {
        let err = PlaybackError::FullscreenDenied("not allowed by host".to_string());
        assert!(format!("{}", err).contains("not allowed by host"));
    }
}
