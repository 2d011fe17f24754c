// SPDX-License-Identifier: MPL-2.0
//! Lesson playback state machine.
//!
//! `Idle → Loading → Ready ⇄ Playing ⇄ Paused`, with `Ended` reachable from
//! `Playing` and `Unavailable` when metadata fails to load. A lesson switch
//! always goes back through `Idle`.

/// Represents the transport phase of the current lesson's media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    /// No video lesson is loaded.
    #[default]
    Idle,
    /// A source is assigned; waiting for metadata (duration).
    Loading,
    /// Metadata is known; playback has not started yet.
    Ready,
    /// Media is playing.
    Playing,
    /// Media is paused at the current position.
    Paused,
    /// Playback reached the end of the media.
    Ended,
    /// Metadata never loaded; duration-dependent controls are inert.
    Unavailable,
}

impl PlaybackPhase {
    /// Returns true if the media is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if a video lesson is loaded, whatever its state.
    #[must_use]
    pub fn has_media(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns true if play/pause can be toggled in this phase.
    #[must_use]
    pub fn accepts_toggle(self) -> bool {
        matches!(
            self,
            Self::Loading | Self::Ready | Self::Playing | Self::Paused | Self::Ended
        )
    }

    /// Returns true if the media failed to provide metadata.
    #[must_use]
    pub fn is_unavailable(self) -> bool {
        matches!(self, Self::Unavailable)
    }
}
