// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! This module defines the [`MediaElement`] trait: the command side of the
//! single media transport owned by the lesson player, together with the
//! host surface capabilities the player needs (fullscreen and global pointer
//! capture during scrubbing).
//!
//! # Design Notes
//!
//! - Commands are fire-and-forget; outcomes come back as events the host
//!   feeds into the player (metadata loaded, time update, play, pause, ended,
//!   fullscreen change).
//! - Only fullscreen entry can be refused synchronously.
//! - Nothing else may drive the element: every mutation goes through the
//!   player so its invariants hold.

/// Reason given by the host when it refuses fullscreen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullscreenRefused(pub String);

/// Port for the rendering surface's media element.
///
/// # Lifecycle
///
/// 1. `load_source()` when a video lesson becomes current
/// 2. transport commands while the lesson is current
/// 3. `unload()` when a non-video lesson becomes current
///
/// `capture_pointer()`/`release_pointer()` bracket a scrub drag: they attach
/// and detach the window-wide pointer-move/pointer-up listeners and toggle
/// text selection. The player guarantees they are balanced.
pub trait MediaElement {
    /// Assigns a new media source, replacing the previous one.
    fn load_source(&mut self, source: &str);

    /// Detaches any media source.
    fn unload(&mut self);

    fn play(&mut self);

    fn pause(&mut self);

    /// Moves the playhead (seconds).
    fn set_current_time(&mut self, secs: f64);

    fn set_volume(&mut self, volume: f32);

    fn set_muted(&mut self, muted: bool);

    fn set_playback_rate(&mut self, rate: f64);

    /// Asks the host to show the player fullscreen.
    ///
    /// # Errors
    ///
    /// Returns [`FullscreenRefused`] if the host denies the request.
    fn request_fullscreen(&mut self) -> Result<(), FullscreenRefused>;

    fn exit_fullscreen(&mut self);

    /// Starts tracking pointer movement outside the scrub bar.
    fn capture_pointer(&mut self);

    /// Stops tracking pointer movement outside the scrub bar.
    fn release_pointer(&mut self);
}

/// Every command a [`MediaElement`] can receive, as a value.
///
/// Used by [`RecordingMedia`] and by the CLI's console host.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    LoadSource(String),
    Unload,
    Play,
    Pause,
    SetCurrentTime(f64),
    SetVolume(f32),
    SetMuted(bool),
    SetPlaybackRate(f64),
    RequestFullscreen,
    ExitFullscreen,
    CapturePointer,
    ReleasePointer,
}

/// A media element that records every command it receives.
///
/// Fullscreen is granted unless `deny_fullscreen` is set.
#[derive(Debug, Default)]
pub struct RecordingMedia {
    pub commands: Vec<MediaCommand>,
    pub deny_fullscreen: bool,
}

impl RecordingMedia {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a media element that refuses fullscreen requests.
    #[must_use]
    pub fn denying_fullscreen() -> Self {
        Self {
            deny_fullscreen: true,
            ..Self::default()
        }
    }

    /// Counts recorded commands matching the predicate.
    pub fn count(&self, predicate: impl Fn(&MediaCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    /// Returns the last seek target sent to the element.
    #[must_use]
    pub fn last_seek(&self) -> Option<f64> {
        self.commands.iter().rev().find_map(|command| match command {
            MediaCommand::SetCurrentTime(secs) => Some(*secs),
            _ => None,
        })
    }
}

impl MediaElement for RecordingMedia {
    fn load_source(&mut self, source: &str) {
        self.commands.push(MediaCommand::LoadSource(source.to_string()));
    }

    fn unload(&mut self) {
        self.commands.push(MediaCommand::Unload);
    }

    fn play(&mut self) {
        self.commands.push(MediaCommand::Play);
    }

    fn pause(&mut self) {
        self.commands.push(MediaCommand::Pause);
    }

    fn set_current_time(&mut self, secs: f64) {
        self.commands.push(MediaCommand::SetCurrentTime(secs));
    }

    fn set_volume(&mut self, volume: f32) {
        self.commands.push(MediaCommand::SetVolume(volume));
    }

    fn set_muted(&mut self, muted: bool) {
        self.commands.push(MediaCommand::SetMuted(muted));
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.commands.push(MediaCommand::SetPlaybackRate(rate));
    }

    fn request_fullscreen(&mut self) -> Result<(), FullscreenRefused> {
        self.commands.push(MediaCommand::RequestFullscreen);
        if self.deny_fullscreen {
            Err(FullscreenRefused("permission denied".to_string()))
        } else {
            Ok(())
        }
    }

    fn exit_fullscreen(&mut self) {
        self.commands.push(MediaCommand::ExitFullscreen);
    }

    fn capture_pointer(&mut self) {
        self.commands.push(MediaCommand::CapturePointer);
    }

    fn release_pointer(&mut self) {
        self.commands.push(MediaCommand::ReleasePointer);
    }
}
