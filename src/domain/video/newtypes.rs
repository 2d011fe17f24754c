// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for lesson playback values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, where 1.0 = 100%).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f32 = 1.0;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// A zero volume is not the same thing as muted: mute is tracked separately
/// by the player so that unmuting restores the previous level.
///
/// # Example
///
/// ```
/// use course_lens::domain::video::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// let too_loud = Volume::new(2.0);
/// assert_eq!(too_loud.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// NaN maps to the minimum.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if the level is zero (inaudible even when unmuted).
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 < 0.001
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate presets offered by the speed menu.
pub mod rate_presets {
    /// Every selectable rate, ascending.
    pub const ALLOWED: [f64; 8] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];
    /// Normal speed.
    pub const DEFAULT: f64 = 1.0;
}

/// Playback rate restricted to the discrete speed-menu presets.
///
/// Unlike [`Volume`], out-of-set values are rejected rather than clamped:
/// asking for 3x is a caller error, not a request for 2x.
///
/// # Example
///
/// ```
/// use course_lens::domain::video::PlaybackRate;
///
/// assert_eq!(PlaybackRate::try_new(1.5).map(|r| r.value()), Some(1.5));
/// assert!(PlaybackRate::try_new(3.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Returns the rate if `rate` is one of the allowed presets.
    #[must_use]
    pub fn try_new(rate: f64) -> Option<Self> {
        rate_presets::ALLOWED
            .iter()
            .find(|&&allowed| (allowed - rate).abs() < 1e-9)
            .map(|&allowed| Self(allowed))
    }

    /// Returns every allowed rate in menu order.
    pub fn all() -> impl Iterator<Item = PlaybackRate> {
        rate_presets::ALLOWED.iter().map(|&rate| Self(rate))
    }

    /// Returns the rate multiplier.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true for normal speed.
    #[must_use]
    pub fn is_normal(self) -> bool {
        (self.0 - rate_presets::DEFAULT).abs() < 1e-9
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(rate_presets::DEFAULT)
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Skip step bounds in seconds.
pub mod skip_step_bounds {
    /// Minimum skip distance.
    pub const MIN: f64 = 1.0;
    /// Maximum skip distance.
    pub const MAX: f64 = 60.0;
    /// Default skip distance used by the arrow keys and skip buttons.
    pub const DEFAULT: f64 = 10.0;
}

/// Distance jumped by the skip buttons and arrow-key shortcuts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(skip_step_bounds::MIN, skip_step_bounds::MAX))
    }

    /// Returns the step in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the step as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(skip_step_bounds::DEFAULT)
    }
}

// =============================================================================
// VideoQuality
// =============================================================================

/// Stream quality offered by the quality menu.
///
/// Only recorded as a preference; switching renditions is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VideoQuality {
    #[default]
    Auto,
    P1080,
    P720,
    P480,
    P360,
}

impl VideoQuality {
    /// Every quality in menu order.
    pub const ALL: [VideoQuality; 5] = [
        VideoQuality::Auto,
        VideoQuality::P1080,
        VideoQuality::P720,
        VideoQuality::P480,
        VideoQuality::P360,
    ];

    /// Returns the menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::P1080 => "1080p",
            Self::P720 => "720p",
            Self::P480 => "480p",
            Self::P360 => "360p",
        }
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VideoQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|quality| quality.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown video quality: {s}"))
    }
}
