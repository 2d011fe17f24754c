// SPDX-License-Identifier: MPL-2.0
//! Time helpers for the lesson player.
//!
//! Media positions are plain `f64` seconds as reported by the media element.
//! A duration is only usable once it is finite and positive.

pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Returns the duration if it is usable for seeking and progress.
///
/// # Examples
///
/// ```
/// use course_lens::video_player::time_units::known_duration;
///
/// assert_eq!(known_duration(90.0), Some(90.0));
/// assert_eq!(known_duration(f64::NAN), None);
/// assert_eq!(known_duration(0.0), None);
/// ```
#[inline]
#[must_use]
pub fn known_duration(duration_secs: f64) -> Option<f64> {
    (duration_secs.is_finite() && duration_secs > 0.0).then_some(duration_secs)
}

/// Clamps a position to `[0, duration]`. NaN maps to 0.
#[inline]
#[must_use]
pub fn clamp_position(secs: f64, duration_secs: f64) -> f64 {
    if secs.is_nan() {
        return 0.0;
    }
    secs.clamp(0.0, duration_secs.max(0.0))
}

/// `current / duration` clamped to `[0, 1]`, or 0 while the duration is
/// unknown.
#[inline]
#[must_use]
pub fn progress_ratio(current_secs: f64, duration_secs: f64) -> f64 {
    match known_duration(duration_secs) {
        Some(duration) if current_secs.is_finite() => (current_secs / duration).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Formats seconds as `m:ss`.
///
/// Minutes are not wrapped into hours; negative and non-finite inputs render
/// as `0:00`.
///
/// # Examples
///
/// ```
/// use course_lens::video_player::time_units::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(65.9), "1:05");
/// assert_eq!(format_time(3600.0), "60:00");
/// ```
#[must_use]
pub fn format_time(secs: f64) -> String {
    let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
    // Truncation matches the player's whole-second display.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = secs.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}
