// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Playback volume bounds
//! - **Playback rate**: The discrete set of selectable rates
//! - **Skip step**: Arrow-key / skip-button jump distance
//! - **Overlay**: Fullscreen controls auto-hide timeout
//! - **Scrub bar**: Tooltip placement margin

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default lesson playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// Rates offered by the speed menu, in display order.
pub const PLAYBACK_RATES: [f64; 8] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

/// Default playback rate (normal speed).
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

// ==========================================================================
// Skip Step Defaults
// ==========================================================================

/// Default skip distance for arrow keys and skip buttons (seconds).
pub const DEFAULT_SKIP_STEP_SECS: f64 = 10.0;

/// Minimum skip distance (seconds).
pub const MIN_SKIP_STEP_SECS: f64 = 1.0;

/// Maximum skip distance (seconds).
pub const MAX_SKIP_STEP_SECS: f64 = 60.0;

// ==========================================================================
// Overlay/Timeout Defaults
// ==========================================================================

/// Default auto-hide timeout for fullscreen controls (in seconds).
pub const DEFAULT_OVERLAY_TIMEOUT_SECS: u32 = 3;

/// Minimum overlay timeout (in seconds).
pub const MIN_OVERLAY_TIMEOUT_SECS: u32 = 1;

/// Maximum overlay timeout (in seconds).
pub const MAX_OVERLAY_TIMEOUT_SECS: u32 = 30;

// ==========================================================================
// Scrub Bar Defaults
// ==========================================================================

/// Horizontal margin (px) kept between the time tooltip and the bar edges.
pub const SCRUB_TOOLTIP_MARGIN_PX: f32 = 30.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Volume validation
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);

    // Skip step validation
    assert!(MIN_SKIP_STEP_SECS > 0.0);
    assert!(MAX_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS <= MAX_SKIP_STEP_SECS);

    // Overlay timeout validation
    assert!(MIN_OVERLAY_TIMEOUT_SECS > 0);
    assert!(MAX_OVERLAY_TIMEOUT_SECS >= MIN_OVERLAY_TIMEOUT_SECS);
    assert!(DEFAULT_OVERLAY_TIMEOUT_SECS >= MIN_OVERLAY_TIMEOUT_SECS);
    assert!(DEFAULT_OVERLAY_TIMEOUT_SECS <= MAX_OVERLAY_TIMEOUT_SECS);

    assert!(SCRUB_TOOLTIP_MARGIN_PX >= 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_defaults_are_valid() {
        assert_eq!(DEFAULT_VOLUME, 1.0);
        assert!(DEFAULT_VOLUME >= MIN_VOLUME);
        assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    }

    #[test]
    fn playback_rates_are_sorted_and_contain_default() {
        assert!(PLAYBACK_RATES.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(PLAYBACK_RATES.contains(&DEFAULT_PLAYBACK_RATE));
    }

    #[test]
    fn skip_step_defaults_are_valid() {
        assert_eq!(DEFAULT_SKIP_STEP_SECS, 10.0);
        assert!(DEFAULT_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
        assert!(DEFAULT_SKIP_STEP_SECS <= MAX_SKIP_STEP_SECS);
    }

    // Verify domain bounds match config constants
    #[test]
    fn domain_bounds_match_config() {
        use crate::domain::ui::newtypes::overlay_timeout_bounds;
        use crate::domain::video::newtypes::{rate_presets, skip_step_bounds, volume_bounds};

        assert_eq!(volume_bounds::MIN, MIN_VOLUME);
        assert_eq!(volume_bounds::MAX, MAX_VOLUME);
        assert_eq!(volume_bounds::DEFAULT, DEFAULT_VOLUME);
        assert_eq!(rate_presets::ALLOWED, PLAYBACK_RATES);
        assert_eq!(rate_presets::DEFAULT, DEFAULT_PLAYBACK_RATE);
        assert_eq!(skip_step_bounds::MIN, MIN_SKIP_STEP_SECS);
        assert_eq!(skip_step_bounds::MAX, MAX_SKIP_STEP_SECS);
        assert_eq!(skip_step_bounds::DEFAULT, DEFAULT_SKIP_STEP_SECS);
        assert_eq!(overlay_timeout_bounds::MIN, MIN_OVERLAY_TIMEOUT_SECS);
        assert_eq!(overlay_timeout_bounds::MAX, MAX_OVERLAY_TIMEOUT_SECS);
        assert_eq!(overlay_timeout_bounds::DEFAULT, DEFAULT_OVERLAY_TIMEOUT_SECS);
    }

    #[test]
    fn overlay_timeout_defaults_are_valid() {
        assert_eq!(DEFAULT_OVERLAY_TIMEOUT_SECS, 3);
        assert!(DEFAULT_OVERLAY_TIMEOUT_SECS >= MIN_OVERLAY_TIMEOUT_SECS);
        assert!(DEFAULT_OVERLAY_TIMEOUT_SECS <= MAX_OVERLAY_TIMEOUT_SECS);
    }
}
