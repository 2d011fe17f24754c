// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

/// Overlay timeout bounds in seconds.
pub mod overlay_timeout_bounds {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 30;
    pub const DEFAULT: u32 = 3;
}

/// Inactivity delay before fullscreen controls hide.
///
/// # Example
///
/// ```
/// use course_lens::domain::ui::OverlayTimeout;
///
/// let timeout = OverlayTimeout::new(5);
/// assert_eq!(timeout.value(), 5);
///
/// // Values outside range are clamped
/// let too_high = OverlayTimeout::new(100);
/// assert_eq!(too_high.value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTimeout(u32);

impl OverlayTimeout {
    /// Creates a new overlay timeout value, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(overlay_timeout_bounds::MIN, overlay_timeout_bounds::MAX))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for OverlayTimeout {
    fn default() -> Self {
        Self(overlay_timeout_bounds::DEFAULT)
    }
}

/// Sidebar tab shown next to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarTab {
    #[default]
    Curriculum,
    Notes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(OverlayTimeout::new(0).value(), overlay_timeout_bounds::MIN);
        assert_eq!(OverlayTimeout::new(100).value(), overlay_timeout_bounds::MAX);
        assert_eq!(OverlayTimeout::new(15).value(), 15);
    }

    #[test]
    fn default_is_three_seconds() {
        assert_eq!(OverlayTimeout::default().as_duration(), Duration::from_secs(3));
    }

    #[test]
    fn default_tab_is_curriculum() {
        assert_eq!(SidebarTab::default(), SidebarTab::Curriculum);
    }
}
