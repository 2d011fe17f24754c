// SPDX-License-Identifier: MPL-2.0
//! Controls overlay visibility and the speed/quality menus.
//!
//! In fullscreen while playing, the controls hide after a period without
//! pointer activity. The countdown is a single optional deadline: arming it
//! again replaces the previous one, so at most one is ever pending. The host
//! drives time by calling [`ControlsVisibility::tick`].

use crate::domain::ui::OverlayTimeout;
use std::time::{Duration, Instant};

/// Visibility of the player controls overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsVisibility {
    visible: bool,
    hide_at: Option<Instant>,
    timeout: Duration,
}

impl Default for ControlsVisibility {
    fn default() -> Self {
        Self::new(OverlayTimeout::default())
    }
}

impl ControlsVisibility {
    #[must_use]
    pub fn new(timeout: OverlayTimeout) -> Self {
        Self {
            visible: true,
            hide_at: None,
            timeout: timeout.as_duration(),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Pending hide deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Shows the controls and restarts the countdown from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.visible = true;
        self.hide_at = Some(now + self.timeout);
    }

    /// Shows the controls and cancels any countdown.
    pub fn force_visible(&mut self) {
        self.visible = true;
        self.hide_at = None;
    }

    /// Hides the controls if the countdown has elapsed.
    ///
    /// Returns `true` only on the tick that hides them.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                self.visible = false;
                true
            }
            _ => false,
        }
    }
}

/// Which settings menu is open. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMenu {
    #[default]
    None,
    Speed,
    Quality,
}

impl OpenMenu {
    #[must_use]
    pub fn is_speed(self) -> bool {
        matches!(self, Self::Speed)
    }

    #[must_use]
    pub fn is_quality(self) -> bool {
        matches!(self, Self::Quality)
    }

    /// Opens `menu`, or closes it if it is already the open one.
    #[must_use]
    pub fn toggled(self, menu: OpenMenu) -> OpenMenu {
        if self == menu {
            OpenMenu::None
        } else {
            menu
        }
    }
}
