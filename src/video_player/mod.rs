// SPDX-License-Identifier: MPL-2.0
//! Lesson player engine.
//!
//! The player never decodes media itself: it drives a host-provided
//! [`MediaElement`](crate::application::port::MediaElement) and keeps the
//! transport, scrub-bar, controls overlay and keyboard state consistent.

pub mod controls;
pub mod scrub;
pub mod shortcuts;
mod state;
pub mod time_units;

pub use controls::{ControlsVisibility, OpenMenu};
pub use scrub::{BarGeometry, DragCapture, HoverPreview, ScrubBar};
pub use shortcuts::{FocusTarget, Key, KeyOutcome, ShortcutAction};
pub use state::{LessonPlayer, PlaybackSnapshot, PlayerSettings};
pub use time_units::format_time;
