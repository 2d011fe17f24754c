// SPDX-License-Identifier: MPL-2.0
//! Port definitions (interfaces to the outside world).
//!
//! - [`content`]: read-only content repository
//! - [`media`]: the media element driven by the lesson player

pub mod content;
pub mod media;

pub use content::ContentRepository;
pub use media::{FullscreenRefused, MediaCommand, MediaElement, RecordingMedia};
