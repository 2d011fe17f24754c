// SPDX-License-Identifier: MPL-2.0
//! `course_lens` is the engine behind a course catalog and lesson player.
//!
//! It resolves lessons in a nested course curriculum, filters and sorts the
//! course catalog, summarises a learner's enrollments and drives a video
//! lesson's transport through a host-provided media element.

#![doc(html_root_url = "https://docs.rs/course_lens/0.1.0")]

pub mod application;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod session;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;
