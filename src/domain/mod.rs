// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and rules without I/O.
//!
//! Apart from `chrono` for calendar dates, this layer only depends on `std`
//! so it stays testable on its own.
//!
//! # Modules
//!
//! - [`catalog`]: Catalog listings and filter criteria ([`CatalogFilter`](catalog::CatalogFilter),
//!   [`SortBy`](catalog::SortBy))
//! - [`course`]: Course content tree ([`Course`](course::Course), [`Lesson`](course::Lesson),
//!   [`LessonKind`](course::LessonKind))
//! - [`enrollment`]: Learner enrollments ([`Enrollment`](enrollment::Enrollment))
//! - [`ui`]: UI value objects ([`OverlayTimeout`](ui::OverlayTimeout),
//!   [`SidebarTab`](ui::SidebarTab))
//! - [`video`]: Playback types ([`PlaybackPhase`](video::PlaybackPhase),
//!   [`Volume`](video::Volume), [`PlaybackRate`](video::PlaybackRate))

pub mod catalog;
pub mod course;
pub mod enrollment;
pub mod ui;
pub mod video;
