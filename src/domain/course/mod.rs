// SPDX-License-Identifier: MPL-2.0
//! Course content domain types.

pub mod types;

#[cfg(test)]
pub(crate) use types::fixtures;
pub use types::{Course, CourseId, Lesson, LessonId, LessonKind, Topic, TopicId};
