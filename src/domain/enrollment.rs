// SPDX-License-Identifier: MPL-2.0
//! Learner enrollment records shown on the dashboard.

use crate::domain::course::{CourseId, LessonId};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Where a learner stands in a purchased course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnrollmentStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl EnrollmentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns the i18n key for the status label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::NotStarted => "status-not-started",
            Self::InProgress => "status-in-progress",
            Self::Completed => "status-completed",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown enrollment status: {other}")),
        }
    }
}

/// Pointer to the lesson a learner should resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumePoint {
    pub lesson_id: LessonId,
    pub lesson_title: String,
    pub topic_title: String,
}

/// A purchased course with the learner's progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub course_id: CourseId,
    pub title: String,
    pub instructor: String,
    /// Percent complete, 0–100.
    pub progress: u8,
    pub status: EnrollmentStatus,
    pub completed_lessons: u32,
    pub total_lessons: u32,
    /// Display string, e.g. "24 hours".
    pub duration: String,
    pub rating: f32,
    pub purchased_on: NaiveDate,
    pub last_accessed: Option<NaiveDate>,
    pub resume: Option<ResumePoint>,
    pub certificate_earned: bool,
}

impl Enrollment {
    /// Whole hours read from the leading digits of the duration string.
    ///
    /// "24 hours" → 24, "12.5 hours" → 12, "24h" → 24; no leading digit
    /// counts as 0. Values past `u32::MAX` saturate.
    #[must_use]
    pub fn duration_hours(&self) -> u32 {
        let trimmed = self.duration.trim_start();
        let digits = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .map_or(trimmed, |end| &trimmed[..end]);
        if digits.is_empty() {
            return 0;
        }
        digits.parse().unwrap_or(u32::MAX)
    }
}
