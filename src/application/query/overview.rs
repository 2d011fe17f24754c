// SPDX-License-Identifier: MPL-2.0
//! Course overview statistics.

use crate::domain::course::{Course, Lesson, LessonKind};

/// Summary counts for a course's landing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseStats {
    pub topics: usize,
    pub lessons: usize,
    pub completed: usize,
    pub videos: usize,
    pub quizzes: usize,
    pub projects: usize,
    /// Rounded completion percentage, 0 for a course without lessons.
    pub percent_complete: u8,
}

impl CourseStats {
    #[must_use]
    pub fn for_course(course: &Course) -> Self {
        let mut stats = Self {
            topics: course.topics.len(),
            ..Self::default()
        };

        for lesson in course.lessons() {
            stats.lessons += 1;
            if lesson.completed {
                stats.completed += 1;
            }
            match lesson.kind {
                LessonKind::Video { .. } => stats.videos += 1,
                LessonKind::Quiz => stats.quizzes += 1,
                LessonKind::Project => stats.projects += 1,
            }
        }

        stats.percent_complete = percent(stats.completed, stats.lessons);
        stats
    }
}

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // done <= total, so the result is within 0..=100
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    let rounded = ((done as f64 / total as f64) * 100.0).round() as u8;
    rounded
}

/// The first video lesson not yet completed, in traversal order.
#[must_use]
pub fn next_unfinished_video(course: &Course) -> Option<&Lesson> {
    course
        .video_lessons()
        .find(|lesson| !lesson.completed)
}
