// SPDX-License-Identifier: MPL-2.0
//! Learner dashboard summary over purchased courses.

use crate::domain::course::{CourseId, LessonId};
use crate::domain::enrollment::{Enrollment, EnrollmentStatus};

/// Aggregate numbers shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_courses: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub total_hours: u32,
}

impl DashboardStats {
    #[must_use]
    pub fn from_enrollments(enrollments: &[Enrollment]) -> Self {
        Self {
            total_courses: enrollments.len(),
            completed: count_status(enrollments, EnrollmentStatus::Completed),
            in_progress: count_status(enrollments, EnrollmentStatus::InProgress),
            total_hours: enrollments
                .iter()
                .map(Enrollment::duration_hours)
                .fold(0, u32::saturating_add),
        }
    }
}

fn count_status(enrollments: &[Enrollment], status: EnrollmentStatus) -> usize {
    enrollments.iter().filter(|e| e.status == status).count()
}

/// Where the "Continue" button of an enrollment leads.
#[must_use]
pub fn continue_target(enrollment: &Enrollment) -> (CourseId, Option<LessonId>) {
    (
        enrollment.course_id,
        enrollment.resume.as_ref().map(|resume| resume.lesson_id),
    )
}

/// Enrollments ordered by most recent access; never-accessed ones last.
#[must_use]
pub fn recently_accessed(enrollments: &[Enrollment]) -> Vec<&Enrollment> {
    let mut sorted: Vec<&Enrollment> = enrollments.iter().collect();
    sorted.sort_by(|a, b| b.last_accessed.cmp(&a.last_accessed));
    sorted
}
