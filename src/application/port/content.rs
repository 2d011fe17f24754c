// SPDX-License-Identifier: MPL-2.0
//! Content repository port definition.
//!
//! Read-only access to course content, catalog listings and enrollments.
//! The embedded TOML adapter lives in [`crate::content`].

use crate::domain::catalog::{Category, CourseListing};
use crate::domain::course::{Course, CourseId};
use crate::domain::enrollment::Enrollment;

/// Port for static course content.
pub trait ContentRepository {
    /// Returns the course with the given id, if any.
    fn get_course(&self, id: CourseId) -> Option<&Course>;

    /// Every course with curriculum content.
    fn courses(&self) -> &[Course];

    /// Listings shown on the catalog page.
    fn listings(&self) -> &[CourseListing];

    /// Catalog categories, in display order.
    fn categories(&self) -> &[Category];

    /// The learner's purchased courses.
    fn enrollments(&self) -> &[Enrollment];
}
