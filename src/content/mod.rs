// SPDX-License-Identifier: MPL-2.0
//! Embedded read-only content repository.
//!
//! Course curricula, catalog listings and enrollments are bundled into the
//! binary from `assets/content/*.toml` and validated once at load time.
//! The file formats are private: this module maps them onto domain types and
//! rejects content that would break navigation (duplicate ids, video lessons
//! without a source).

mod dto;

use crate::application::port::ContentRepository;
use crate::domain::catalog::{Category, CourseListing};
use crate::domain::course::{Course, CourseId};
use crate::domain::enrollment::Enrollment;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::HashSet;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const COURSES_FILE: &str = "courses.toml";
const CATALOG_FILE: &str = "catalog.toml";
const ENROLLMENTS_FILE: &str = "enrollments.toml";

/// Content repository backed by the bundled TOML files.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedContent {
    courses: Vec<Course>,
    categories: Vec<Category>,
    listings: Vec<CourseListing>,
    enrollments: Vec<Enrollment>,
}

impl EmbeddedContent {
    /// Loads and validates the bundled content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Content`] if a file is missing, malformed or fails
    /// validation.
    pub fn load() -> Result<Self> {
        Self::from_toml(
            &embedded_text(COURSES_FILE)?,
            &embedded_text(CATALOG_FILE)?,
            &embedded_text(ENROLLMENTS_FILE)?,
        )
    }

    /// Builds a repository from TOML sources.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Content`] if a source is malformed or fails
    /// validation.
    pub fn from_toml(courses: &str, catalog: &str, enrollments: &str) -> Result<Self> {
        let courses = dto::parse_courses(courses)?;
        check_unique_course_ids(&courses)?;
        let (categories, listings) = dto::parse_catalog(catalog)?;
        let enrollments = dto::parse_enrollments(enrollments)?;

        tracing::debug!(
            courses = courses.len(),
            listings = listings.len(),
            enrollments = enrollments.len(),
            "content loaded"
        );

        Ok(Self {
            courses,
            categories,
            listings,
            enrollments,
        })
    }
}

impl ContentRepository for EmbeddedContent {
    fn get_course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    fn courses(&self) -> &[Course] {
        &self.courses
    }

    fn listings(&self) -> &[CourseListing] {
        &self.listings
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }
}

fn embedded_text(name: &str) -> Result<String> {
    let file = Asset::get(name)
        .ok_or_else(|| Error::Content(format!("missing bundled file {name}")))?;
    String::from_utf8(file.data.into_owned())
        .map_err(|err| Error::Content(format!("{name} is not UTF-8: {err}")))
}

fn check_unique_course_ids(courses: &[Course]) -> Result<()> {
    let mut seen = HashSet::new();
    for course in courses {
        if !seen.insert(course.id) {
            return Err(Error::Content(format!("duplicate course id {}", course.id)));
        }
    }
    Ok(())
}
