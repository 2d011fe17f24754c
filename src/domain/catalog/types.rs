// SPDX-License-Identifier: MPL-2.0
//! Catalog listing types for the course browsing page.

use crate::domain::course::CourseId;
use std::fmt;
use std::str::FromStr;

/// Course difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Returns the i18n message key for the level label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::Beginner => "level-beginner",
            Self::Intermediate => "level-intermediate",
            Self::Advanced => "level-advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown level: {s}"))
    }
}

/// A browsing category with the technologies it groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub technologies: Vec<String>,
}

/// A purchasable course as shown on the catalog page.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseListing {
    pub id: CourseId,
    pub title: String,
    pub instructor: String,
    pub category_id: u32,
    pub level: Level,
    pub technology: String,
    pub tags: Vec<String>,
    pub students: u32,
    pub rating: f32,
    pub price: f32,
}
