// SPDX-License-Identifier: MPL-2.0
//! Catalog filter and sort criteria.
//!
//! Pure criteria types; applying them to a listing set is done by the
//! catalog query service in the application layer.
//!
//! # Available Filters
//!
//! - [`CategoryFilter`]: one category or all
//! - [`LevelFilter`]: one level or all
//! - technology: exact technology name or all
//! - search: case-insensitive substring over title, instructor and tags
//!
//! All active criteria combine with AND logic.

use super::types::{CourseListing, Level};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Category / Level Filters
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(u32),
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse()
            .map(Self::Only)
            .map_err(|_| format!("invalid category: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(Level),
}

impl FromStr for LevelFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Catalog sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Most students first.
    #[default]
    Popular,
    /// Highest rating first.
    Rating,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Highest id first.
    Newest,
}

impl SortBy {
    pub const ALL: [SortBy; 5] = [
        SortBy::Popular,
        SortBy::Rating,
        SortBy::PriceLow,
        SortBy::PriceHigh,
        SortBy::Newest,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Rating => "rating",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Newest => "newest",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sort order: {s}"))
    }
}

// =============================================================================
// Composite Catalog Filter
// =============================================================================

/// Combined catalog criteria with AND logic.
///
/// When no criterion is active, every listing matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogFilter {
    pub category: CategoryFilter,
    pub level: LevelFilter,
    /// `None` means all technologies.
    pub technology: Option<String>,
    /// Free-text search, matched as typed; empty means no search.
    pub search: String,
    pub sort: SortBy,
}

impl CatalogFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any narrowing criterion is active (sort excluded).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All
            || self.level != LevelFilter::All
            || self.technology.is_some()
            || !self.search.is_empty()
    }

    /// Resets all criteria and the sort order.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if the listing satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, listing: &CourseListing) -> bool {
        if let CategoryFilter::Only(id) = self.category {
            if listing.category_id != id {
                return false;
            }
        }

        if let LevelFilter::Only(level) = self.level {
            if listing.level != level {
                return false;
            }
        }

        if let Some(technology) = &self.technology {
            if &listing.technology != technology {
                return false;
            }
        }

        let needle = self.search.to_lowercase();
        if !needle.is_empty() {
            let hit = listing.title.to_lowercase().contains(&needle)
                || listing.instructor.to_lowercase().contains(&needle)
                || listing
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::CourseId;

    fn listing() -> CourseListing {
        CourseListing {
            id: CourseId(1),
            title: "Advanced React Development".to_string(),
            instructor: "Sarah Chen".to_string(),
            category_id: 1,
            level: Level::Advanced,
            technology: "React".to_string(),
            tags: vec!["hooks".to_string(), "Performance".to_string()],
            students: 1200,
            rating: 4.8,
            price: 89.0,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = CatalogFilter::new();
        assert!(!filter.is_active());
        assert!(filter.matches(&listing()));
    }

    #[test]
    fn search_covers_title_instructor_and_tags() {
        let mut filter = CatalogFilter::new();
        for term in ["react", "CHEN", "perf"] {
            filter.search = term.to_string();
            assert!(filter.matches(&listing()), "term {term} should match");
        }
        filter.search = "python".to_string();
        assert!(!filter.matches(&listing()));
    }

    #[test]
    fn empty_search_is_inactive() {
        let filter = CatalogFilter {
            search: String::new(),
            ..CatalogFilter::default()
        };
        assert!(!filter.is_active());
        assert!(filter.matches(&listing()));
    }

    #[test]
    fn search_is_not_trimmed() {
        let mut filter = CatalogFilter {
            search: "react ".to_string(),
            ..CatalogFilter::default()
        };
        assert!(filter.is_active());
        assert!(filter.matches(&listing()), "title contains \"react \"");

        filter.search = " chen".to_string();
        assert!(filter.matches(&listing()), "instructor contains \" chen\"");

        filter.search = "hooks ".to_string();
        assert!(!filter.matches(&listing()));

        filter.search = "   ".to_string();
        assert!(filter.is_active());
        assert!(!filter.matches(&listing()));
    }

    #[test]
    fn criteria_combine_with_and() {
        let filter = CatalogFilter {
            category: CategoryFilter::Only(1),
            level: LevelFilter::Only(Level::Beginner),
            ..CatalogFilter::default()
        };
        assert!(filter.is_active());
        assert!(!filter.matches(&listing()));
    }

    #[test]
    fn technology_must_match_exactly() {
        let mut filter = CatalogFilter {
            technology: Some("React".to_string()),
            ..CatalogFilter::default()
        };
        assert!(filter.matches(&listing()));
        filter.technology = Some("Vue".to_string());
        assert!(!filter.matches(&listing()));
    }

    #[test]
    fn clear_resets_sort_to_popular() {
        let mut filter = CatalogFilter {
            search: "x".to_string(),
            sort: SortBy::PriceHigh,
            ..CatalogFilter::default()
        };
        filter.clear();
        assert_eq!(filter, CatalogFilter::default());
        assert_eq!(filter.sort, SortBy::Popular);
    }

    #[test]
    fn query_strings_parse() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("2".parse::<CategoryFilter>(), Ok(CategoryFilter::Only(2)));
        assert!("web".parse::<CategoryFilter>().is_err());
        assert_eq!(
            "intermediate".parse::<LevelFilter>(),
            Ok(LevelFilter::Only(Level::Intermediate))
        );
        assert_eq!("price-low".parse::<SortBy>(), Ok(SortBy::PriceLow));
        assert!("cheapest".parse::<SortBy>().is_err());
    }
}
