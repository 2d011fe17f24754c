// SPDX-License-Identifier: MPL-2.0
//! Catalog filter and sort engine for the course browsing page.

use crate::domain::catalog::{CatalogFilter, Category, CategoryFilter, CourseListing, SortBy};
use std::cmp::Ordering;

/// Result of applying a [`CatalogFilter`] to a listing set.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    pub listings: Vec<&'a CourseListing>,
    /// Number of listings before filtering.
    pub total_count: usize,
    pub filter_active: bool,
}

impl CatalogView<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Filters then sorts `listings`.
///
/// The sort is stable: listings comparing equal keep their source order.
#[must_use]
pub fn apply<'a>(listings: &'a [CourseListing], filter: &CatalogFilter) -> CatalogView<'a> {
    let mut matching: Vec<&CourseListing> =
        listings.iter().filter(|listing| filter.matches(listing)).collect();
    matching.sort_by(|a, b| compare(filter.sort, a, b));

    CatalogView {
        listings: matching,
        total_count: listings.len(),
        filter_active: filter.is_active(),
    }
}

fn compare(sort: SortBy, a: &CourseListing, b: &CourseListing) -> Ordering {
    match sort {
        SortBy::Popular => b.students.cmp(&a.students),
        SortBy::Rating => b.rating.total_cmp(&a.rating),
        SortBy::PriceLow => a.price.total_cmp(&b.price),
        SortBy::PriceHigh => b.price.total_cmp(&a.price),
        SortBy::Newest => b.id.cmp(&a.id),
    }
}

/// Technologies offered by the technology filter for a category choice.
///
/// With `All`, every category's technologies in category order (first
/// occurrence kept); otherwise the selected category's list, empty if the
/// category is unknown.
#[must_use]
pub fn available_technologies(categories: &[Category], category: CategoryFilter) -> Vec<&str> {
    match category {
        CategoryFilter::All => {
            let mut seen: Vec<&str> = Vec::new();
            for technology in categories.iter().flat_map(|cat| cat.technologies.iter()) {
                if !seen.contains(&technology.as_str()) {
                    seen.push(technology.as_str());
                }
            }
            seen
        }
        CategoryFilter::Only(id) => categories
            .iter()
            .find(|cat| cat.id == id)
            .map(|cat| cat.technologies.iter().map(String::as_str).collect())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Level, LevelFilter};
    use crate::domain::course::CourseId;

    fn listing(id: u32, category_id: u32, students: u32, rating: f32, price: f32) -> CourseListing {
        CourseListing {
            id: CourseId(id),
            title: format!("Course {id}"),
            instructor: "Instructor".to_string(),
            category_id,
            level: Level::Beginner,
            technology: if category_id == 1 { "React" } else { "Python" }.to_string(),
            tags: Vec::new(),
            students,
            rating,
            price,
        }
    }

    fn listings() -> Vec<CourseListing> {
        vec![
            listing(1, 1, 500, 4.5, 49.0),
            listing(2, 2, 1500, 4.9, 99.0),
            listing(3, 1, 900, 4.5, 19.0),
            listing(4, 2, 900, 4.7, 49.0),
        ]
    }

    fn ids(view: &CatalogView<'_>) -> Vec<u32> {
        view.listings.iter().map(|l| l.id.value()).collect()
    }

    fn sorted(sort: SortBy) -> Vec<u32> {
        let data = listings();
        let filter = CatalogFilter {
            sort,
            ..CatalogFilter::default()
        };
        ids(&apply(&data, &filter))
    }

    #[test]
    fn sort_orders() {
        assert_eq!(sorted(SortBy::Popular), vec![2, 3, 4, 1]);
        assert_eq!(sorted(SortBy::Rating), vec![2, 4, 1, 3]);
        assert_eq!(sorted(SortBy::PriceLow), vec![3, 1, 4, 2]);
        assert_eq!(sorted(SortBy::PriceHigh), vec![2, 1, 4, 3]);
        assert_eq!(sorted(SortBy::Newest), vec![4, 3, 2, 1]);
    }

    #[test]
    fn filter_then_sort() {
        let data = listings();
        let filter = CatalogFilter {
            category: CategoryFilter::Only(1),
            sort: SortBy::PriceLow,
            ..CatalogFilter::default()
        };
        let view = apply(&data, &filter);
        assert_eq!(ids(&view), vec![3, 1]);
        assert_eq!(view.total_count, 4);
        assert!(view.filter_active);
    }

    #[test]
    fn no_match_yields_empty_view() {
        let data = listings();
        let filter = CatalogFilter {
            level: LevelFilter::Only(Level::Advanced),
            ..CatalogFilter::default()
        };
        let view = apply(&data, &filter);
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
    }

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: 1,
                name: "Web".to_string(),
                technologies: vec!["React".to_string(), "Node.js".to_string()],
            },
            Category {
                id: 2,
                name: "Data".to_string(),
                technologies: vec!["Python".to_string(), "Node.js".to_string()],
            },
        ]
    }

    #[test]
    fn available_technologies_for_all_categories() {
        let cats = categories();
        assert_eq!(
            available_technologies(&cats, CategoryFilter::All),
            vec!["React", "Node.js", "Python"]
        );
    }

    #[test]
    fn available_technologies_for_one_category() {
        let cats = categories();
        assert_eq!(
            available_technologies(&cats, CategoryFilter::Only(2)),
            vec!["Python", "Node.js"]
        );
        assert!(available_technologies(&cats, CategoryFilter::Only(9)).is_empty());
    }
}
