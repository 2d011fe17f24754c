// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types.
//!
//! Listings shown on the course browsing page and the criteria used to
//! narrow and order them.

pub mod filter;
pub mod types;

// Re-export commonly used types
pub use filter::{CatalogFilter, CategoryFilter, LevelFilter, SortBy};
pub use types::{Category, CourseListing, Level};
