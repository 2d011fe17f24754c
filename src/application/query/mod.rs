// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! These services do not modify content; they provide read-only views over
//! it.
//!
//! # Available Services
//!
//! - [`navigation`]: Curriculum navigation (`CurriculumNavigator`) and sidebar state
//! - [`catalog`]: Catalog filter/sort engine
//! - [`overview`]: Course overview statistics
//! - [`dashboard`]: Learner dashboard summary

pub mod catalog;
pub mod dashboard;
pub mod navigation;
pub mod overview;

// Re-export main types
pub use catalog::CatalogView;
pub use dashboard::DashboardStats;
pub use navigation::{
    CurriculumNavigator, CurriculumUiState, LessonNavigationInfo, LessonRow, TopicOutline,
};
pub use overview::CourseStats;
