// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (CQRS read-side)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - The content adapter and hosts implement application layer ports
//! - The lesson player and the CLI use application layer services
//!
//! # Example
//!
//! ```
//! use course_lens::application::port::ContentRepository;
//! use course_lens::application::query::CurriculumNavigator;
//! use course_lens::content::EmbeddedContent;
//! use course_lens::domain::course::CourseId;
//!
//! let content = EmbeddedContent::load().expect("bundled content is valid");
//! let course = content.get_course(CourseId(1)).expect("course 1 exists");
//! let first = CurriculumNavigator::new(course).resolve_active_lesson(None);
//! assert!(first.is_some_and(|lesson| lesson.is_video()));
//! ```

pub mod port;
pub mod query;
