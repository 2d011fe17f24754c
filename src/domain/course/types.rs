// SPDX-License-Identifier: MPL-2.0
//! Course content tree: course → ordered topics → ordered lessons.
//!
//! The flattened order (topic order, then lesson order within the topic) is
//! the only navigation order. Lesson ids are unique across the whole course,
//! not just within a topic.

use std::collections::HashSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl $name {
            #[must_use]
            pub fn value(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

numeric_id!(
    /// Course identity.
    CourseId
);
numeric_id!(
    /// Topic identity, unique within its course.
    TopicId
);
numeric_id!(
    /// Lesson identity, unique within its course.
    LessonId
);

/// What kind of lesson this is. Only video lessons carry a media source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonKind {
    Video { source: String },
    Quiz,
    Project,
}

impl LessonKind {
    /// Returns the i18n key for the kind label.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::Video { .. } => "lesson-kind-video",
            Self::Quiz => "lesson-kind-quiz",
            Self::Project => "lesson-kind-project",
        }
    }
}

/// A single curriculum entry (a "subtopic").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    /// Display string, e.g. "45 min".
    pub duration: String,
    pub kind: LessonKind,
    /// Read-only display flag.
    pub completed: bool,
    pub description: String,
}

impl Lesson {
    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self.kind, LessonKind::Video { .. })
    }

    /// Returns the media source for video lessons.
    #[must_use]
    pub fn video_source(&self) -> Option<&str> {
        match &self.kind {
            LessonKind::Video { source } => Some(source),
            LessonKind::Quiz | LessonKind::Project => None,
        }
    }
}

/// An ordered group of lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub lessons: Vec<Lesson>,
}

impl Topic {
    /// Number of lessons flagged completed.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.lessons.iter().filter(|lesson| lesson.completed).count()
    }

    #[must_use]
    pub fn contains(&self, lesson_id: LessonId) -> bool {
        self.lessons.iter().any(|lesson| lesson.id == lesson_id)
    }
}

/// Read-only course content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub total_duration: String,
    /// Advertised lesson count; may exceed the lessons actually present.
    pub total_lessons: u32,
    pub thumbnail: String,
    pub topics: Vec<Topic>,
}

impl Course {
    /// Iterates over every lesson in navigation order.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> + '_ {
        self.topics.iter().flat_map(|topic| topic.lessons.iter())
    }

    /// Iterates over video lessons in navigation order.
    pub fn video_lessons(&self) -> impl Iterator<Item = &Lesson> + '_ {
        self.lessons().filter(|lesson| lesson.is_video())
    }

    /// Looks a lesson up by id across all topics.
    #[must_use]
    pub fn lesson(&self, id: LessonId) -> Option<&Lesson> {
        self.lessons().find(|lesson| lesson.id == id)
    }

    /// Returns the topic owning the given lesson.
    #[must_use]
    pub fn topic_of(&self, id: LessonId) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.contains(id))
    }

    /// Returns the first lesson id that appears more than once, if any.
    #[must_use]
    pub fn duplicate_lesson_id(&self) -> Option<LessonId> {
        let mut seen = HashSet::new();
        self.lessons()
            .map(|lesson| lesson.id)
            .find(|id| !seen.insert(*id))
    }

    /// Returns the first topic id that appears more than once, if any.
    #[must_use]
    pub fn duplicate_topic_id(&self) -> Option<TopicId> {
        let mut seen = HashSet::new();
        self.topics
            .iter()
            .map(|topic| topic.id)
            .find(|id| !seen.insert(*id))
    }
}
