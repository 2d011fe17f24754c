// SPDX-License-Identifier: MPL-2.0
//! Curriculum navigation over a course's nested topic/lesson tree.
//!
//! This module provides a `CurriculumNavigator` that resolves the active
//! lesson from a route parameter and finds the previous/next *video* lesson
//! in flattened order, and a `CurriculumUiState` holding the sidebar's
//! per-session state (expanded topics, active tab, notes).
//!
//! Quiz and project lessons can be selected for display but never take part
//! in sequential next/previous traversal.

use crate::domain::course::{Course, Lesson, LessonId, TopicId};
use crate::domain::ui::SidebarTab;
use std::collections::BTreeSet;

/// Navigation state information for UI rendering.
///
/// A snapshot of where the current lesson sits among the course's video
/// lessons, so the controls can enable or disable the previous/next buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LessonNavigationInfo {
    /// Whether a later video lesson exists.
    pub has_next: bool,
    /// Whether an earlier video lesson exists.
    pub has_previous: bool,
    /// Position among video lessons (0-indexed), if the lesson is a video.
    pub video_index: Option<usize>,
    /// Total number of video lessons in the course.
    pub video_count: usize,
}

/// One row of the curriculum sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRow<'a> {
    pub lesson: &'a Lesson,
    pub is_current: bool,
}

/// One topic section of the curriculum sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicOutline<'a> {
    pub id: TopicId,
    pub title: &'a str,
    pub duration: &'a str,
    pub completed: usize,
    pub total: usize,
    pub expanded: bool,
    pub lessons: Vec<LessonRow<'a>>,
}

/// Read-only navigator over a single course.
#[derive(Debug, Clone, Copy)]
pub struct CurriculumNavigator<'a> {
    course: &'a Course,
}

impl<'a> CurriculumNavigator<'a> {
    #[must_use]
    pub fn new(course: &'a Course) -> Self {
        Self { course }
    }

    #[must_use]
    pub fn course(&self) -> &'a Course {
        self.course
    }

    /// Resolves the lesson to show for an optional requested id.
    ///
    /// An exact id match wins, whatever the lesson kind. Otherwise, and also
    /// when the id is unknown, the first video lesson in traversal order is
    /// used. Returns `None` only when the course has no video lesson at all.
    #[must_use]
    pub fn resolve_active_lesson(&self, requested: Option<LessonId>) -> Option<&'a Lesson> {
        requested
            .and_then(|id| self.course.lesson(id))
            .or_else(|| self.first_video())
    }

    #[must_use]
    pub fn first_video(&self) -> Option<&'a Lesson> {
        self.course.video_lessons().next()
    }

    /// Returns the first video lesson after `current` in flattened order.
    ///
    /// `None` if `current` is unknown or no video follows it.
    #[must_use]
    pub fn next_video(&self, current: LessonId) -> Option<&'a Lesson> {
        let mut lessons = self.course.lessons();
        lessons.by_ref().find(|lesson| lesson.id == current)?;
        lessons.find(|lesson| lesson.is_video())
    }

    /// Returns the last video lesson before `current` in flattened order.
    ///
    /// `None` if `current` is unknown or no video precedes it.
    #[must_use]
    pub fn previous_video(&self, current: LessonId) -> Option<&'a Lesson> {
        let mut last_video = None;
        for lesson in self.course.lessons() {
            if lesson.id == current {
                return last_video;
            }
            if lesson.is_video() {
                last_video = Some(lesson);
            }
        }
        None
    }

    /// Returns navigation info for the given lesson.
    #[must_use]
    pub fn navigation_info(&self, current: LessonId) -> LessonNavigationInfo {
        LessonNavigationInfo {
            has_next: self.next_video(current).is_some(),
            has_previous: self.previous_video(current).is_some(),
            video_index: self
                .course
                .video_lessons()
                .position(|lesson| lesson.id == current),
            video_count: self.course.video_lessons().count(),
        }
    }

    /// Builds the sidebar outline, marking the current lesson and the
    /// expanded topics.
    #[must_use]
    pub fn outline(
        &self,
        current: Option<LessonId>,
        ui: &CurriculumUiState,
    ) -> Vec<TopicOutline<'a>> {
        self.course
            .topics
            .iter()
            .map(|topic| TopicOutline {
                id: topic.id,
                title: &topic.title,
                duration: &topic.duration,
                completed: topic.completed_count(),
                total: topic.lessons.len(),
                expanded: ui.is_expanded(topic.id),
                lessons: topic
                    .lessons
                    .iter()
                    .map(|lesson| LessonRow {
                        lesson,
                        is_current: Some(lesson.id) == current,
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Curriculum sidebar state for one learning session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurriculumUiState {
    expanded: BTreeSet<TopicId>,
    pub active_tab: SidebarTab,
    pub sidebar_open: bool,
    /// Free-form notes; kept for the session only.
    pub notes: String,
}

impl Default for CurriculumUiState {
    fn default() -> Self {
        Self {
            expanded: BTreeSet::new(),
            active_tab: SidebarTab::default(),
            sidebar_open: true,
            notes: String::new(),
        }
    }
}

impl CurriculumUiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_expanded(&self, topic: TopicId) -> bool {
        self.expanded.contains(&topic)
    }

    pub fn expanded_topics(&self) -> impl Iterator<Item = TopicId> + '_ {
        self.expanded.iter().copied()
    }

    /// Flips whether a topic is expanded.
    pub fn toggle_topic_expanded(&mut self, topic: TopicId) {
        if !self.expanded.remove(&topic) {
            self.expanded.insert(topic);
        }
    }

    /// Expands the topic owning `lesson` without collapsing any other.
    ///
    /// Returns the owning topic, or `None` if the lesson is not in the course.
    pub fn expand_topic_containing(&mut self, course: &Course, lesson: LessonId) -> Option<TopicId> {
        let topic = course.topic_of(lesson)?.id;
        self.expanded.insert(topic);
        Some(topic)
    }

    pub fn set_active_tab(&mut self, tab: SidebarTab) {
        self.active_tab = tab;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
