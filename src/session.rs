// SPDX-License-Identifier: MPL-2.0
//! Learning session: one course view with its curriculum sidebar and player.
//!
//! Resolves the `courseId` / `lessonId` route parameters against a
//! [`ContentRepository`], then routes lesson selection through the
//! [`LessonPlayer`] so the player reset and topic expansion always happen
//! together.

use crate::application::port::{ContentRepository, MediaElement};
use crate::application::query::{
    CurriculumNavigator, CurriculumUiState, LessonNavigationInfo, TopicOutline,
};
use crate::domain::course::{Course, CourseId, Lesson, LessonId};
use crate::video_player::{LessonPlayer, PlayerSettings};

/// What the route parameters resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteResolution {
    /// The course id is unknown or unparsable.
    CourseNotFound,
    /// The course exists but has no lesson to show.
    NothingPlayable,
    /// This lesson is current.
    Lesson(LessonId),
}

impl RouteResolution {
    #[must_use]
    pub fn lesson_id(self) -> Option<LessonId> {
        match self {
            Self::Lesson(id) => Some(id),
            Self::CourseNotFound | Self::NothingPlayable => None,
        }
    }
}

/// Parses an optional `lessonId` route parameter. Unparsable values count
/// as absent.
#[must_use]
pub fn parse_lesson_param(param: Option<&str>) -> Option<LessonId> {
    let raw = param?;
    match raw.trim().parse() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::debug!(param = raw, "ignoring unparsable lesson id");
            None
        }
    }
}

/// A course view: content, sidebar state and the lesson player.
pub struct LearningSession<'c, M: MediaElement> {
    course: Option<&'c Course>,
    resolution: RouteResolution,
    ui: CurriculumUiState,
    player: LessonPlayer<M>,
}

impl<'c, M: MediaElement> LearningSession<'c, M> {
    /// Opens the course named by `course_param` and selects the lesson named
    /// by `lesson_param`, falling back to the first video lesson.
    pub fn open<R: ContentRepository + ?Sized>(
        content: &'c R,
        course_param: &str,
        lesson_param: Option<&str>,
        media: M,
        settings: PlayerSettings,
    ) -> Self {
        let course = course_param
            .trim()
            .parse::<CourseId>()
            .ok()
            .and_then(|id| content.get_course(id));

        let mut session = Self {
            course,
            resolution: RouteResolution::CourseNotFound,
            ui: CurriculumUiState::new(),
            player: LessonPlayer::new(media, settings),
        };

        match course {
            Some(_) => session.navigate(lesson_param),
            None => tracing::warn!(course = course_param, "course not found"),
        }
        session
    }

    /// Re-resolves a new `lessonId` route parameter within the open course.
    pub fn navigate(&mut self, lesson_param: Option<&str>) {
        let Some(course) = self.course else {
            return;
        };
        let requested = parse_lesson_param(lesson_param);
        match CurriculumNavigator::new(course).resolve_active_lesson(requested) {
            Some(lesson) => self.activate(course, lesson),
            None => {
                tracing::debug!(course = %course.id, "course has nothing playable");
                self.player.unmount();
                self.resolution = RouteResolution::NothingPlayable;
            }
        }
    }

    fn activate(&mut self, course: &Course, lesson: &Lesson) {
        self.player.select_lesson(course, lesson, &mut self.ui);
        self.resolution = RouteResolution::Lesson(lesson.id);
    }

    #[must_use]
    pub fn resolution(&self) -> RouteResolution {
        self.resolution
    }

    #[must_use]
    pub fn course(&self) -> Option<&'c Course> {
        self.course
    }

    /// The current lesson, whatever its kind.
    #[must_use]
    pub fn current_lesson(&self) -> Option<&'c Lesson> {
        let course = self.course?;
        course.lesson(self.resolution.lesson_id()?)
    }

    /// Selects a lesson from the sidebar. Returns `false` for unknown ids.
    pub fn select_lesson(&mut self, id: LessonId) -> bool {
        let Some(course) = self.course else {
            return false;
        };
        match course.lesson(id) {
            Some(lesson) => {
                self.activate(course, lesson);
                true
            }
            None => {
                tracing::warn!(lesson = %id, course = %course.id, "lesson not in course");
                false
            }
        }
    }

    /// Moves to the next video lesson. Returns `false` at the end.
    pub fn next_lesson(&mut self) -> bool {
        self.step(CurriculumNavigator::next_video)
    }

    /// Moves to the previous video lesson. Returns `false` at the start.
    pub fn previous_lesson(&mut self) -> bool {
        self.step(CurriculumNavigator::previous_video)
    }

    fn step(
        &mut self,
        neighbour: fn(&CurriculumNavigator<'c>, LessonId) -> Option<&'c Lesson>,
    ) -> bool {
        let (Some(course), Some(current)) = (self.course, self.resolution.lesson_id()) else {
            return false;
        };
        match neighbour(&CurriculumNavigator::new(course), current) {
            Some(lesson) => {
                self.activate(course, lesson);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn navigation_info(&self) -> Option<LessonNavigationInfo> {
        let course = self.course?;
        let current = self.resolution.lesson_id()?;
        Some(CurriculumNavigator::new(course).navigation_info(current))
    }

    /// Sidebar outline with the current lesson highlighted.
    #[must_use]
    pub fn outline(&self) -> Vec<TopicOutline<'c>> {
        self.course.map_or_else(Vec::new, |course| {
            CurriculumNavigator::new(course).outline(self.resolution.lesson_id(), &self.ui)
        })
    }

    #[must_use]
    pub fn ui(&self) -> &CurriculumUiState {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut CurriculumUiState {
        &mut self.ui
    }

    #[must_use]
    pub fn player(&self) -> &LessonPlayer<M> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut LessonPlayer<M> {
        &mut self.player
    }
}
