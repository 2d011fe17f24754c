// SPDX-License-Identifier: MPL-2.0
//! On-disk shapes of the bundled content files and their mapping onto
//! domain types.

use crate::domain::catalog::{Category, CourseListing, Level};
use crate::domain::course::{Course, CourseId, Lesson, LessonId, LessonKind, Topic, TopicId};
use crate::domain::enrollment::{Enrollment, EnrollmentStatus, ResumePoint};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;

// =============================================================================
// Courses
// =============================================================================

#[derive(Debug, Deserialize)]
struct CoursesFile {
    #[serde(default)]
    courses: Vec<CourseRecord>,
}

#[derive(Debug, Deserialize)]
struct CourseRecord {
    id: u32,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    instructor: String,
    #[serde(default)]
    total_duration: String,
    #[serde(default)]
    total_lessons: u32,
    #[serde(default)]
    thumbnail: String,
    #[serde(default)]
    topics: Vec<TopicRecord>,
}

#[derive(Debug, Deserialize)]
struct TopicRecord {
    id: u32,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    lessons: Vec<LessonRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum KindRecord {
    Video,
    Quiz,
    Project,
}

#[derive(Debug, Deserialize)]
struct LessonRecord {
    id: u32,
    title: String,
    #[serde(default)]
    duration: String,
    kind: KindRecord,
    source: Option<String>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    description: String,
}

pub(super) fn parse_courses(text: &str) -> Result<Vec<Course>> {
    let file: CoursesFile = from_toml("courses", text)?;
    file.courses.into_iter().map(course_from_record).collect()
}

fn course_from_record(record: CourseRecord) -> Result<Course> {
    let course_id = CourseId(record.id);
    let topics = record
        .topics
        .into_iter()
        .map(|topic| topic_from_record(course_id, topic))
        .collect::<Result<Vec<_>>>()?;

    let course = Course {
        id: course_id,
        title: record.title,
        description: record.description,
        instructor: record.instructor,
        total_duration: record.total_duration,
        total_lessons: record.total_lessons,
        thumbnail: record.thumbnail,
        topics,
    };

    if let Some(id) = course.duplicate_topic_id() {
        return Err(Error::Content(format!(
            "course {course_id}: duplicate topic id {id}"
        )));
    }
    if let Some(id) = course.duplicate_lesson_id() {
        return Err(Error::Content(format!(
            "course {course_id}: duplicate lesson id {id}"
        )));
    }
    Ok(course)
}

fn topic_from_record(course_id: CourseId, record: TopicRecord) -> Result<Topic> {
    let lessons = record
        .lessons
        .into_iter()
        .map(|lesson| lesson_from_record(course_id, lesson))
        .collect::<Result<Vec<_>>>()?;

    Ok(Topic {
        id: TopicId(record.id),
        title: record.title,
        description: record.description,
        duration: record.duration,
        lessons,
    })
}

fn lesson_from_record(course_id: CourseId, record: LessonRecord) -> Result<Lesson> {
    let kind = match (record.kind, record.source) {
        (KindRecord::Video, Some(source)) if !source.trim().is_empty() => {
            LessonKind::Video { source }
        }
        (KindRecord::Video, _) => {
            return Err(Error::Content(format!(
                "course {course_id}: video lesson {} has no source",
                record.id
            )));
        }
        (KindRecord::Quiz, None) => LessonKind::Quiz,
        (KindRecord::Project, None) => LessonKind::Project,
        (KindRecord::Quiz | KindRecord::Project, Some(_)) => {
            return Err(Error::Content(format!(
                "course {course_id}: lesson {} has a source but is not a video",
                record.id
            )));
        }
    };

    Ok(Lesson {
        id: LessonId(record.id),
        title: record.title,
        duration: record.duration,
        kind,
        completed: record.completed,
        description: record.description,
    })
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<CategoryRecord>,
    #[serde(default)]
    listings: Vec<ListingRecord>,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    id: u32,
    name: String,
    #[serde(default)]
    technologies: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ListingRecord {
    id: u32,
    title: String,
    instructor: String,
    category_id: u32,
    level: String,
    technology: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    students: u32,
    #[serde(default)]
    rating: f32,
    #[serde(default)]
    price: f32,
}

pub(super) fn parse_catalog(text: &str) -> Result<(Vec<Category>, Vec<CourseListing>)> {
    let file: CatalogFile = from_toml("catalog", text)?;

    let categories = file
        .categories
        .into_iter()
        .map(|record| Category {
            id: record.id,
            name: record.name,
            technologies: record.technologies,
        })
        .collect();

    let listings = file
        .listings
        .into_iter()
        .map(|record| {
            let level: Level = record
                .level
                .parse()
                .map_err(|err| Error::Content(format!("listing {}: {err}", record.id)))?;
            Ok(CourseListing {
                id: CourseId(record.id),
                title: record.title,
                instructor: record.instructor,
                category_id: record.category_id,
                level,
                technology: record.technology,
                tags: record.tags,
                students: record.students,
                rating: record.rating,
                price: record.price,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((categories, listings))
}

// =============================================================================
// Enrollments
// =============================================================================

#[derive(Debug, Deserialize)]
struct EnrollmentsFile {
    #[serde(default)]
    enrollments: Vec<EnrollmentRecord>,
}

#[derive(Debug, Deserialize)]
struct EnrollmentRecord {
    course_id: u32,
    title: String,
    #[serde(default)]
    instructor: String,
    #[serde(default)]
    progress: u8,
    status: String,
    #[serde(default)]
    completed_lessons: u32,
    #[serde(default)]
    total_lessons: u32,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    rating: f32,
    purchased_on: String,
    last_accessed: Option<String>,
    resume: Option<ResumeRecord>,
    #[serde(default)]
    certificate_earned: bool,
}

#[derive(Debug, Deserialize)]
struct ResumeRecord {
    lesson_id: u32,
    lesson_title: String,
    topic_title: String,
}

pub(super) fn parse_enrollments(text: &str) -> Result<Vec<Enrollment>> {
    let file: EnrollmentsFile = from_toml("enrollments", text)?;
    file.enrollments
        .into_iter()
        .map(enrollment_from_record)
        .collect()
}

fn enrollment_from_record(record: EnrollmentRecord) -> Result<Enrollment> {
    let course_id = CourseId(record.course_id);
    let context = |err: String| Error::Content(format!("enrollment for course {course_id}: {err}"));

    if record.progress > 100 {
        return Err(context(format!("progress {} exceeds 100", record.progress)));
    }
    let status: EnrollmentStatus = record.status.parse().map_err(context)?;
    let purchased_on = parse_date(&record.purchased_on).map_err(context)?;
    let last_accessed = record
        .last_accessed
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(context)?;

    Ok(Enrollment {
        course_id,
        title: record.title,
        instructor: record.instructor,
        progress: record.progress,
        status,
        completed_lessons: record.completed_lessons,
        total_lessons: record.total_lessons,
        duration: record.duration,
        rating: record.rating,
        purchased_on,
        last_accessed,
        resume: record.resume.map(|resume| ResumePoint {
            lesson_id: LessonId(resume.lesson_id),
            lesson_title: resume.lesson_title,
            topic_title: resume.topic_title,
        }),
        certificate_earned: record.certificate_earned,
    })
}

fn parse_date(text: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|err| format!("invalid date {text:?}: {err}"))
}

fn from_toml<T: serde::de::DeserializeOwned>(what: &str, text: &str) -> Result<T> {
    toml::from_str(text).map_err(|err| Error::Content(format!("{what}: {err}")))
}
