//! Course entity.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::ReviewRef;

/// A stored course.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Creates a new Course instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let course = Course::new(1, "Intro".to_string(), "http://example.com".to_string(), Utc::now());
    /// ```
    pub fn new(id: i64, title: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            url,
            created_at,
        }
    }
}

/// Fields written when a course is created or fully updated.
///
/// Both fields are always present; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub url: String,
}

/// A course together with the ids of its reviews, ordered by review id.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDetails {
    pub course: Course,
    pub review_ids: Vec<i64>,
}

impl CourseDetails {
    pub fn new(course: Course, review_ids: Vec<i64>) -> Self {
        Self { course, review_ids }
    }

    /// Pairs each course with its reviews in one pass over `reviews`.
    ///
    /// `reviews` must already be ordered by review id; each course keeps that order.
    /// Reviews of courses not in `courses` are dropped.
    pub fn attach_reviews(courses: Vec<Course>, reviews: Vec<ReviewRef>) -> Vec<Self> {
        let mut by_course: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
        for review in reviews {
            by_course.entry(review.course_id).or_default().push(review.id);
        }

        courses
            .into_iter()
            .map(|course| {
                let review_ids = by_course.remove(&course.id).unwrap_or_default();
                Self::new(course, review_ids)
            })
            .collect()
    }
}
