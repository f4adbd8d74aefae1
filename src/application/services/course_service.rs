//! Course management service.

use crate::domain::entities::{CourseDetails, NewCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for reading and writing courses.
///
/// Every read returns [`CourseDetails`] so handlers can render review links
/// without touching the repository themselves.
pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    /// Creates a new course service.
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    /// Lists all courses with their review ids.
    ///
    /// Reviews for the whole page are fetched in one query and grouped in one pass.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_courses(&self) -> Result<Vec<CourseDetails>, AppError> {
        let courses = self.repository.list().await?;
        if courses.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
        let reviews = self.repository.reviews_for(&ids).await?;

        Ok(CourseDetails::attach_reviews(courses, reviews))
    }

    /// Retrieves a single course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no course has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_course(&self, id: i64) -> Result<CourseDetails, AppError> {
        let course = self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("Course {id} does not exist."), json!({"id": id}))
        })?;

        let reviews = self.repository.reviews_for(&[course.id]).await?;
        let review_ids = reviews.into_iter().map(|r| r.id).collect();

        Ok(CourseDetails::new(course, review_ids))
    }

    /// Creates a course.
    ///
    /// A new course has no reviews, so none are loaded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_course(&self, new_course: NewCourse) -> Result<CourseDetails, AppError> {
        let course = self.repository.create(new_course).await?;
        tracing::info!(course_id = course.id, "Course created");

        Ok(CourseDetails::new(course, Vec::new()))
    }

    /// Overwrites title and url, then returns the stored course.
    ///
    /// The write is issued without checking that the course exists; an unknown
    /// id changes nothing and the follow-up read reports it as not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no course has this id after the write.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_course(
        &self,
        id: i64,
        fields: NewCourse,
    ) -> Result<CourseDetails, AppError> {
        let affected = self.repository.update(id, fields).await?;
        if affected == 0 {
            tracing::debug!(course_id = id, "Update matched no course");
        } else {
            tracing::info!(course_id = id, "Course updated");
        }

        self.get_course(id).await
    }

    /// Deletes a course. Deleting an unknown id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_course(&self, id: i64) -> Result<(), AppError> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            tracing::debug!(course_id = id, "Delete matched no course");
        } else {
            tracing::info!(course_id = id, "Course deleted");
        }

        Ok(())
    }

    /// Counts stored courses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_courses(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
