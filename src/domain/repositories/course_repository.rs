//! Repository trait for course storage.

use crate::domain::entities::{Course, NewCourse, ReviewRef};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for courses and the review ids attached to them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Returns every course ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Course>, AppError>;

    /// Finds a course by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// Inserts a course and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError>;

    /// Overwrites title and url of the course with `id`.
    ///
    /// Returns the number of rows affected; an unknown id affects none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, fields: NewCourse) -> Result<u64, AppError>;

    /// Deletes the course with `id`.
    ///
    /// Returns the number of rows affected; an unknown id affects none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;

    /// Loads the reviews attached to any of `course_ids`, ordered by review id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn reviews_for(&self, course_ids: &[i64]) -> Result<Vec<ReviewRef>, AppError>;

    /// Counts stored courses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
