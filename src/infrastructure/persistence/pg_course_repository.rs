//! PostgreSQL implementation of the course repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Course, NewCourse, ReviewRef};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CourseRow {
    id: i64,
    title: String,
    url: String,
    created_at: DateTime<Utc>,
}

impl From<CourseRow> for Course {
    fn from(r: CourseRow) -> Self {
        Course::new(r.id, r.title, r.url, r.created_at)
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    course_id: i64,
}

/// PostgreSQL repository for courses.
///
/// Updates and deletes are single statements keyed by id and report the number
/// of affected rows instead of failing on a missing course.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn list(&self) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, title, url, created_at
            FROM courses
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, title, url, created_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Course::from))
    }

    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (title, url)
            VALUES ($1, $2)
            RETURNING id, title, url, created_at
            "#,
        )
        .bind(new_course.title)
        .bind(new_course.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, fields: NewCourse) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE courses SET title = $2, url = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(fields.title)
        .bind(fields.url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn reviews_for(&self, course_ids: &[i64]) -> Result<Vec<ReviewRef>, AppError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, course_id
            FROM reviews
            WHERE course_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(course_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ReviewRef {
                id: r.id,
                course_id: r.course_id,
            })
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
