//! PostgreSQL repository implementations.
//!
//! Queries are checked at runtime and mapped through [`sqlx::FromRow`] row
//! structs, so the crate builds without a live database.
//!
//! - [`PgCourseRepository`] - Course storage and review lookup

pub mod pg_course_repository;

pub use pg_course_repository::PgCourseRepository;
