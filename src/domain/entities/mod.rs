//! Core domain entities.
//!
//! - [`Course`] - A stored course
//! - [`NewCourse`] - Title and URL written on create and on full update
//! - [`CourseDetails`] - A course together with the ids of its reviews
//! - [`ReviewRef`] - The `(id, course_id)` pair of a review

pub mod course;
pub mod review;

pub use course::{Course, CourseDetails, NewCourse};
pub use review::ReviewRef;
