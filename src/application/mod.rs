//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::course_service::CourseService`] - Course CRUD and review lookup

pub mod services;
