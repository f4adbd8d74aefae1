//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod courses;
pub mod health;
pub mod index;

pub use courses::{
    course_list_handler, create_course_handler, delete_course_handler, get_course_handler,
    update_course_handler,
};
pub use health::health_handler;
pub use index::index_handler;
