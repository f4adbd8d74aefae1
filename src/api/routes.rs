//! API route configuration.
//!
//! The table is mounted under [`crate::api::links::API_PREFIX`] by
//! [`crate::routes::app_router`].

use crate::api::handlers::{
    course_list_handler, create_course_handler, delete_course_handler, get_course_handler,
    update_course_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Course routes.
///
/// # Endpoints
///
/// - `GET    /courses`        - List all courses
/// - `POST   /courses`        - Create a course
/// - `GET    /courses/{id}`   - Fetch one course
/// - `PUT    /courses/{id}`   - Replace title and url of a course
/// - `DELETE /courses/{id}`   - Delete a course
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(course_list_handler).post(create_course_handler),
        )
        .route(
            "/courses/{id}",
            get(get_course_handler)
                .put(update_course_handler)
                .delete(delete_course_handler),
        )
}
