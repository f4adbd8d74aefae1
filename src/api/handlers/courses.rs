//! Handlers for the course collection and single-course endpoints.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
};

use crate::api::dto::course::{CourseListResponse, CourseResponse};
use crate::api::extract::{CourseId, CourseInput};
use crate::api::links::{course_uri, courses_uri};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all courses.
///
/// # Endpoint
///
/// `GET /api/v1/courses`
///
/// # Response
///
/// ```json
/// { "courses": [ { "id": 1, "title": "Intro", "url": "http://example.com", "reviews": [] } ] }
/// ```
pub async fn course_list_handler(
    State(state): State<AppState>,
) -> Result<Json<CourseListResponse>, AppError> {
    let courses = state.course_service.list_courses().await?;

    Ok(Json(CourseListResponse {
        courses: courses.into_iter().map(CourseResponse::from).collect(),
    }))
}

/// Creates a course.
///
/// # Endpoint
///
/// `POST /api/v1/courses`
///
/// Body fields `title` and `url`, as JSON or urlencoded form. Responds 201 with
/// the course and a `Location` header pointing at it.
///
/// # Errors
///
/// Returns 400 if a field is missing, the title is empty, or the URL is invalid.
pub async fn create_course_handler(
    State(state): State<AppState>,
    CourseInput(payload): CourseInput,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CourseResponse>), AppError> {
    let new_course = payload.into_new_course()?;

    let details = state.course_service.create_course(new_course).await?;
    let location = course_uri(details.course.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(details.into()),
    ))
}

/// Returns a single course.
///
/// # Endpoint
///
/// `GET /api/v1/courses/{id}`
///
/// # Errors
///
/// Returns 404 if the course does not exist.
pub async fn get_course_handler(
    CourseId(id): CourseId,
    State(state): State<AppState>,
) -> Result<Json<CourseResponse>, AppError> {
    let details = state.course_service.get_course(id).await?;

    Ok(Json(details.into()))
}

/// Replaces title and url of a course.
///
/// # Endpoint
///
/// `PUT /api/v1/courses/{id}`
///
/// Both fields are required; there is no partial update. The write is not
/// preceded by an existence check.
///
/// An unknown id is a deliberate departure from the plain CRUD contract, where
/// only `GET` reports a missing course: the write matches no row and the
/// follow-up read answers 404 instead of failing with 500.
///
/// # Errors
///
/// Returns 400 if a field is missing or invalid.
/// Returns 404 if no course with this id exists after the write.
pub async fn update_course_handler(
    CourseId(id): CourseId,
    State(state): State<AppState>,
    CourseInput(payload): CourseInput,
) -> Result<([(header::HeaderName, String); 1], Json<CourseResponse>), AppError> {
    let fields = payload.into_new_course()?;

    let details = state.course_service.update_course(id, fields).await?;

    Ok(([(header::LOCATION, course_uri(id))], Json(details.into())))
}

/// Deletes a course.
///
/// # Endpoint
///
/// `DELETE /api/v1/courses/{id}`
///
/// Responds 204 with an empty body and a `Location` header pointing at the
/// collection. Deleting an unknown id also responds 204.
pub async fn delete_course_handler(
    CourseId(id): CourseId,
    State(state): State<AppState>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1]), AppError> {
    state.course_service.delete_course(id).await?;

    Ok((StatusCode::NO_CONTENT, [(header::LOCATION, courses_uri())]))
}
