//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Plain-text greeting
//! - `GET  /health`    - Health check (database)
//! - `/api/v1/*`       - Course REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, index_handler};
use crate::api::links::API_PREFIX;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Built once at startup; `state` is shared by every handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest(API_PREFIX, api::routes::course_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::CourseService;
    use crate::domain::entities::Course;
    use crate::domain::repositories::MockCourseRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn make_app(mock_repo: MockCourseRepository) -> NormalizePath<Router> {
        let state = AppState::new(Arc::new(CourseService::new(Arc::new(mock_repo))));
        app_router(state)
    }

    async fn get_status(app: NormalizePath<Router>, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn repo_with_course() -> MockCourseRepository {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo.expect_find_by_id().returning(|id| {
            Ok(Some(Course::new(
                id,
                "Intro".to_string(),
                "http://example.com".to_string(),
                Utc::now(),
            )))
        });
        mock_repo.expect_reviews_for().returning(|_| Ok(vec![]));
        mock_repo
    }

    #[tokio::test]
    async fn test_index() {
        let (status, body) = get_status(make_app(MockCourseRepository::new()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello");
    }

    #[tokio::test]
    async fn test_courses_mounted_under_prefix() {
        let (status, _) = get_status(make_app(repo_with_course()), "/api/v1/courses/1").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = get_status(make_app(repo_with_course()), "/courses/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo.expect_list().returning(|| Ok(vec![]));

        let (status, body) = get_status(make_app(mock_repo), "/api/v1/courses/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"courses":[]}"#);
    }
}
