//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{
    CheckState, DatabaseCheck, HealthChecks, HealthResponse, ServiceState,
};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The database check failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 3 courses" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let healthy = db_check.status == CheckState::Ok;

    let response = HealthResponse {
        status: if healthy {
            ServiceState::Healthy
        } else {
            ServiceState::Degraded
        },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { database: db_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity by counting courses.
async fn check_database(state: &AppState) -> DatabaseCheck {
    match state.course_service.count_courses().await {
        Ok(count) => DatabaseCheck {
            status: CheckState::Ok,
            message: Some(format!("Connected, {count} courses")),
        },
        Err(e) => DatabaseCheck {
            status: CheckState::Error,
            message: Some(format!("Database error: {e}")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::CourseService;
    use crate::domain::repositories::MockCourseRepository;
    use crate::error::AppError;
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn make_server(mock_repo: MockCourseRepository) -> TestServer {
        let state = AppState::new(Arc::new(CourseService::new(Arc::new(mock_repo))));
        let app = Router::new()
            .route("/health", get(health_handler))
            .with_state(state);
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_health_ok() {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo.expect_count().returning(|| Ok(3));
        let server = make_server(mock_repo);

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["checks"]["database"]["status"], "ok");
        assert_eq!(body["checks"]["database"]["message"], "Connected, 3 courses");
        assert!(body.get("version").is_some());
    }

    #[tokio::test]
    async fn test_health_degraded() {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo
            .expect_count()
            .returning(|| Err(AppError::internal("Database error", json!({}))));
        let server = make_server(mock_repo);

        let response = server.get("/health").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body = response.json::<Value>();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["checks"]["database"]["status"], "error");
    }
}
