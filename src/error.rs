//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. The error renders as
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Course 7 does not exist.", "details": { "id": 7 } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

/// Logs the driver error once; the response carries only a generic message.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

/// Collapses field errors into one 400.
///
/// The message lists every failing field's message, ordered by field name, and
/// `details` maps each field to its messages.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<(String, Vec<String>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Invalid value for '{field}'"))
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .iter()
            .flat_map(|(_, messages)| messages.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        let details: Map<String, Value> = fields
            .into_iter()
            .map(|(field, messages)| (field, json!(messages)))
            .collect();

        AppError::bad_request(message, Value::Object(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use tracing_test::traced_test;
    use validator::ValidationError;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_renders_404() {
        let (status, body) = render(AppError::not_found(
            "Course 9999 does not exist.",
            json!({"id": 9999}),
        ))
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "not_found");
        assert_eq!(body["error"]["message"], "Course 9999 does not exist.");
        assert_eq!(body["error"]["details"]["id"], 9999);
    }

    #[tokio::test]
    async fn test_internal_renders_500() {
        let (status, body) = render(AppError::internal("Database error", json!({}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "internal_error");
    }

    #[tokio::test]
    #[traced_test]
    async fn test_database_error_logged_once() {
        let (status, body) = render(AppError::from(sqlx::Error::RowNotFound)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Database error");
        logs_assert(|lines: &[&str]| {
            match lines.iter().filter(|line| line.contains("ERROR")).count() {
                1 => Ok(()),
                n => Err(format!("expected one ERROR line, got {n}")),
            }
        });
    }

    #[tokio::test]
    async fn test_validation_errors_name_fields() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "url",
            ValidationError::new("required").with_message("No course URL provided.".into()),
        );
        errors.add(
            "title",
            ValidationError::new("required").with_message("No course title provided.".into()),
        );

        let (status, body) = render(AppError::from(errors)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "validation_error");
        assert_eq!(
            body["error"]["message"],
            "No course title provided. No course URL provided."
        );
        assert_eq!(body["error"]["details"]["title"][0], "No course title provided.");
        assert_eq!(body["error"]["details"]["url"][0], "No course URL provided.");
    }

    #[test]
    fn test_validation_error_without_message_falls_back() {
        let mut errors = ValidationErrors::new();
        errors.add("title", ValidationError::new("length"));

        let err = AppError::from(errors);

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Invalid value for 'title'");
    }
}
