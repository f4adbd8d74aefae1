//! Request extractors for course endpoints.

use axum::{
    Form, Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts},
};
use serde_json::json;

use crate::api::dto::course::CourseRequest;
use crate::error::AppError;

/// Course fields read from a JSON or urlencoded form body.
///
/// The body format is chosen from `Content-Type`. Any other content type, or
/// none, yields a request with no fields so validation reports what is missing.
#[derive(Debug)]
pub struct CourseInput(pub CourseRequest);

enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(content_type) = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return BodyKind::Other;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

impl<S> FromRequest<S> for CourseInput
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let Json(body) = Json::<CourseRequest>::from_request(req, state)
                    .await
                    .map_err(|rejection| malformed(rejection.body_text()))?;
                Ok(Self(body))
            }
            BodyKind::Form => {
                let Form(body) = Form::<CourseRequest>::from_request(req, state)
                    .await
                    .map_err(|rejection| malformed(rejection.body_text()))?;
                Ok(Self(body))
            }
            BodyKind::Other => Ok(Self(CourseRequest::default())),
        }
    }
}

fn malformed(reason: String) -> AppError {
    AppError::bad_request("Malformed request body", json!({ "reason": reason }))
}

/// Integer course id taken from the `{id}` path segment.
///
/// A segment that is not an integer does not name a course, so it is reported
/// as 404 rather than 400.
#[derive(Debug, Clone, Copy)]
pub struct CourseId(pub i64);

impl<S> FromRequestParts<S> for CourseId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => Err(AppError::not_found(
                "The requested URL was not found on the server.",
                json!({ "reason": rejection.body_text() }),
            )),
        }
    }
}
