//! DTOs for course endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};
use validator::Validate;

use crate::api::links::review_uri;
use crate::domain::entities::{CourseDetails, NewCourse};
use crate::error::AppError;
use crate::utils::course_url::validate_course_url;

/// Request body for `POST /api/v1/courses` and `PUT /api/v1/courses/{id}`.
///
/// Accepted as JSON or as a urlencoded form. Both fields are required on
/// update as well as on create. JSON numbers and booleans are read as their
/// text, so `{"title": 123}` stores the title `"123"`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CourseRequest {
    #[serde(default, deserialize_with = "scalar_as_text")]
    #[validate(
        required(message = "No course title provided."),
        length(min = 1, message = "No course title provided.")
    )]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "scalar_as_text")]
    #[validate(
        required(message = "No course URL provided."),
        custom(function = validate_course_url, message = "Invalid course URL.")
    )]
    pub url: Option<String>,
}

fn scalar_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string, got {other}"
        ))),
    }
}

impl CourseRequest {
    /// Validates the request and converts it into the fields to store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming every missing or invalid field.
    pub fn into_new_course(self) -> Result<NewCourse, AppError> {
        self.validate()?;

        let (Some(title), Some(url)) = (self.title, self.url) else {
            return Err(AppError::bad_request(
                "No course title or URL provided.",
                json!({}),
            ));
        };

        Ok(NewCourse { title, url })
    }
}

/// Marshaled course: `{id, title, url, reviews}`.
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub reviews: Vec<String>,
}

impl From<CourseDetails> for CourseResponse {
    fn from(details: CourseDetails) -> Self {
        Self {
            id: details.course.id,
            title: details.course.title,
            url: details.course.url,
            reviews: details.review_ids.into_iter().map(review_uri).collect(),
        }
    }
}

/// Response of `GET /api/v1/courses`.
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Course;
    use chrono::Utc;

    fn request(title: Option<&str>, url: Option<&str>) -> CourseRequest {
        CourseRequest {
            title: title.map(str::to_string),
            url: url.map(str::to_string),
        }
    }

    fn messages(err: AppError) -> String {
        match err {
            AppError::Validation { message, .. } => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_request() {
        let course = request(Some("Intro"), Some("http://example.com"))
            .into_new_course()
            .unwrap();

        assert_eq!(course.title, "Intro");
        assert_eq!(course.url, "http://example.com");
    }

    #[test]
    fn test_missing_title() {
        let err = request(None, Some("http://example.com"))
            .into_new_course()
            .unwrap_err();

        assert_eq!(messages(err), "No course title provided.");
    }

    #[test]
    fn test_empty_title() {
        let err = request(Some(""), Some("http://example.com"))
            .into_new_course()
            .unwrap_err();

        assert_eq!(messages(err), "No course title provided.");
    }

    #[test]
    fn test_missing_url() {
        let err = request(Some("Intro"), None).into_new_course().unwrap_err();

        assert_eq!(messages(err), "No course URL provided.");
    }

    #[test]
    fn test_invalid_url() {
        let err = request(Some("Intro"), Some("not-a-url"))
            .into_new_course()
            .unwrap_err();

        match err {
            AppError::Validation { message, details } => {
                assert_eq!(message, "Invalid course URL.");
                assert!(details.get("url").is_some());
                assert!(details.get("title").is_none());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_request_reports_both_fields() {
        let err = CourseRequest::default().into_new_course().unwrap_err();

        match err {
            AppError::Validation { details, .. } => {
                assert!(details.get("title").is_some());
                assert!(details.get("url").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_numeric_title_read_as_text() {
        let request: CourseRequest =
            serde_json::from_value(serde_json::json!({"title": 123, "url": "http://example.com"}))
                .unwrap();

        let course = request.into_new_course().unwrap();

        assert_eq!(course.title, "123");
    }

    #[test]
    fn test_null_and_absent_fields_are_missing() {
        let request: CourseRequest =
            serde_json::from_value(serde_json::json!({"title": null})).unwrap();

        assert!(request.title.is_none());
        assert!(request.url.is_none());
    }

    #[test]
    fn test_structured_title_rejected() {
        let result = serde_json::from_value::<CourseRequest>(
            serde_json::json!({"title": ["a"], "url": "http://example.com"}),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_response_marshals_review_links() {
        let details = CourseDetails::new(
            Course::new(
                2,
                "Intro".to_string(),
                "http://example.com".to_string(),
                Utc::now(),
            ),
            vec![5, 8],
        );

        let json = serde_json::to_value(CourseResponse::from(details)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 2,
                "title": "Intro",
                "url": "http://example.com",
                "reviews": ["/api/v1/reviews/5", "/api/v1/reviews/8"]
            })
        );
    }
}
