//! Validation of course URLs.
//!
//! A course URL must be absolute, use `http`, `https` or `ftp`, and name a host.
//! The value is stored exactly as submitted; nothing is normalized.

use url::Url;
use validator::ValidationError;

/// Schemes accepted for course links.
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Reasons a course URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CourseUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Checks that `input` is an absolute course URL.
///
/// # Errors
///
/// Returns [`CourseUrlError::InvalidFormat`] for strings that do not parse,
/// [`CourseUrlError::UnsupportedScheme`] for schemes such as `mailto:` or
/// `javascript:`, and [`CourseUrlError::MissingHost`] when no host is present.
pub fn check_course_url(input: &str) -> Result<(), CourseUrlError> {
    let url = Url::parse(input).map_err(|e| CourseUrlError::InvalidFormat(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(CourseUrlError::UnsupportedScheme(url.scheme().to_string()));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(CourseUrlError::MissingHost),
    }
}

/// `validator` adapter for [`check_course_url`].
pub fn validate_course_url(input: &str) -> Result<(), ValidationError> {
    check_course_url(input).map_err(|e| {
        let mut err = ValidationError::new("url").with_message("Invalid course URL.".into());
        err.add_param("reason".into(), &e.to_string());
        err
    })
}
