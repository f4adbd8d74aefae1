//! URI builders for resources served under [`API_PREFIX`].
//!
//! Used for `Location` headers and for the review links embedded in course
//! representations. All URIs are absolute paths without scheme or host.

/// Mount point of the versioned REST API.
pub const API_PREFIX: &str = "/api/v1";

/// URI of the course collection.
pub fn courses_uri() -> String {
    format!("{API_PREFIX}/courses")
}

/// URI of a single course.
pub fn course_uri(id: i64) -> String {
    format!("{API_PREFIX}/courses/{id}")
}

/// URI of a single review.
pub fn review_uri(id: i64) -> String {
    format!("{API_PREFIX}/reviews/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uris() {
        assert_eq!(courses_uri(), "/api/v1/courses");
        assert_eq!(course_uri(12), "/api/v1/courses/12");
        assert_eq!(review_uri(3), "/api/v1/reviews/3");
    }
}
