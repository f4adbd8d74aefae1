//! Reference to a review attached to a course.

/// Identifies one review and the course it belongs to.
///
/// Reviews are owned elsewhere; courses only need their ids to build links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewRef {
    pub id: i64,
    pub course_id: i64,
}
