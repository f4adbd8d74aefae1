//! Utility functions shared across layers.
//!
//! - [`course_url`] - Absolute URL checks for course links

pub mod course_url;
