//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Body and path extractors with API-shaped rejections
//! - [`handlers`] - HTTP request handlers
//! - [`links`] - URI builders for `Location` headers and review links
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod links;
pub mod middleware;
pub mod routes;
