//! Handler for the service root.

/// Plain-text greeting served at `GET /`.
pub async fn index_handler() -> &'static str {
    "Hello"
}
