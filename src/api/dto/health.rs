//! Body of `GET /health`.

use serde::Serialize;

/// Overall service state, derived from the database check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Healthy,
    Degraded,
}

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Ok,
    Error,
}

/// `{"status", "version", "checks": {"database": ...}}`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceState,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// The course service depends on PostgreSQL only, so there is one check.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: DatabaseCheck,
}

/// Result of counting courses; `message` holds the count or the failure.
#[derive(Debug, Serialize)]
pub struct DatabaseCheck {
    pub status: CheckState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
